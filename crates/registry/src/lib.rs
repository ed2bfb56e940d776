//! # hookgen-registry
//!
//! Build-time generation of "hook" components for a component-based UI
//! framework. A registry of (host component, hook point, inserted
//! component) triples is validated against the filesystem and then
//! materialized as one small generated component per (host, hook point)
//! pair, rendering the inserted components in sequence. A downstream
//! bundler imports the generated files into the real application tree.
//!
//! Logical component paths may carry a bundler alias prefix
//! (`@Name/...`); the [`AliasResolver`] maps those to physical paths for
//! validation, while generated import statements keep the alias form.
//!
//! ## Example
//!
//! ```rust,no_run
//! use hookgen_registry::HookRegistry;
//!
//! let mut registry = HookRegistry::with_alias_file("generated", "aliases.json")?;
//! registry.add("@App/Page.vue", "_toolbar", "@Shop/CartButton.vue")?;
//! registry.dump_all()?;
//! # Ok::<(), hookgen_registry::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod alias;
pub mod checks;
mod emitter;
pub mod error;
pub mod registry;

pub use alias::AliasResolver;
pub use checks::{DiskFileCheck, FileCheck, OutputPathRule, VendorSegmentRule};
pub use error::{Error, Result};
pub use registry::{HookMap, HookRegistry};
