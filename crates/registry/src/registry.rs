//! The hook registry: mapping maintenance, validation, and emission.

use crate::alias::AliasResolver;
use crate::checks::{DiskFileCheck, FileCheck, OutputPathRule, VendorSegmentRule};
use crate::emitter::{self, ComponentEntry};
use crate::{Error, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File extension of component files, emitted ones included.
const COMPONENT_EXT: &str = "vue";

/// Literal marker token a host component uses to declare a hook point.
const HOOK_MARKER: &str = "hook_name";

/// Suffix appended to derived component identifiers so they cannot
/// collide with plain tag names.
const COMPONENT_SUFFIX: &str = "C";

/// The full hook mapping: host component path, to hook point name, to
/// the ordered sequence of inserted component paths.
pub type HookMap = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// Registry of (host component, hook point, inserted component) triples.
///
/// Each `add` validates inline that the hook point is declared in the
/// host's resolved source and that the inserted component's resolved
/// file exists; only validated triples are stored, in insertion order,
/// which determines render and import order in the emitted files.
/// [`dump_all`](Self::dump_all) clears the output directory and writes
/// one generated component per (host, hook point) pair.
pub struct HookRegistry {
    output_dir: PathBuf,
    resolver: AliasResolver,
    file_check: Box<dyn FileCheck>,
    path_rule: Box<dyn OutputPathRule>,
    hooks: HookMap,
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRegistry")
            .field("output_dir", &self.output_dir)
            .field("resolver", &self.resolver)
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}

impl HookRegistry {
    /// Create an empty registry writing to `output_dir`, with no alias
    /// table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the output path exists and
    /// is not a directory.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::build(output_dir.into(), AliasResolver::empty())
    }

    /// Create an empty registry writing to `output_dir`, loading the
    /// alias table from `alias_file`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the output path exists and
    /// is not a directory, or when the alias file cannot be loaded. A
    /// failed construction never leaves a half-initialized registry.
    pub fn with_alias_file(
        output_dir: impl Into<PathBuf>,
        alias_file: impl AsRef<Path>,
    ) -> Result<Self> {
        Self::build(output_dir.into(), AliasResolver::load(alias_file)?)
    }

    fn build(output_dir: PathBuf, resolver: AliasResolver) -> Result<Self> {
        if output_dir.exists() && !output_dir.is_dir() {
            return Err(Error::configuration(format!(
                "output path {} exists and is not a directory",
                output_dir.display()
            )));
        }
        Ok(Self {
            output_dir,
            resolver,
            file_check: Box::new(DiskFileCheck),
            path_rule: Box::new(VendorSegmentRule::default()),
            hooks: HookMap::new(),
        })
    }

    /// Replace the file-existence predicate.
    #[must_use]
    pub fn with_file_check(mut self, check: impl FileCheck + 'static) -> Self {
        self.file_check = Box::new(check);
        self
    }

    /// Replace the output path rule.
    #[must_use]
    pub fn with_path_rule(mut self, rule: impl OutputPathRule + 'static) -> Self {
        self.path_rule = Box::new(rule);
        self
    }

    /// Register `inserted` at `hook_point` of `host`.
    ///
    /// Adding an already-present triple is a no-op. Validation happens
    /// before any mutation, so a failed call leaves the mapping
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the hook point is not
    /// declared in the host's resolved source or the inserted
    /// component's resolved file does not exist; [`Error::Io`] when the
    /// host source cannot be read; resolution errors propagate.
    pub fn add(&mut self, host: &str, hook_point: &str, inserted: &str) -> Result<()> {
        if self.has(host, hook_point, inserted) {
            return Ok(());
        }

        if !self.hook_exists(host, hook_point)? {
            let resolved = self.resolver.resolve(host)?;
            return Err(Error::invalid_argument(format!(
                "hook point '{hook_point}' is not declared in host component '{host}' (resolved to {resolved})"
            )));
        }

        let resolved = self.resolver.resolve(inserted)?;
        if let Some(problem) = self.file_check.check(Path::new(&resolved)) {
            return Err(Error::invalid_argument(format!(
                "inserted component '{inserted}': {problem}"
            )));
        }

        self.hooks
            .entry(host.to_string())
            .or_default()
            .entry(hook_point.to_string())
            .or_default()
            .push(inserted.to_string());
        tracing::debug!("Registered {inserted} at {hook_point} of {host}");
        Ok(())
    }

    /// Whether the exact triple is registered. Absence of the host or
    /// the hook point yields `false`, never an error.
    #[must_use]
    pub fn has(&self, host: &str, hook_point: &str, inserted: &str) -> bool {
        self.hooks
            .get(host)
            .and_then(|points| points.get(hook_point))
            .is_some_and(|sequence| sequence.iter().any(|c| c == inserted))
    }

    /// Remove a registered triple, preserving the relative order of the
    /// remaining entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when the triple is not registered.
    pub fn remove(&mut self, host: &str, hook_point: &str, inserted: &str) -> Result<()> {
        let not_found = || Error::NotFound {
            host: host.to_string(),
            hook_point: hook_point.to_string(),
            component: inserted.to_string(),
        };
        let sequence = self
            .hooks
            .get_mut(host)
            .and_then(|points| points.get_mut(hook_point))
            .ok_or_else(not_found)?;
        let index = sequence
            .iter()
            .position(|c| c == inserted)
            .ok_or_else(not_found)?;
        sequence.remove(index);
        Ok(())
    }

    /// Ordered sequence of components inserted at `hook_point` of
    /// `host`; empty when the pair is not registered.
    #[must_use]
    pub fn get(&self, host: &str, hook_point: &str) -> &[String] {
        self.hooks
            .get(host)
            .and_then(|points| points.get(hook_point))
            .map_or(&[], Vec::as_slice)
    }

    /// Read-only view of the full hook mapping.
    #[must_use]
    pub fn get_all(&self) -> &HookMap {
        &self.hooks
    }

    /// Whether `hook_point` is declared in the resolved source of
    /// `component_path`.
    ///
    /// The check is a textual convention, not a structural parse: the
    /// literal marker `hook_name` followed anywhere later in the file by
    /// the hook point literal. It may false-positive on coincidental
    /// substring matches.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the resolved file cannot be read;
    /// resolution errors propagate.
    pub fn hook_exists(&self, component_path: &str, hook_point: &str) -> Result<bool> {
        let resolved = self.resolver.resolve(component_path)?;
        let content = std::fs::read_to_string(&resolved)
            .map_err(|e| Error::io(e, &resolved, "reading host component"))?;
        let pattern = format!("(?s){HOOK_MARKER}.*{}", regex::escape(hook_point));
        let marker = Regex::new(&pattern).map_err(|e| {
            Error::configuration(format!("invalid hook point name '{hook_point}': {e}"))
        })?;
        Ok(marker.is_match(&content))
    }

    /// Whether the resolved file of `component_path` exists according to
    /// the file-existence predicate.
    ///
    /// # Errors
    ///
    /// Resolution errors propagate; predicate findings are reported as
    /// `Ok(false)`.
    pub fn component_file_exists(&self, component_path: &str) -> Result<bool> {
        let resolved = self.resolver.resolve(component_path)?;
        Ok(self.file_check.check(Path::new(&resolved)).is_none())
    }

    /// Derive the local identifier for a component: resolved basename,
    /// extension stripped, with a fixed suffix appended.
    ///
    /// # Errors
    ///
    /// Resolution errors propagate; a path without a file name is an
    /// [`Error::InvalidArgument`].
    pub fn resolve_component_name(&self, component_path: &str) -> Result<String> {
        let resolved = self.resolver.resolve(component_path)?;
        let stem = Path::new(&resolved)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "component path '{component_path}' has no file name"
                ))
            })?;
        Ok(format!("{stem}{COMPONENT_SUFFIX}"))
    }

    /// Delegate to the alias resolver.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvedAlias`] for an undefined alias token.
    pub fn resolve_alias(&self, logical: &str) -> Result<String> {
        self.resolver.resolve(logical)
    }

    /// Clear the output directory and emit one generated component per
    /// (host, hook point) pair. The in-memory mapping is not mutated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the output directory cannot be emptied
    /// or a file cannot be written. A failure after the clear step
    /// leaves a partially written tree; re-run after fixing the cause,
    /// there is no partial-success contract.
    pub fn dump_all(&self) -> Result<()> {
        if self.output_dir.exists() {
            std::fs::remove_dir_all(&self.output_dir)
                .map_err(|e| Error::io(e, &self.output_dir, "clearing output directory"))?;
        }
        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| Error::io(e, &self.output_dir, "creating output directory"))?;

        for (host, points) in &self.hooks {
            for (hook_point, inserted) in points {
                self.dump_hook(host, hook_point, inserted)?;
            }
        }
        Ok(())
    }

    /// Emit the generated component for one (host, hook point) pair.
    fn dump_hook(&self, host: &str, hook_point: &str, inserted: &[String]) -> Result<()> {
        let physical = self.resolver.resolve(host)?;
        let relative = self.path_rule.relativize(&physical)?;
        // The host's `.vue` file becomes a same-named directory holding
        // one generated component per hook point.
        let host_dir = Path::new(&relative).with_extension("");
        let out_path = self
            .output_dir
            .join(host_dir)
            .join(format!("{hook_point}.{COMPONENT_EXT}"));

        let mut entries = Vec::with_capacity(inserted.len());
        for component in inserted {
            entries.push(ComponentEntry {
                identifier: self.resolve_component_name(component)?,
                import_path: component.clone(),
            });
        }

        let declared = out_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(hook_point);
        let content = emitter::render(declared, &entries);
        emitter::write_file(&out_path, &content)
    }

    /// The configured output directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the alias file the table was loaded from, if any.
    #[must_use]
    pub fn alias_file(&self) -> Option<&Path> {
        self.resolver.alias_file()
    }

    /// The loaded alias table.
    #[must_use]
    pub fn alias_table(&self) -> &BTreeMap<String, String> {
        self.resolver.table()
    }
}
