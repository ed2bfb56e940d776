//! hookgen CLI entrypoint.
//!
//! Thin build glue over `hookgen-registry`: loads a JSON hook manifest,
//! validates every record against the filesystem, and either emits the
//! generated hook components or prints the resulting mapping.

// CLI binary needs to output to stdout - this is intentional
#![allow(clippy::print_stdout)]

mod cli;
mod manifest;

use clap::Parser;
use cli::{Cli, Command, RegistryOptions};
use hookgen_registry::{HookRegistry, VendorSegmentRule};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate { options } => {
            let registry = build_registry(&options)?;
            registry.dump_all()?;
        }
        Command::List { options } => {
            let registry = build_registry(&options)?;
            for (host, points) in registry.get_all() {
                println!("{host}");
                for (hook_point, components) in points {
                    println!("  {hook_point}");
                    for component in components {
                        println!("    {component}");
                    }
                }
            }
        }
    }
    Ok(())
}

/// Construct a registry from the CLI options and populate it from the
/// manifest, validating every record.
fn build_registry(options: &RegistryOptions) -> miette::Result<HookRegistry> {
    let entries = manifest::load(&options.manifest)?;
    let mut registry = match &options.aliases {
        Some(alias_file) => HookRegistry::with_alias_file(&options.out_dir, alias_file)?,
        None => HookRegistry::new(&options.out_dir)?,
    }
    .with_path_rule(VendorSegmentRule::new(options.vendor_segment.as_str()));

    for entry in &entries {
        registry.add(&entry.host, &entry.hook_point, &entry.component)?;
    }
    Ok(registry)
}
