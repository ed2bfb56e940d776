//! Command-line surface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate hook components for bundler consumption.
#[derive(Debug, Parser)]
#[command(name = "hookgen", version, about)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, clap::Args)]
pub struct RegistryOptions {
    /// Path to the JSON hook manifest.
    #[arg(long)]
    pub manifest: PathBuf,

    /// Directory the generated components are written to.
    #[arg(long, default_value = "generated")]
    pub out_dir: PathBuf,

    /// Bundler alias table (JSON object of `@Alias` to path prefix).
    #[arg(long)]
    pub aliases: Option<PathBuf>,

    /// Path segment separating the vendored tree from the
    /// output-relative part of a host component path.
    #[arg(long, default_value = "/vendor/")]
    pub vendor_segment: String,
}

/// hookgen subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate the hook manifest and emit the generated components.
    Generate {
        /// Registry options.
        #[command(flatten)]
        options: RegistryOptions,
    },
    /// Validate the hook manifest and print the resulting mapping
    /// without emitting anything.
    List {
        /// Registry options.
        #[command(flatten)]
        options: RegistryOptions,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generate() {
        let cli = Cli::try_parse_from([
            "hookgen",
            "generate",
            "--manifest",
            "hooks.json",
            "--out-dir",
            "out",
            "--aliases",
            "aliases.json",
        ])
        .unwrap();
        match cli.command {
            Command::Generate { options } => {
                assert_eq!(options.manifest, PathBuf::from("hooks.json"));
                assert_eq!(options.out_dir, PathBuf::from("out"));
                assert_eq!(options.aliases, Some(PathBuf::from("aliases.json")));
                assert_eq!(options.vendor_segment, "/vendor/");
            }
            Command::List { .. } => panic!("expected generate"),
        }
    }

    #[test]
    fn parses_list_with_defaults() {
        let cli = Cli::try_parse_from(["hookgen", "list", "--manifest", "hooks.json"]).unwrap();
        match cli.command {
            Command::List { options } => {
                assert_eq!(options.out_dir, PathBuf::from("generated"));
                assert!(options.aliases.is_none());
            }
            Command::Generate { .. } => panic!("expected list"),
        }
    }

    #[test]
    fn manifest_is_required() {
        assert!(Cli::try_parse_from(["hookgen", "generate"]).is_err());
    }
}
