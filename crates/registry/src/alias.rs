//! Alias table loading and logical path resolution.
//!
//! The downstream bundler maps symbolic path prefixes such as `@App` to
//! physical directories through a JSON alias table. This module consumes
//! that table to resolve logical component paths for filesystem
//! validation; generated import statements keep the unresolved alias form
//! so the bundler performs its own resolution later.

use crate::{Error, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Pattern extracting the alias token of a logical path: `@<token>` up to
/// the first `/`. Only the first alias-looking token is recognized.
const ALIAS_PATTERN: &str = "(@[^/]+)/";

/// Resolves alias-prefixed logical paths to physical paths.
///
/// The alias table is loaded once at construction and is immutable for
/// the lifetime of the resolver. Resolution is purely textual: at most
/// one substitution per call, and the remainder of the logical path is
/// kept intact.
#[derive(Debug, Clone, Default)]
pub struct AliasResolver {
    alias_file: Option<PathBuf>,
    table: BTreeMap<String, String>,
}

impl AliasResolver {
    /// Create a resolver with no alias table. Every logical path resolves
    /// to itself.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the alias table from a JSON file.
    ///
    /// The file must contain a top-level JSON object whose keys are alias
    /// tokens (`@Name`, leading `@` included) and whose values are
    /// non-empty physical path prefixes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the file cannot be read, is
    /// not valid JSON, or violates the table invariants. The underlying
    /// parse error is carried in the message.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!("cannot read alias file {}: {e}", path.display()))
        })?;
        let value: serde_json::Value = serde_json::from_str(&raw).map_err(|e| {
            Error::configuration(format!("alias file {} is not valid JSON: {e}", path.display()))
        })?;
        let serde_json::Value::Object(object) = value else {
            return Err(Error::configuration(format!(
                "alias file {} must contain a top-level JSON object",
                path.display()
            )));
        };

        let mut table = BTreeMap::new();
        for (token, mapped) in object {
            let serde_json::Value::String(prefix) = mapped else {
                return Err(Error::configuration(format!(
                    "alias '{token}' in {} must map to a string path prefix",
                    path.display()
                )));
            };
            if !token.starts_with('@') {
                return Err(Error::configuration(format!(
                    "alias '{token}' in {} must start with '@'",
                    path.display()
                )));
            }
            if prefix.is_empty() {
                return Err(Error::configuration(format!(
                    "alias '{token}' in {} maps to an empty path prefix",
                    path.display()
                )));
            }
            table.insert(token, prefix);
        }

        Ok(Self {
            alias_file: Some(path.to_path_buf()),
            table,
        })
    }

    /// Resolve a logical path to its physical equivalent.
    ///
    /// When the table is empty or the path carries no alias marker, the
    /// path is returned unchanged. Otherwise the first `@token/` prefix
    /// is looked up and substituted once, leaving the rest of the path
    /// (including the filename) intact.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvedAlias`] when the extracted token is not
    /// defined in the alias table.
    pub fn resolve(&self, logical: &str) -> Result<String> {
        if self.table.is_empty() || !logical.contains('@') {
            return Ok(logical.to_string());
        }

        let pattern = Regex::new(ALIAS_PATTERN).map_err(|e| {
            Error::configuration(format!("invalid alias pattern '{ALIAS_PATTERN}': {e}"))
        })?;
        let Some(capture) = pattern.captures(logical) else {
            return Ok(logical.to_string());
        };

        let token = &capture[1];
        match self.table.get(token) {
            Some(prefix) => Ok(logical.replacen(token, prefix, 1)),
            None => Err(Error::UnresolvedAlias {
                alias: token.to_string(),
                alias_file: self.alias_file.clone().unwrap_or_default(),
            }),
        }
    }

    /// The loaded alias table.
    #[must_use]
    pub fn table(&self) -> &BTreeMap<String, String> {
        &self.table
    }

    /// Path of the alias file this table was loaded from, if any.
    #[must_use]
    pub fn alias_file(&self) -> Option<&Path> {
        self.alias_file.as_deref()
    }
}
