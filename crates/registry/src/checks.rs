//! Injectable filesystem collaborators.
//!
//! Two seams the registry depends on but does not own: the external
//! file-existence predicate, and the rule mapping a resolved host path
//! to its output-relative form.

use crate::{Error, Result};
use std::fs::File;
use std::path::Path;

/// External predicate reporting whether a component file is usable.
///
/// Returns a human-readable description of the problem, or `None` when
/// the file is fine. The registry treats any reported description as
/// "file does not exist" for validation purposes.
pub trait FileCheck {
    /// Check the file at `path`, returning an error description or `None`.
    fn check(&self, path: &Path) -> Option<String>;
}

/// Default [`FileCheck`] backed by the local filesystem.
///
/// Reports missing paths, directories where a component file is
/// expected, and files that cannot be opened for reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFileCheck;

impl FileCheck for DiskFileCheck {
    fn check(&self, path: &Path) -> Option<String> {
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) => return Some(format!("cannot access {}: {e}", path.display())),
        };
        if metadata.is_dir() {
            return Some(format!(
                "{} is a directory, expected a component file",
                path.display()
            ));
        }
        match File::open(path) {
            Ok(_) => None,
            Err(e) => Some(format!("cannot read {}: {e}", path.display())),
        }
    }
}

/// Rule mapping a resolved host component path to the path of its
/// generated output, relative to the output directory.
pub trait OutputPathRule {
    /// Compute the output-relative path for a resolved host path.
    ///
    /// # Errors
    ///
    /// Returns an error when the path does not match the rule's layout
    /// convention.
    fn relativize(&self, physical: &str) -> Result<String>;
}

/// Default [`OutputPathRule`]: host components live under a
/// dependency-vendoring directory, and the output-relative path is
/// everything after the first occurrence of the vendor segment.
#[derive(Debug, Clone)]
pub struct VendorSegmentRule {
    segment: String,
}

impl VendorSegmentRule {
    /// Create a rule stripping through the given path segment.
    #[must_use]
    pub fn new(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
        }
    }
}

impl Default for VendorSegmentRule {
    fn default() -> Self {
        Self::new("/vendor/")
    }
}

impl OutputPathRule for VendorSegmentRule {
    fn relativize(&self, physical: &str) -> Result<String> {
        physical
            .find(&self.segment)
            .map(|index| physical[index + self.segment.len()..].to_string())
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "host component path '{physical}' does not contain the '{}' segment",
                    self.segment
                ))
            })
    }
}
