//! Hook manifest loading.
//!
//! The manifest is a JSON array of hook records, one per (host, hook
//! point, component) triple, in the order they should be rendered.

use miette::{IntoDiagnostic, WrapErr};
use serde::Deserialize;
use std::path::Path;

/// One hook record from the manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HookEntry {
    /// Logical path of the host component, possibly alias-prefixed.
    pub host: String,
    /// Name of the hook point declared in the host.
    pub hook_point: String,
    /// Logical path of the component to insert.
    pub component: String,
}

/// Load the hook manifest from `path`.
pub fn load(path: &Path) -> miette::Result<Vec<HookEntry>> {
    let raw = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot read hook manifest {}", path.display()))?;
    serde_json::from_str(&raw)
        .into_diagnostic()
        .wrap_err_with(|| format!("hook manifest {} is not a valid hook list", path.display()))
}
