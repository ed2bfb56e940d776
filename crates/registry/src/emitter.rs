//! Rendering and writing of generated hook component files.
//!
//! The output format is a fixed textual template: a `<template>` region
//! whose root `<div>` wraps one usage tag per inserted component, a
//! `<script>` region with a generated-file banner, ordered imports and a
//! default export registering the components, and an empty `<style>`
//! region. Downstream tooling depends on this exact shape, and identical
//! input must always render byte-identical output.

use crate::{Error, Result};
use std::path::Path;

/// Indentation unit reused at every nesting depth.
const INDENT: &str = "  ";

/// Banner marking emitted files as generated.
const BANNER: &str = "// This file is generated by hookgen. Do not edit by hand.";

/// One inserted component of a generated hook file.
#[derive(Debug, Clone)]
pub(crate) struct ComponentEntry {
    /// Local identifier used for the tag, import, and registration.
    pub identifier: String,
    /// Unresolved alias-form path, imported as-is so the downstream
    /// bundler performs its own alias resolution.
    pub import_path: String,
}

/// Render the generated hook component for `name` with the given
/// entries, in sequence order.
pub(crate) fn render(name: &str, entries: &[ComponentEntry]) -> String {
    let mut out = String::new();

    out.push_str("<template>\n");
    out.push_str(INDENT);
    out.push_str("<div>\n");
    for entry in entries {
        out.push_str(INDENT);
        out.push_str(INDENT);
        out.push('<');
        out.push_str(&entry.identifier);
        out.push_str("/>\n");
    }
    out.push_str(INDENT);
    out.push_str("</div>\n");
    out.push_str("</template>\n");
    out.push('\n');

    out.push_str("<script>\n");
    out.push_str(BANNER);
    out.push('\n');
    for entry in entries {
        out.push_str("import ");
        out.push_str(&entry.identifier);
        out.push_str(" from '");
        out.push_str(&entry.import_path);
        out.push_str("';\n");
    }
    out.push('\n');
    out.push_str("export default {\n");
    out.push_str(INDENT);
    out.push_str("name: '");
    out.push_str(name);
    out.push_str("',\n");
    out.push_str(INDENT);
    out.push_str("components: {\n");
    for entry in entries {
        out.push_str(INDENT);
        out.push_str(INDENT);
        out.push_str(&entry.identifier);
        out.push_str(",\n");
    }
    out.push_str(INDENT);
    out.push_str("},\n");
    out.push_str("};\n");
    out.push_str("</script>\n");
    out.push('\n');

    out.push_str("<style>\n");
    out.push_str("</style>\n");

    out
}

/// Write a rendered component to disk, creating intermediate directories
/// and overwriting any existing content.
pub(crate) fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::io(e, parent, "creating output subdirectory"))?;
    }
    std::fs::write(path, content).map_err(|e| Error::io(e, path, "writing generated file"))?;
    tracing::info!("Generated: {}", path.display());
    Ok(())
}
