//! Reading and rewriting the project manifest (package.json).
//! Only the `name` field is touched; everything else passes through
//! unchanged, with field order preserved by serde_json's ordered maps.

use log::debug;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Sets the manifest's `name` field to `project_name` and rewrites the
/// file pretty-printed with two-space indentation.
///
/// An existing `name` keeps its position in the document; a manifest
/// without one gains the field at the end.
///
/// # Errors
/// Propagates IO errors from reading or writing the file and parse
/// errors when the manifest is not a JSON object.
pub fn patch_manifest_name<P: AsRef<Path>>(
    manifest_path: P,
    project_name: &str,
) -> Result<()> {
    let manifest_path = manifest_path.as_ref();
    debug!("Patching manifest name in {}", manifest_path.display());

    let content = fs::read_to_string(manifest_path)?;
    let mut manifest: Map<String, Value> = serde_json::from_str(&content)?;
    manifest.insert("name".to_string(), Value::String(project_name.to_string()));

    let rendered = serde_json::to_string_pretty(&Value::Object(manifest))?;
    fs::write(manifest_path, rendered)?;
    Ok(())
}
