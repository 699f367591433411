//! Package manifest patching.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

fn manifest_error(path: &Path, reason: impl ToString) -> Error {
    Error::ManifestError {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Sets the `name` field of the JSON manifest at `manifest_path`.
///
/// A missing manifest is not an error: templates may omit it. Other fields
/// and their order are preserved; output uses two-space indentation.
///
/// # Returns
/// * `true` if the manifest was found and rewritten
///
/// # Errors
/// * `Error::ManifestError` if the file is not a JSON object
/// * `Error::IoError` on read/write failures
pub fn patch_name<P: AsRef<Path>>(manifest_path: P, new_name: &str) -> Result<bool> {
    let manifest_path = manifest_path.as_ref();
    if !manifest_path.exists() {
        debug!("No manifest at '{}', skipping", manifest_path.display());
        return Ok(false);
    }

    let content = fs::read_to_string(manifest_path)?;
    let mut manifest: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| manifest_error(manifest_path, e))?;

    let fields = manifest
        .as_object_mut()
        .ok_or_else(|| manifest_error(manifest_path, "top-level value is not an object"))?;
    fields.insert(
        "name".to_string(),
        serde_json::Value::String(new_name.to_string()),
    );

    let mut output =
        serde_json::to_string_pretty(&manifest).map_err(|e| manifest_error(manifest_path, e))?;
    output.push('\n');
    fs::write(manifest_path, output)?;

    debug!("Set name '{}' in '{}'", new_name, manifest_path.display());
    Ok(true)
}
