use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::info;

use crate::config;
use crate::error::ExportError;

/// Reads the build artifact for `name` under `root` and writes its `abi`
/// field to the ABI output path, overwriting any previous export. Returns
/// the path written.
///
/// The ABI value is copied out as-is: no shape validation, unknown keys
/// preserved. An artifact without a top-level `abi` key is an error rather
/// than a `null` export.
pub fn export_abi<P: AsRef<Path>>(root: P, name: &str) -> Result<PathBuf, ExportError> {
    let artifact_path = root.as_ref().join(config::artifact_path(name));
    // Read raw bytes: a non-UTF-8 source is a parse failure, not a read failure.
    let bytes = fs::read(&artifact_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ExportError::not_found(name, &artifact_path),
        _ => ExportError::read(name, &artifact_path, e),
    })?;
    let artifact: Value =
        serde_json::from_slice(&bytes).map_err(|e| ExportError::parse(name, &artifact_path, e))?;
    let abi = artifact
        .get("abi")
        .ok_or_else(|| ExportError::missing_abi(name, &artifact_path))?;

    let abi_path = root.as_ref().join(config::abi_path(name));
    let mut body = serde_json::to_string_pretty(abi)
        .map_err(|e| ExportError::write(name, &abi_path, io::Error::other(e)))?;
    body.push('\n');
    fs::write(&abi_path, body).map_err(|e| ExportError::write(name, &abi_path, e))?;
    Ok(abi_path)
}

/// Exports the ABI of every core contract in order, stopping at the first
/// failure. ABI files already written by earlier steps are left in place.
pub fn export_all<P: AsRef<Path>>(root: P) -> Result<(), ExportError> {
    for name in config::CORE_CONTRACTS {
        let written = export_abi(root.as_ref(), name)?;
        info!("exported {} ABI to {}", name, written.display());
    }
    Ok(())
}
