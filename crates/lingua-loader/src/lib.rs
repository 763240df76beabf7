//! # lingua-loader
//!
//! Turns a catalog file on disk into an in-memory [`Catalog`]. The
//! resolution engine itself never touches the filesystem; this crate is the
//! external collaborator that owns parsing and the fail-fast shape check.
//!
//! Supported formats, dispatched on the file extension: JSON (`.json`) and
//! TOML (`.toml`).

use std::path::Path;

use thiserror::Error;
use tracing::info;

use lingua_core::{Catalog, LinguaError};

#[cfg(test)]
mod tests;

/// Errors from loading a catalog file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The catalog file does not exist.
    #[error("catalog file not found: {0}")]
    FileNotFound(String),

    /// The file extension is not a supported catalog format.
    #[error("unsupported catalog format: {0} (expected .json or .toml)")]
    UnsupportedFormat(String),

    /// The file was not valid JSON.
    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// The file was not valid TOML.
    #[error("invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// The parsed document did not have the locale → mapping shape.
    #[error(transparent)]
    Shape(#[from] LinguaError),

    /// The file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load a catalog from `path`, dispatching on the file extension.
pub fn load(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let catalog = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => from_json_str(&content)?,
        Some("toml") => from_toml_str(&content)?,
        _ => return Err(LoadError::UnsupportedFormat(path.display().to_string())),
    };

    info!(
        "loaded catalog from {} ({} locales)",
        path.display(),
        catalog.len()
    );
    Ok(catalog)
}

/// Parse a catalog from a JSON document.
pub fn from_json_str(content: &str) -> Result<Catalog, LoadError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    Ok(Catalog::from_value(value)?)
}

/// Parse a catalog from a TOML document. Locales are top-level tables.
pub fn from_toml_str(content: &str) -> Result<Catalog, LoadError> {
    let value: toml::Value = toml::from_str(content)?;
    let value = serde_json::to_value(value)?;
    Ok(Catalog::from_value(value)?)
}
