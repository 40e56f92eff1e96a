//! Load team configurations from YAML or JSON files.
//!
//! The format is chosen by file extension. Loading either produces a
//! [`TeamDocument`] or fails with a [`LoadError`]; the engine is never invoked
//! on a document that failed to load.

use std::path::Path;

use serde_json::Value;

use crate::domain::{LoadError, Result, TeamDocument};

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick a format from a path's extension (`.yaml`, `.yml`, `.json`).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(LoadError::UnsupportedFormat { extension }),
        }
    }
}

/// Parse configuration text in the given format.
pub fn parse_document(text: &str, format: DocumentFormat) -> Result<TeamDocument> {
    let value: Value = match format {
        DocumentFormat::Json => serde_json::from_str(text)?,
        DocumentFormat::Yaml => serde_yaml::from_str(text)?,
    };
    TeamDocument::from_value(value)
}

/// Read and parse a configuration file.
pub fn load_document(path: &Path) -> Result<TeamDocument> {
    let format = DocumentFormat::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_document(&text, format)?;
    tracing::debug!(path = %path.display(), format = ?format, "loaded team configuration");
    Ok(document)
}
