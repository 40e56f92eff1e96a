//! Load-time error taxonomy.
//!
//! Load failures abort before validation and are never reported as issues.

use std::path::PathBuf;

/// Errors produced while turning a file into a [`TeamDocument`](super::TeamDocument).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported config format: {extension:?} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { extension: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("configuration root must be a mapping, found {found}")]
    NotAMapping { found: &'static str },
}

/// Result type for document loading.
pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_display() {
        let err = LoadError::UnsupportedFormat {
            extension: "toml".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("unsupported config format"));
        assert!(msg.contains("toml"));
    }

    #[test]
    fn test_not_a_mapping_display() {
        let err = LoadError::NotAMapping { found: "sequence" };
        assert!(err.to_string().contains("must be a mapping"));
        assert!(err.to_string().contains("sequence"));
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LoadError = json_err.into();
        assert!(err.to_string().starts_with("invalid JSON"));
    }
}
