use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Errors raised while scanning a project for components.
///
/// Only [`DetectError::Config`] escapes [`Detector::detect`](super::Detector::detect);
/// the per-file variants are caught at file granularity.
#[derive(Debug, Error)]
pub enum DetectError {
    /// Caller misconfiguration (missing root, invalid ignore pattern).
    #[error("{0}")]
    Config(String),

    #[error("Failed to read file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}:{line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

impl DetectError {
    pub fn config(message: impl Into<String>) -> Self {
        DetectError::Config(message.into())
    }

    pub fn is_config(&self) -> bool {
        matches!(self, DetectError::Config(_))
    }
}

/// A file whose declarations could not be collected during pass 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    #[serde(rename = "file")]
    pub file_path: String,
    pub error: String,
}

impl ErrorRecord {
    pub fn new(file_path: impl Into<String>, error: &DetectError) -> Self {
        Self {
            file_path: file_path.into(),
            error: error.to_string(),
        }
    }
}
