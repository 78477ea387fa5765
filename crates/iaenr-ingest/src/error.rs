//! Error types for CSV ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a source file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file does not exist.
    #[error("source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file metadata or contents.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is smaller than any real enrollment table.
    #[error("source file {path} is {size} bytes, below the {min_size} byte minimum")]
    TooSmall {
        path: PathBuf,
        size: u64,
        min_size: u64,
    },

    /// Malformed CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

impl IngestError {
    /// True when the failure means the file could not be retrieved at all,
    /// as opposed to retrieved but unusable.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::FileNotFound { .. } | Self::FileRead { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/district_2024.csv"),
        };
        assert_eq!(err.to_string(), "source file not found: /data/district_2024.csv");
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_too_small_is_not_unavailable() {
        let err = IngestError::TooSmall {
            path: PathBuf::from("x.csv"),
            size: 3,
            min_size: 64,
        };
        assert!(!err.is_unavailable());
        assert!(err.to_string().contains("3 bytes"));
    }
}
