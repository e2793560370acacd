//! Error types for the embedding pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, StockvizError>;

/// Errors that can occur while loading, validating or projecting embeddings
#[derive(Debug, Error)]
pub enum StockvizError {
    /// Input file does not exist
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Any other failure reading the input file
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A vector component failed to parse as a finite number
    #[error("line {line}: {reason} (token '{token}')")]
    Parse {
        line: usize,
        token: String,
        reason: String,
    },

    /// Records have inconsistent vector lengths
    #[error("line {line}: expected {expected} vector components, found {found}")]
    DimensionMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Too few records to estimate three components
    #[error("need at least {required} records for a 3-component projection, got {found}")]
    InsufficientData { found: usize, required: usize },

    /// Vectors have fewer dimensions than requested components
    #[error("need vectors of at least {required} dimensions, got {found}")]
    InsufficientDimensions { found: usize, required: usize },

    /// Decomposition produced values that are not finite
    #[error("numeric error: {0}")]
    Numeric(String),
}

impl StockvizError {
    /// Build the appropriate error for a failed read of `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            StockvizError::FileNotFound { path }
        } else {
            StockvizError::Io { path, source }
        }
    }
}
