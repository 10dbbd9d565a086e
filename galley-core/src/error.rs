//! Error types for galley-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from tracking-index operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error (tracking index write path).
    #[error("tracking index JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience constructor for [`CoreError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> CoreError {
    CoreError::Io {
        path: path.into(),
        source,
    }
}
