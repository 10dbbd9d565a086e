//! Error types for galley-render.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from document conversion.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error (load or evaluation).
    #[error("template engine error: {0}")]
    Template(#[from] tera::Error),

    /// Filesystem error while reading a document or writing output.
    #[error("render I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`RenderError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io {
        path: path.into(),
        source,
    }
}
