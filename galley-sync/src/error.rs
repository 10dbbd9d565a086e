//! Error types for galley-sync.

use std::path::PathBuf;

use thiserror::Error;

use galley_core::CoreError;
use galley_render::RenderError;

/// All errors that can arise from a publishing run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error from the git collaborator (diff, stage, commit, or push).
    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    /// An error from the conversion pipeline.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An error from the tracking index store.
    #[error("tracking index error: {0}")]
    Index(#[from] CoreError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The repository has no working tree to stage from.
    #[error("repository at {path} is bare")]
    BareRepository { path: PathBuf },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
