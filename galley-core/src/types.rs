//! Domain types for a publishing run.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem
//! paths.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Identity and credentials
// ---------------------------------------------------------------------------

/// Git author identity stamped on publish commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitIdentity {
    pub name: String,
    pub email: String,
}

/// Username/token pair used to authenticate pushes to the remote.
///
/// Carried as plain fields and passed by argument into the committer; never
/// stored in process-global state.
#[derive(Clone)]
pub struct RemoteCredentials {
    pub username: String,
    pub token: String,
}

impl fmt::Debug for RemoteCredentials {
    // The token never appears in debug or log output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteCredentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Fully validated inputs for one publishing run.
///
/// Paths may be relative; they are resolved against the process working
/// directory, and `repo_root` anchors all repository-relative pathspecs.
#[derive(Debug, Clone)]
pub struct PublishConfig {
    /// Working tree of the repository to stage, commit, and push in.
    pub repo_root: PathBuf,
    /// Folder enumerated (non-recursively) for source documents.
    pub source_dir: PathBuf,
    /// Folder rendered HTML is written to.
    pub destination_dir: PathBuf,
    /// Tracking index file.
    pub index_path: PathBuf,
    /// Optional page templates; the first one is the entry template.
    pub templates: Vec<PathBuf>,
    pub identity: GitIdentity,
    pub credentials: RemoteCredentials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_debug_redacts_token() {
        let creds = RemoteCredentials {
            username: "octocat".to_string(),
            token: "ghp_supersecret".to_string(),
        };
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("octocat"));
        assert!(!rendered.contains("ghp_supersecret"));
        assert!(rendered.contains("<redacted>"));
    }
}
