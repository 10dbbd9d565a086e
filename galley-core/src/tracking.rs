//! Tracking index — persisted record of converted files and the last
//! published revision.
//!
//! On-disk form is a two-field JSON document:
//!
//! ```json
//! {"files": ["first-post.md"], "revision": "4f0c…"}
//! ```
//!
//! A missing file loads as the default record. A malformed file also loads
//! as the default record, but with a warning, so index corruption stays
//! observable to operators without aborting the run.

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{io_err, CoreError};

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// Which source files have been converted, and at which repository revision
/// the output was last published.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingIndex {
    /// Every filename whose conversion has succeeded. Accumulates across
    /// runs; never pruned, never re-validated against the destination
    /// folder. Reconverting a file does not duplicate its entry.
    #[serde(default)]
    pub files: BTreeSet<String>,

    /// Commit id of the last successful content publish. Empty before the
    /// first one.
    #[serde(default)]
    pub revision: String,
}

impl TrackingIndex {
    /// True if `filename` has been converted in some previous run.
    pub fn is_tracked(&self, filename: &str) -> bool {
        self.files.contains(filename)
    }

    /// Record a successful conversion of `filename`.
    pub fn track(&mut self, filename: &str) {
        self.files.insert(filename.to_owned());
    }
}

// ---------------------------------------------------------------------------
// Load / save
// ---------------------------------------------------------------------------

/// Load the tracking index at `path`.
///
/// Missing file → default record. Malformed file → default record plus a
/// warning; the run proceeds as if nothing had ever been published.
pub fn load(path: &Path) -> Result<TrackingIndex, CoreError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(TrackingIndex::default()),
        Err(err) => return Err(io_err(path, err)),
    };
    match serde_json::from_str(&contents) {
        Ok(index) => Ok(index),
        Err(err) => {
            log::warn!(
                "malformed tracking index at {}: {err}; resetting to an empty record",
                path.display()
            );
            Ok(TrackingIndex::default())
        }
    }
}

/// Save the tracking index to `path` atomically.
///
/// Creates the parent directory first if it does not exist, so a subsequent
/// stage of the index file succeeds even on a project's very first run.
/// Write flow: serialize → `.tmp` sibling → rename.
pub fn save(path: &Path, index: &TrackingIndex) -> Result<(), CoreError> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
        }
    }

    let Some(name) = path.file_name() else {
        return Err(io_err(
            path,
            std::io::Error::other("invalid tracking index path"),
        ));
    };
    let tmp = path.with_file_name(format!("{}.tmp", name.to_string_lossy()));

    let json = serde_json::to_string_pretty(index)?;
    std::fs::write(&tmp, &json).map_err(|e| io_err(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| io_err(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_record_when_file_missing() {
        let tmp = TempDir::new().unwrap();
        let index = load(&tmp.path().join("_index")).unwrap();
        assert!(index.files.is_empty());
        assert!(index.revision.is_empty());
    }

    #[test]
    fn roundtrip_save_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("_index");

        let mut index = TrackingIndex::default();
        index.track("first-post.md");
        index.track("second-post.markdown");
        index.revision = "4f0cdeadbeef".to_string();

        save(&path, &index).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded, index);
    }

    #[test]
    fn tracking_twice_does_not_duplicate() {
        let mut index = TrackingIndex::default();
        index.track("post.md");
        index.track("post.md");
        assert_eq!(index.files.len(), 1);
    }

    #[test]
    fn malformed_index_resets_to_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("_index");
        std::fs::write(&path, "{not json at all").unwrap();

        let index = load(&path).unwrap();
        assert_eq!(index, TrackingIndex::default());
    }

    #[test]
    fn partial_document_still_loads() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("_index");
        std::fs::write(&path, r#"{"files": ["a.md"]}"#).unwrap();

        let index = load(&path).unwrap();
        assert!(index.is_tracked("a.md"));
        assert!(index.revision.is_empty());
    }

    #[test]
    fn save_creates_parent_directory() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("state").join("nested").join("_index");

        save(&path, &TrackingIndex::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn tmp_file_cleaned_up_after_save() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("_index");
        save(&path, &TrackingIndex::default()).unwrap();
        assert!(!path.with_file_name("_index.tmp").exists());
    }
}
