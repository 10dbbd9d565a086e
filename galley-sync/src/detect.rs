//! Change detection against the recorded revision.
//!
//! The diff runs from the recorded revision's tree to the working directory
//! (index included) — the libgit2 form of a revision-to-worktree range.
//! Delta paths arrive as structured values, so filenames containing
//! whitespace or separator bytes survive without any text parsing.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use git2::Repository;

use galley_core::select::is_document;

use crate::SyncError;

/// Basenames of source documents touched since `recorded_revision`.
///
/// An empty `recorded_revision` means no publish has been recorded yet; the
/// result is empty and no repository access happens at all, since first-run
/// semantics belong to the caller. Only deltas that are direct children of
/// `source_dir` count: a touched document elsewhere in the repository must
/// not narrow the run's window, and an equally-named file in another
/// directory cannot alias a source document.
///
/// Any git failure is fatal. There is no retry; a silently wrong change
/// set would corrupt the tracking invariant.
pub fn changed_files(
    repo_root: &Path,
    recorded_revision: &str,
    source_dir: &Path,
) -> Result<BTreeSet<String>, SyncError> {
    if recorded_revision.is_empty() {
        return Ok(BTreeSet::new());
    }

    let repo = Repository::open(repo_root)?;
    let workdir = repo
        .workdir()
        .ok_or_else(|| SyncError::BareRepository {
            path: repo_root.to_path_buf(),
        })?;
    let source_rel = repo_relative(workdir, source_dir);

    let tree = repo.revparse_single(recorded_revision)?.peel_to_tree()?;
    let diff = repo.diff_tree_to_workdir_with_index(Some(&tree), None)?;

    let mut changed = BTreeSet::new();
    for delta in diff.deltas() {
        let Some(path) = delta.new_file().path() else {
            continue;
        };
        if path.parent() != Some(source_rel.as_path()) {
            continue;
        }
        let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
            continue;
        };
        if is_document(&name) {
            changed.insert(name.into_owned());
        }
    }

    Ok(changed)
}

/// Express `target` relative to the repository working directory.
///
/// Relative paths are taken to already be repo-relative; absolute paths are
/// stripped of the (canonicalised) working-directory prefix.
pub(crate) fn repo_relative(workdir: &Path, target: &Path) -> PathBuf {
    if !target.is_absolute() {
        return target.to_path_buf();
    }
    let workdir = workdir.canonicalize().unwrap_or_else(|_| workdir.to_path_buf());
    let target = target.canonicalize().unwrap_or_else(|_| target.to_path_buf());
    target
        .strip_prefix(&workdir)
        .map(Path::to_path_buf)
        .unwrap_or(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_revision_needs_no_repository() {
        // The directory is not a git repository; an empty revision must
        // short-circuit before any repository access.
        let tmp = TempDir::new().unwrap();
        let changed = changed_files(tmp.path(), "", &tmp.path().join("posts")).unwrap();
        assert!(changed.is_empty());
    }

    #[test]
    fn unresolvable_revision_is_fatal() {
        let tmp = TempDir::new().unwrap();
        git2::Repository::init(tmp.path()).unwrap();
        let err = changed_files(
            tmp.path(),
            "0123456789012345678901234567890123456789",
            &tmp.path().join("posts"),
        )
        .unwrap_err();
        assert!(matches!(err, SyncError::Git(_)));
    }

    #[test]
    fn relative_paths_pass_through() {
        assert_eq!(
            repo_relative(Path::new("/repo"), Path::new("posts")),
            PathBuf::from("posts")
        );
    }

    #[test]
    fn absolute_paths_are_stripped() {
        let tmp = TempDir::new().unwrap();
        let posts = tmp.path().join("posts");
        std::fs::create_dir_all(&posts).unwrap();
        assert_eq!(repo_relative(tmp.path(), &posts), PathBuf::from("posts"));
    }
}
