//! Sync committer — stage, commit, push.
//!
//! One commit attempt per call, no retry. The pipeline issues two calls per
//! successful run (destination folder, then tracking index); any failure
//! aborts the run before the next call.

use std::path::Path;

use git2::{
    Commit, Cred, ErrorCode, IndexAddOption, Oid, PushOptions, RemoteCallbacks, Repository,
    Signature,
};

use galley_core::types::{GitIdentity, RemoteCredentials};

use crate::SyncError;

/// Message for the content (destination folder) commit.
pub const CONTENT_MESSAGE: &str = "publish rendered documents";

/// Message for the tracking-index commit.
pub const INDEX_MESSAGE: &str = "update tracking index";

/// Stage every working-tree path matching `pathspec`, commit it under
/// `identity` with the current time, and push the current branch to the
/// `origin` remote with `credentials`. Returns the new commit id.
pub fn publish(
    repo_root: &Path,
    identity: &GitIdentity,
    credentials: &RemoteCredentials,
    pathspec: &str,
    message: &str,
) -> Result<String, SyncError> {
    let repo = Repository::open(repo_root)?;
    let commit_id = commit_paths(&repo, identity, pathspec, message)?;
    push_head(&repo, credentials)?;
    Ok(commit_id.to_string())
}

fn commit_paths(
    repo: &Repository,
    identity: &GitIdentity,
    pathspec: &str,
    message: &str,
) -> Result<Oid, SyncError> {
    let mut index = repo.index()?;
    index.add_all([pathspec], IndexAddOption::DEFAULT, None)?;
    index.write()?;

    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;
    let signature = Signature::now(&identity.name, &identity.email)?;

    // The very first publish commits onto an unborn branch.
    let parent = match repo.head() {
        Ok(head) => Some(head.peel_to_commit()?),
        Err(err) if err.code() == ErrorCode::UnbornBranch || err.code() == ErrorCode::NotFound => {
            None
        }
        Err(err) => return Err(err.into()),
    };
    let parents: Vec<&Commit> = parent.iter().collect();

    let commit_id = repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parents,
    )?;
    Ok(commit_id)
}

fn push_head(repo: &Repository, credentials: &RemoteCredentials) -> Result<(), SyncError> {
    let head = repo.head()?;
    let branch = head.shorthand().unwrap_or("HEAD").to_owned();
    let refspec = format!("refs/heads/{branch}:refs/heads/{branch}");

    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(|_url, _username_from_url, _allowed| {
        Cred::userpass_plaintext(&credentials.username, &credentials.token)
    });
    let mut options = PushOptions::new();
    options.remote_callbacks(callbacks);

    let mut remote = repo.find_remote("origin")?;
    remote.push(&[refspec.as_str()], Some(&mut options))?;
    Ok(())
}
