//! Binary-level tests: drive `galley` against fixture repositories with a
//! local bare remote.

use std::path::Path;
use std::process::{Command, Output};

use git2::Repository;
use tempfile::TempDir;

fn galley(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_galley"))
        .args(args)
        .env_remove("GITHUB_USERNAME")
        .env_remove("GITHUB_TOKEN")
        .env_remove("GALLEY_SOURCE_DIR")
        .env_remove("GALLEY_DESTINATION_DIR")
        .env_remove("GALLEY_INDEX_FILE")
        .env_remove("GALLEY_HTML_TEMPLATES")
        .output()
        .expect("run galley binary")
}

fn init_repo_with_remote(worktree: &Path, remote: &Path) {
    let mut opts = git2::RepositoryInitOptions::new();
    opts.initial_head("main");
    Repository::init_opts(worktree, &opts).expect("init worktree repo");
    Repository::init_bare(remote).expect("init bare remote");
    Repository::open(worktree)
        .unwrap()
        .remote("origin", remote.to_str().unwrap())
        .expect("add origin");
}

fn write_post(root: &Path, name: &str, markdown: &str) {
    let posts = root.join("posts");
    std::fs::create_dir_all(&posts).unwrap();
    std::fs::write(posts.join(name), markdown).unwrap();
}

#[test]
fn publish_converts_and_pushes() {
    let worktree = TempDir::new().unwrap();
    let remote = TempDir::new().unwrap();
    init_repo_with_remote(worktree.path(), remote.path());
    write_post(worktree.path(), "new.md", "# Hello\n");
    write_post(worktree.path(), "notes.txt", "scratch\n");

    let source = worktree.path().join("posts");
    let destination = worktree.path().join("html");
    let index = worktree.path().join("_index");
    let output = galley(&[
        "publish",
        "--repo",
        worktree.path().to_str().unwrap(),
        "--source",
        source.to_str().unwrap(),
        "--destination",
        destination.to_str().unwrap(),
        "--index",
        index.to_str().unwrap(),
        "--remote-username",
        "user",
        "--remote-token",
        "token",
    ]);

    assert!(
        output.status.success(),
        "publish failed: stderr={}",
        String::from_utf8_lossy(&output.stderr),
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("1 document(s) published at"));
    assert!(destination.join("new.html").exists());
    assert!(index.exists());

    let pushed = Repository::open_bare(remote.path()).unwrap();
    let head = pushed
        .find_reference("refs/heads/main")
        .unwrap()
        .peel_to_commit()
        .unwrap();
    assert_eq!(head.message(), Some("update tracking index"));
}

#[test]
fn status_lists_decisions_without_converting() {
    let worktree = TempDir::new().unwrap();
    write_post(worktree.path(), "new.md", "# Hello\n");
    write_post(worktree.path(), "notes.txt", "scratch\n");

    let source = worktree.path().join("posts");
    let index = worktree.path().join("_index");
    let output = galley(&[
        "status",
        "--repo",
        worktree.path().to_str().unwrap(),
        "--source",
        source.to_str().unwrap(),
        "--index",
        index.to_str().unwrap(),
    ]);

    assert!(
        output.status.success(),
        "status failed: stderr={}",
        String::from_utf8_lossy(&output.stderr),
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("no publish recorded yet"));
    assert!(stdout.contains("new.md: convert"));
    assert!(stdout.contains("notes.txt: not a document"));
    assert!(stdout.contains("1 document(s) pending conversion"));
    assert!(!worktree.path().join("html").exists());
}

#[test]
fn publish_requires_remote_credentials() {
    let output = galley(&["publish"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--remote-username") || stderr.contains("--remote-token"));
}
