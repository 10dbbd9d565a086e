//! Publishing run pipeline.
//!
//! Owns the tracking index for the duration of a run:
//! load index → diff against the recorded revision → enumerate the source
//! folder in name order → decide per entry → convert → publish the
//! destination folder → persist the index with the new revision → publish
//! the index. The two publish calls are independent commits; a failure
//! between them is healed by the next run's wider change window.

use std::path::Path;

use galley_core::{select, tracking, Action, PublishConfig};
use galley_render::Converter;

use crate::error::io_err;
use crate::{detect, publish, SyncError};

// ---------------------------------------------------------------------------
// Run report
// ---------------------------------------------------------------------------

/// Decision recorded for one source entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub filename: String,
    pub action: Action,
}

/// Summary of one publishing run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Per-entry decisions, in source-folder name order.
    pub outcomes: Vec<FileOutcome>,
    /// Commit id of the content publish; `None` when nothing was converted
    /// or on a dry run.
    pub revision: Option<String>,
}

impl RunReport {
    /// Entries the policy routed to conversion.
    pub fn converted(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.action == Action::Convert)
    }
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// Execute one publishing run.
///
/// With `dry_run`, decisions are reported but nothing is converted,
/// committed, pushed, or persisted.
pub fn run(config: &PublishConfig, dry_run: bool) -> Result<RunReport, SyncError> {
    let mut index = tracking::load(&config.index_path)?;
    let change_set =
        detect::changed_files(&config.repo_root, &index.revision, &config.source_dir)?;
    if index.revision.is_empty() {
        tracing::info!("no recorded revision; all documents are candidates");
    } else {
        tracing::info!(
            "{} document(s) changed since {}",
            change_set.len(),
            index.revision
        );
    }

    let converter = Converter::new(&config.templates)?;

    let mut report = RunReport::default();
    let mut converted_any = false;
    for filename in source_entries(&config.source_dir)? {
        let action = select::decide(&filename, &change_set, &index.files);
        match action {
            Action::SkipOutOfWindow => {
                tracing::info!("skip {filename}: outside the change window");
            }
            Action::SkipUnchanged => {
                tracing::info!("skip {filename}: already published and unchanged");
            }
            Action::SkipNotDocument => {
                tracing::info!("skip {filename}: not a document");
            }
            Action::Convert if dry_run => {
                tracing::info!("[dry-run] would convert {filename}");
            }
            Action::Convert => {
                tracing::info!("converting {filename}");
                converter.convert(&filename, &config.source_dir, &config.destination_dir)?;
                index.track(&filename);
                converted_any = true;
            }
        }
        report.outcomes.push(FileOutcome { filename, action });
    }

    if dry_run {
        return Ok(report);
    }
    if !converted_any {
        tracing::info!("nothing to publish");
        return Ok(report);
    }

    let revision = publish::publish(
        &config.repo_root,
        &config.identity,
        &config.credentials,
        &pathspec(&config.repo_root, &config.destination_dir),
        publish::CONTENT_MESSAGE,
    )?;
    tracing::info!("published rendered documents at {revision}");

    index.revision = revision.clone();
    tracking::save(&config.index_path, &index)?;

    publish::publish(
        &config.repo_root,
        &config.identity,
        &config.credentials,
        &pathspec(&config.repo_root, &config.index_path),
        publish::INDEX_MESSAGE,
    )?;
    tracing::info!("published tracking index");

    report.revision = Some(revision);
    Ok(report)
}

/// Names of regular files in `source_dir`, sorted.
fn source_entries(source_dir: &Path) -> Result<Vec<String>, SyncError> {
    let entries = std::fs::read_dir(source_dir).map_err(|e| io_err(source_dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| io_err(source_dir, e))?;
        let file_type = entry.file_type().map_err(|e| io_err(entry.path(), e))?;
        if file_type.is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Repo-relative pathspec for staging `target`.
fn pathspec(repo_root: &Path, target: &Path) -> String {
    detect::repo_relative(repo_root, target)
        .to_string_lossy()
        .into_owned()
}
