//! `galley status` — per-file decisions for the next publish run.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use galley_core::{select, tracking, Action};
use galley_sync::detect;

/// Arguments for `galley status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Source folder containing markdown documents.
    #[arg(long, env = "GALLEY_SOURCE_DIR", default_value = "posts")]
    pub source: PathBuf,

    /// Tracking index file.
    #[arg(long, env = "GALLEY_INDEX_FILE", default_value = "_index")]
    pub index: PathBuf,

    /// Repository working tree to diff in.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,
}

impl StatusArgs {
    pub fn run(self) -> Result<()> {
        let index = tracking::load(&self.index).context("failed to load tracking index")?;
        let change_set = detect::changed_files(&self.repo, &index.revision, &self.source)
            .context("failed to diff against the recorded revision")?;

        if index.revision.is_empty() {
            println!("no publish recorded yet; every document is a candidate");
        } else {
            println!("last published revision: {}", index.revision);
        }

        let mut entries: Vec<String> = std::fs::read_dir(&self.source)
            .with_context(|| format!("failed to read source folder {}", self.source.display()))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        entries.sort();

        let mut pending = 0usize;
        for filename in &entries {
            let action = select::decide(filename, &change_set, &index.files);
            let label = match action {
                Action::Convert => {
                    pending += 1;
                    "convert"
                }
                Action::SkipUnchanged => "unchanged",
                Action::SkipOutOfWindow => "out of window",
                Action::SkipNotDocument => "not a document",
            };
            println!("  {filename}: {label}");
        }
        println!("{pending} document(s) pending conversion");
        Ok(())
    }
}
