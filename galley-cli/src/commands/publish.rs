//! `galley publish` — run the conversion + two-stage publish pipeline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use galley_core::types::{GitIdentity, PublishConfig, RemoteCredentials};
use galley_core::Action;
use galley_sync::{pipeline, RunReport};

/// Arguments for `galley publish`.
#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Source folder containing markdown documents.
    #[arg(long, env = "GALLEY_SOURCE_DIR", default_value = "posts")]
    pub source: PathBuf,

    /// Destination folder for rendered HTML.
    #[arg(long, env = "GALLEY_DESTINATION_DIR", default_value = "html")]
    pub destination: PathBuf,

    /// Tracking index file.
    #[arg(long, env = "GALLEY_INDEX_FILE", default_value = "_index")]
    pub index: PathBuf,

    /// Page template applied around rendered documents. Repeatable; the
    /// first one is the entry template.
    #[arg(long = "template", env = "GALLEY_HTML_TEMPLATES", value_delimiter = ',')]
    pub templates: Vec<PathBuf>,

    /// Repository working tree to stage, commit, and push in.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Author name for publish commits.
    #[arg(long, env = "GALLEY_GIT_USER_NAME", default_value = "galley")]
    pub git_user_name: String,

    /// Author email for publish commits.
    #[arg(long, env = "GALLEY_GIT_USER_EMAIL", default_value = "galley")]
    pub git_user_email: String,

    /// Username for pushing to the remote.
    #[arg(long, env = "GITHUB_USERNAME")]
    pub remote_username: String,

    /// Token for pushing to the remote.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub remote_token: String,

    /// Report decisions without converting, committing, or pushing.
    #[arg(long)]
    pub dry_run: bool,
}

impl PublishArgs {
    pub fn run(self) -> Result<()> {
        let dry_run = self.dry_run;
        let config = self.into_config();
        let report = pipeline::run(&config, dry_run).context("publish run failed")?;
        print_report(&report, dry_run);
        Ok(())
    }

    fn into_config(self) -> PublishConfig {
        PublishConfig {
            repo_root: self.repo,
            source_dir: self.source,
            destination_dir: self.destination,
            index_path: self.index,
            templates: self.templates,
            identity: GitIdentity {
                name: self.git_user_name,
                email: self.git_user_email,
            },
            credentials: RemoteCredentials {
                username: self.remote_username,
                token: self.remote_token,
            },
        }
    }
}

fn print_report(report: &RunReport, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let converted = report.converted().count();

    if converted == 0 {
        println!("{prefix}✓ nothing to publish");
        return;
    }

    match &report.revision {
        Some(revision) => {
            println!("{prefix}✓ {converted} document(s) published at {revision}");
        }
        None => println!("{prefix}✓ {converted} document(s) selected"),
    }
    for outcome in &report.outcomes {
        let mark = match outcome.action {
            Action::Convert => "✎",
            _ => "·",
        };
        println!("  {mark}  {}", outcome.filename);
    }
}
