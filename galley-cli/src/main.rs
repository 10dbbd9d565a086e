//! Galley — incremental markdown publishing CLI.
//!
//! # Usage
//!
//! ```text
//! galley publish [--source <dir>] [--destination <dir>] [--index <file>]
//!                [--template <file>]... [--repo <dir>]
//!                [--git-user-name <name>] [--git-user-email <email>]
//!                --remote-username <user> --remote-token <token>
//!                [--dry-run]
//! galley status  [--source <dir>] [--index <file>] [--repo <dir>]
//! ```
//!
//! Every flag also binds an environment variable (`GALLEY_SOURCE_DIR`,
//! `GITHUB_TOKEN`, …) so the tool drops into scheduled jobs without a
//! wrapper script.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{publish::PublishArgs, status::StatusArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "galley",
    version,
    about = "Convert a folder of markdown documents and publish the output to a git remote",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert documents that changed since the last publish and push the
    /// rendered output.
    Publish(PublishArgs),

    /// Show what a publish run would do, without converting or pushing.
    Status(StatusArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Publish(args) => args.run(),
        Commands::Status(args) => args.run(),
    }
}
