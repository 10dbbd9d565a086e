//! # galley-sync
//!
//! Change detection and two-stage publishing over git, plus the run
//! pipeline that owns the tracking index.
//!
//! Call [`pipeline::run`] to execute one publishing run end to end.

pub mod detect;
pub mod error;
pub mod pipeline;
pub mod publish;

pub use error::SyncError;
pub use pipeline::{run, FileOutcome, RunReport};
