//! Galley core library — domain types, tracking index store, selection
//! policy.
//!
//! Public API surface:
//! - [`types`] — run configuration, identity, credentials
//! - [`error`] — [`CoreError`]
//! - [`tracking`] — tracking index load / save
//! - [`select`] — per-file conversion policy

pub mod error;
pub mod select;
pub mod tracking;
pub mod types;

pub use error::CoreError;
pub use select::{decide, is_document, output_name, Action};
pub use tracking::TrackingIndex;
pub use types::{GitIdentity, PublishConfig, RemoteCredentials};
