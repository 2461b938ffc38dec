//! Hugging Face Hub snapshot fetching
//!
//! This module contains the collaborator side of the tool: the request
//! types handed over by the CLI, the [`SnapshotFetcher`] seam, and the
//! Hub-backed implementation that writes files to disk.

pub mod client;
pub mod materialize;
pub mod request;

pub use client::{HubSnapshotFetcher, SnapshotFetcher};
pub use materialize::{materialize, safe_relative_path};
pub use request::{SnapshotOutcome, SnapshotRequest};
