//! hf_assets Library
//!
//! Downloads a snapshot of a Hugging Face Hub repository into a local
//! directory, authenticating with a token from the command line or the
//! `HF_TOKEN` environment variable.

pub mod auth;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod hub;

// Re-export commonly used types for convenience
pub use errors::{AppError, ConfigError, FetchError, Result};
pub use hub::{HubSnapshotFetcher, SnapshotFetcher, SnapshotOutcome, SnapshotRequest};
