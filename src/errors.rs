//! Error types for hf_assets
//!
//! Configuration failures are raised locally before any network activity.
//! Fetch failures originate in the Hub client or while placing files on disk
//! and are surfaced with their original message.

use std::path::PathBuf;
use thiserror::Error;

use crate::constants::env;

/// Configuration and invocation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No token on the command line or in the environment
    #[error(
        "Hugging Face Hub token is required. Please provide it via --token or set the {} environment variable.",
        env::TOKEN
    )]
    MissingToken,

    /// No repository identifier on the command line
    #[error("Hugging Face Hub repository ID is required. Please provide it via --repo-id.")]
    MissingRepoId,

    /// Explicitly requested configuration file does not exist
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Configuration file could not be read
    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for this schema
    #[error("Invalid configuration format in {path}: {source}")]
    InvalidFormat {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Snapshot fetch errors
#[derive(Error, Debug)]
pub enum FetchError {
    /// Error reported by the Hub client, passed through untouched
    #[error(transparent)]
    Hub(#[from] hf_hub::api::tokio::ApiError),

    /// Destination directory could not be created
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A downloaded file could not be placed in the destination
    #[error("Failed to materialize {path}: {source}")]
    Materialize {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Repository file name that would escape the destination directory
    #[error("Refusing to write outside the destination directory: {name}")]
    UnsafePath { name: String },

    /// Failure reported by a custom [`SnapshotFetcher`](crate::hub::SnapshotFetcher)
    /// implementation; the message is shown as-is
    #[error("{0}")]
    Other(String),
}

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Fetch error
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl AppError {
    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config",
            AppError::Fetch(_) => "fetch",
        }
    }

    /// Whether the error was raised before any network activity
    pub fn is_configuration(&self) -> bool {
        matches!(self, AppError::Config(_))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Fetch result type alias
pub type FetchResult<T> = std::result::Result<T, FetchError>;
