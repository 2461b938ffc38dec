//! Command-line argument parsing for hf_assets
//!
//! Defines the flat CLI surface with clap derive macros: the two fetch
//! parameters plus global logging and configuration options.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::config::AppConfig;

/// hf_assets - download repository assets from the Hugging Face Hub
#[derive(Parser, Debug)]
#[command(
    name = "hf_assets",
    version,
    about = "Helper script for downloading the necessary assets from the Hugging Face Hub REPO."
)]
pub struct Cli {
    /// Fetch parameters
    #[command(flatten)]
    pub fetch: FetchArgs,

    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Parameters identifying what to fetch and how to authenticate
#[derive(Args, Debug, Clone, Default)]
pub struct FetchArgs {
    /// Hugging Face Hub token for authentication. If not provided, the script will use the token from the environment variable
    #[arg(short, long)]
    pub token: Option<String>,

    /// Hugging Face Hub repository ID
    #[arg(short, long = "repo-id")]
    pub repo_id: Option<String>,
}

/// Logging and configuration options
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long)]
    pub very_verbose: bool,

    /// Quiet mode - errors only, no progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level; flags win over the config file
    pub fn log_level(&self, config: &AppConfig) -> tracing::Level {
        if self.global.quiet {
            tracing::Level::ERROR
        } else if self.global.very_verbose {
            tracing::Level::DEBUG
        } else if self.global.verbose {
            tracing::Level::INFO
        } else {
            config.log_level().unwrap_or(tracing::Level::WARN)
        }
    }
}
