//! Application constants for hf_assets
//!
//! Centralizes the fixed values used by the fetch flow, grouped by concern.

/// Environment variable names
pub mod env {
    /// Fallback source for the Hub access token
    pub const TOKEN: &str = "HF_TOKEN";
}

/// Fixed parameters of the snapshot fetch
pub mod fetch {
    /// Local directory the snapshot is materialized into
    pub const LOCAL_DIR: &str = "configs";

    /// Revision pinned for every fetch
    pub const REVISION: &str = "main";
}

/// Token masking for log output
pub mod auth {
    /// Number of leading token characters shown in logs
    pub const TOKEN_VISIBLE_PREFIX: usize = 4;
}

/// Configuration file locations
pub mod config {
    /// Project-local config file name
    pub const LOCAL_CONFIG_FILE: &str = "hf_assets.toml";

    /// Directory name under the user config dir
    pub const CONFIG_DIR_NAME: &str = "hf_assets";

    /// Config file name under the user config dir
    pub const CONFIG_FILE_NAME: &str = "config.toml";
}

/// Logging defaults
pub mod logging {
    /// Default log level when no flag or config overrides it
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
}

// Re-export commonly used constants for convenience
pub use env::TOKEN as ENV_TOKEN;
pub use fetch::{LOCAL_DIR, REVISION};
