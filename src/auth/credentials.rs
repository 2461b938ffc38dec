//! Token resolution for Hugging Face Hub access
//!
//! The explicit `--token` value wins; `HF_TOKEN` is only consulted when the
//! flag is absent or blank. Blank means empty or whitespace-only.

use std::fmt;

use tracing::debug;

use crate::constants::{auth, env as env_constants};

/// Where a resolved token came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// Supplied with `-t/--token`
    Argument,
    /// Read from the `HF_TOKEN` environment variable
    Environment,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSource::Argument => write!(f, "--token"),
            TokenSource::Environment => write!(f, "{}", env_constants::TOKEN),
        }
    }
}

/// A non-blank access token and its origin
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedToken {
    value: String,
    source: TokenSource,
}

impl ResolvedToken {
    /// The token value, trimmed
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn source(&self) -> TokenSource {
        self.source
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

// Never print the secret itself
impl fmt::Debug for ResolvedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedToken")
            .field("value", &mask_token(&self.value))
            .field("source", &self.source)
            .finish()
    }
}

/// Trim a raw value, treating empty and whitespace-only strings as absent
pub fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Resolve the access token using a caller-supplied environment lookup
pub fn resolve_token_with<F>(explicit: Option<&str>, lookup: F) -> Option<ResolvedToken>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = normalize(explicit) {
        debug!("Using token from --token");
        return Some(ResolvedToken {
            value,
            source: TokenSource::Argument,
        });
    }

    let from_env = lookup(env_constants::TOKEN);
    normalize(from_env.as_deref()).map(|value| {
        debug!("Using token from {}", env_constants::TOKEN);
        ResolvedToken {
            value,
            source: TokenSource::Environment,
        }
    })
}

/// Mask a token for display, keeping a short prefix
pub fn mask_token(token: &str) -> String {
    let prefix: String = token.chars().take(auth::TOKEN_VISIBLE_PREFIX).collect();
    if token.chars().count() <= auth::TOKEN_VISIBLE_PREFIX {
        "…".to_string()
    } else {
        format!("{}…", prefix)
    }
}
