//! Command handler for hf_assets
//!
//! Resolves and validates the fetch parameters, then hands the request to
//! a [`SnapshotFetcher`]. Nothing reaches the fetcher unless both the token
//! and the repository identifier are present.

use std::env;

use tracing::{debug, info};

use crate::auth::{normalize, resolve_token_with};
use crate::cli::FetchArgs;
use crate::errors::{ConfigError, ConfigResult, Result};
use crate::hub::{SnapshotFetcher, SnapshotOutcome, SnapshotRequest};

/// Build a validated snapshot request using a caller-supplied environment lookup
///
/// The token is checked before the repository identifier.
pub fn build_request_with<F>(args: &FetchArgs, lookup: F) -> ConfigResult<SnapshotRequest>
where
    F: Fn(&str) -> Option<String>,
{
    let token = resolve_token_with(args.token.as_deref(), lookup)
        .ok_or(ConfigError::MissingToken)?;
    let repo_id = normalize(args.repo_id.as_deref()).ok_or(ConfigError::MissingRepoId)?;

    debug!("Token resolved from {}", token.source());
    Ok(SnapshotRequest::pinned(repo_id, token.into_value()))
}

/// Handle a fetch invocation against the process environment
pub async fn handle_fetch<S>(args: &FetchArgs, fetcher: &S) -> Result<SnapshotOutcome>
where
    S: SnapshotFetcher,
{
    handle_fetch_with(args, fetcher, |name| env::var(name).ok()).await
}

/// Handle a fetch invocation with an injected environment lookup
pub async fn handle_fetch_with<S, F>(
    args: &FetchArgs,
    fetcher: &S,
    lookup: F,
) -> Result<SnapshotOutcome>
where
    S: SnapshotFetcher,
    F: Fn(&str) -> Option<String>,
{
    let request = build_request_with(args, lookup)?;
    info!("Requesting snapshot {:?}", request);

    let outcome = fetcher.fetch(&request).await?;
    info!(
        "Snapshot of {} complete: {} files in {}",
        request.repo_id,
        outcome.file_count(),
        outcome.local_dir.display()
    );
    Ok(outcome)
}
