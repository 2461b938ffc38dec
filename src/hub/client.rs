//! Snapshot fetching through the Hugging Face Hub client
//!
//! [`SnapshotFetcher`] is the seam between the CLI and the network.
//! [`HubSnapshotFetcher`] is the production implementation on top of the
//! `hf-hub` tokio API: it lists the repository at the requested revision,
//! downloads each file into the Hub cache, and materializes it under the
//! destination directory.

use std::path::PathBuf;
use std::time::Duration;

use hf_hub::api::tokio::{Api, ApiBuilder};
use hf_hub::{Repo, RepoType};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use super::materialize::materialize;
use super::request::{SnapshotOutcome, SnapshotRequest};
use crate::auth::mask_token;
use crate::config::HubConfig;
use crate::errors::{FetchError, FetchResult};

/// Retrieves a full repository snapshot into a local directory
#[allow(async_fn_in_trait)]
pub trait SnapshotFetcher {
    /// Fetch the snapshot described by `request`
    ///
    /// Errors are returned as produced; callers must not retry or rewrap them.
    async fn fetch(&self, request: &SnapshotRequest) -> FetchResult<SnapshotOutcome>;
}

/// [`SnapshotFetcher`] backed by the Hugging Face Hub
#[derive(Debug, Clone)]
pub struct HubSnapshotFetcher {
    cache_dir: Option<PathBuf>,
    show_progress: bool,
}

impl HubSnapshotFetcher {
    pub fn new(config: &HubConfig) -> Self {
        Self {
            cache_dir: config.cache_dir.clone(),
            show_progress: config.show_progress,
        }
    }

    /// Disable the progress bar regardless of configuration
    pub fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    fn build_api(&self, token: &str) -> FetchResult<Api> {
        // hf-hub's per-file bars would interleave with ours
        let mut builder = ApiBuilder::new()
            .with_token(Some(token.to_string()))
            .with_progress(false);

        if let Some(cache_dir) = &self.cache_dir {
            debug!("Using Hub cache directory {}", cache_dir.display());
            builder = builder.with_cache_dir(cache_dir.clone());
        }

        Ok(builder.build()?)
    }

    fn progress_bar(&self, total: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new(total);
        match ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}")
        {
            Ok(style) => bar.set_style(style.progress_chars("=> ")),
            Err(e) => debug!("Falling back to default progress style: {}", e),
        }
        bar.enable_steady_tick(Duration::from_millis(120));
        bar
    }
}

impl SnapshotFetcher for HubSnapshotFetcher {
    async fn fetch(&self, request: &SnapshotRequest) -> FetchResult<SnapshotOutcome> {
        info!(
            "Fetching {}@{} into {} (token {})",
            request.repo_id,
            request.revision,
            request.local_dir.display(),
            mask_token(&request.token)
        );

        let api = self.build_api(&request.token)?;
        let repo = api.repo(Repo::with_revision(
            request.repo_id.clone(),
            RepoType::Model,
            request.revision.clone(),
        ));

        let listing = repo.info().await?;
        debug!(
            "Repository {} lists {} files",
            request.repo_id,
            listing.siblings.len()
        );

        tokio::fs::create_dir_all(&request.local_dir)
            .await
            .map_err(|source| FetchError::CreateDir {
                path: request.local_dir.clone(),
                source,
            })?;

        let bar = self.progress_bar(listing.siblings.len() as u64);
        let mut files = Vec::with_capacity(listing.siblings.len());

        for sibling in listing.siblings {
            bar.set_message(sibling.rfilename.clone());

            let cached = match repo.get(&sibling.rfilename).await {
                Ok(path) => path,
                Err(e) => {
                    bar.abandon();
                    return Err(e.into());
                }
            };
            let placed =
                match materialize(&cached, &request.local_dir, &sibling.rfilename).await {
                    Ok(path) => path,
                    Err(e) => {
                        bar.abandon();
                        return Err(e);
                    }
                };

            debug!("Placed {}", placed.display());
            files.push(placed);
            bar.inc(1);
        }

        bar.finish_and_clear();
        info!(
            "Fetched {} files into {}",
            files.len(),
            request.local_dir.display()
        );

        Ok(SnapshotOutcome {
            local_dir: request.local_dir.clone(),
            files,
        })
    }
}
