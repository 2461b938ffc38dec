//! Snapshot request and outcome types

use std::fmt;
use std::path::PathBuf;

use crate::auth::mask_token;
use crate::constants::fetch;

/// A validated request for one repository snapshot
///
/// Can only be built from a non-blank repository identifier and token; the
/// destination and revision are pinned.
#[derive(Clone, PartialEq, Eq)]
pub struct SnapshotRequest {
    /// Repository identifier, e.g. `org/model`
    pub repo_id: String,
    /// Bearer token sent to the Hub
    pub token: String,
    /// Directory the snapshot is materialized into
    pub local_dir: PathBuf,
    /// Revision selector
    pub revision: String,
}

impl SnapshotRequest {
    /// Request pinned to the fixed destination and revision
    pub fn pinned(repo_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            repo_id: repo_id.into(),
            token: token.into(),
            local_dir: PathBuf::from(fetch::LOCAL_DIR),
            revision: fetch::REVISION.to_string(),
        }
    }
}

impl fmt::Debug for SnapshotRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotRequest")
            .field("repo_id", &self.repo_id)
            .field("token", &mask_token(&self.token))
            .field("local_dir", &self.local_dir)
            .field("revision", &self.revision)
            .finish()
    }
}

/// Files placed on disk by a completed fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotOutcome {
    /// Destination directory
    pub local_dir: PathBuf,
    /// Materialized files, in repository listing order
    pub files: Vec<PathBuf>,
}

impl SnapshotOutcome {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_request() {
        let request = SnapshotRequest::pinned("org/model", "abc123");

        assert_eq!(request.repo_id, "org/model");
        assert_eq!(request.token, "abc123");
        assert_eq!(request.local_dir, PathBuf::from("configs"));
        assert_eq!(request.revision, "main");
    }

    #[test]
    fn test_debug_masks_token() {
        let request = SnapshotRequest::pinned("org/model", "hf_topsecret");
        let rendered = format!("{:?}", request);

        assert!(rendered.contains("org/model"));
        assert!(!rendered.contains("topsecret"));
    }
}
