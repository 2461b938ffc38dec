//! Placing cached Hub files into the destination directory
//!
//! The Hub client keeps blobs in its own cache and hands back snapshot
//! paths that are usually symlinks. Each file is copied from the resolved
//! blob to `local_dir/<repository path>`.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::errors::{FetchError, FetchResult};

/// Convert a repository file name into a relative path inside the destination
///
/// Rejects absolute paths and any `..` component.
pub fn safe_relative_path(name: &str) -> FetchResult<PathBuf> {
    let path = Path::new(name);
    let mut relative = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(FetchError::UnsafePath {
                    name: name.to_string(),
                });
            }
        }
    }

    if relative.as_os_str().is_empty() {
        return Err(FetchError::UnsafePath {
            name: name.to_string(),
        });
    }

    Ok(relative)
}

/// Place one cached file at `local_dir/<name>`, replacing any existing file
pub async fn materialize(cached: &Path, local_dir: &Path, name: &str) -> FetchResult<PathBuf> {
    let destination = local_dir.join(safe_relative_path(name)?);

    if let Some(parent) = destination.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| FetchError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    // Snapshot entries are symlinks into the blob store
    let blob = tokio::fs::canonicalize(cached)
        .await
        .map_err(|source| FetchError::Materialize {
            path: cached.to_path_buf(),
            source,
        })?;

    match tokio::fs::remove_file(&destination).await {
        Ok(()) => debug!("Replacing existing {}", destination.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(source) => {
            return Err(FetchError::Materialize {
                path: destination,
                source,
            });
        }
    }

    // Independent copy; the cache blob must never share an inode with it
    tokio::fs::copy(&blob, &destination)
        .await
        .map_err(|source| FetchError::Materialize {
            path: destination.clone(),
            source,
        })?;

    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_safe_relative_path() {
        assert_eq!(
            safe_relative_path("config.json").unwrap(),
            PathBuf::from("config.json")
        );
        assert_eq!(
            safe_relative_path("./nested/dir/file.yaml").unwrap(),
            PathBuf::from("nested/dir/file.yaml")
        );

        assert!(safe_relative_path("../escape.txt").is_err());
        assert!(safe_relative_path("a/../../b").is_err());
        assert!(safe_relative_path("/etc/passwd").is_err());
        assert!(safe_relative_path("").is_err());
    }

    #[tokio::test]
    async fn test_materialize_nested_file() {
        let temp_dir = TempDir::new().unwrap();
        let cached = temp_dir.path().join("blob");
        tokio::fs::write(&cached, b"{\"hidden_size\": 8}").await.unwrap();
        let local_dir = temp_dir.path().join("configs");

        let placed = materialize(&cached, &local_dir, "sub/config.json")
            .await
            .unwrap();

        assert_eq!(placed, local_dir.join("sub").join("config.json"));
        let content = tokio::fs::read_to_string(&placed).await.unwrap();
        assert_eq!(content, "{\"hidden_size\": 8}");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_materialize_follows_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let blob = temp_dir.path().join("blobs").join("abc");
        tokio::fs::create_dir_all(blob.parent().unwrap()).await.unwrap();
        tokio::fs::write(&blob, b"weights").await.unwrap();

        let snapshot = temp_dir.path().join("snapshot.bin");
        std::os::unix::fs::symlink(&blob, &snapshot).unwrap();

        let local_dir = temp_dir.path().join("configs");
        let placed = materialize(&snapshot, &local_dir, "model.bin").await.unwrap();

        let metadata = tokio::fs::symlink_metadata(&placed).await.unwrap();
        assert!(!metadata.file_type().is_symlink());
        assert_eq!(tokio::fs::read(&placed).await.unwrap(), b"weights");
    }

    #[tokio::test]
    async fn test_materialize_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let cached = temp_dir.path().join("blob");
        tokio::fs::write(&cached, b"new").await.unwrap();

        let local_dir = temp_dir.path().join("configs");
        tokio::fs::create_dir_all(&local_dir).await.unwrap();
        tokio::fs::write(local_dir.join("a.txt"), b"old").await.unwrap();

        let placed = materialize(&cached, &local_dir, "a.txt").await.unwrap();
        assert_eq!(tokio::fs::read(&placed).await.unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_editing_placed_file_leaves_blob_intact() {
        let temp_dir = TempDir::new().unwrap();
        let blob = temp_dir.path().join("blob");
        tokio::fs::write(&blob, b"original").await.unwrap();
        let local_dir = temp_dir.path().join("configs");

        let placed = materialize(&blob, &local_dir, "config.json").await.unwrap();
        tokio::fs::write(&placed, b"EDITED!!").await.unwrap();

        assert_eq!(tokio::fs::read(&blob).await.unwrap(), b"original");
        assert_eq!(tokio::fs::read(&placed).await.unwrap(), b"EDITED!!");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_replacing_linked_destination_leaves_blob_intact() {
        let temp_dir = TempDir::new().unwrap();
        let blob = temp_dir.path().join("blob");
        tokio::fs::write(&blob, b"original").await.unwrap();

        let local_dir = temp_dir.path().join("configs");
        tokio::fs::create_dir_all(&local_dir).await.unwrap();
        let stale = local_dir.join("config.json");
        tokio::fs::hard_link(&blob, &stale).await.unwrap();

        let placed = materialize(&blob, &local_dir, "config.json").await.unwrap();
        tokio::fs::write(&placed, b"EDITED!!").await.unwrap();

        assert_eq!(tokio::fs::read(&blob).await.unwrap(), b"original");
    }

    #[tokio::test]
    async fn test_materialize_missing_cache_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = materialize(
            &temp_dir.path().join("missing"),
            &temp_dir.path().join("configs"),
            "a.txt",
        )
        .await;

        assert!(matches!(result, Err(FetchError::Materialize { .. })));
    }
}
