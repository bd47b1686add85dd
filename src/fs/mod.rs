//! Filesystem access for the walker
//!
//! The walker consumes exactly two lookups per entry: a metadata lookup and
//! a directory listing. Both sit behind the [`EntrySource`] trait so the
//! walk can run against the local disk ([`LocalFs`]) or an in-memory tree
//! ([`MemoryFs`]).

pub mod memory;
pub mod path;
pub mod types;

pub use memory::MemoryFs;
pub use types::{EntryKind, Metadata};

use crate::error::{FsError, FsResult};
use std::future::Future;

/// Source of entry metadata and directory listings
///
/// Failures are returned as values; implementations must not panic on a
/// missing or unreadable path.
pub trait EntrySource: Send + Sync + 'static {
    /// Classify `path` and report its size. Symlinks are not followed.
    fn stat(&self, path: &str) -> impl Future<Output = FsResult<Metadata>> + Send;

    /// Names (not paths) of the immediate children of directory `path`,
    /// in listing order
    fn list(&self, path: &str) -> impl Future<Output = FsResult<Vec<String>>> + Send;
}

/// Local filesystem access via `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl EntrySource for LocalFs {
    fn stat(&self, path: &str) -> impl Future<Output = FsResult<Metadata>> + Send {
        let path = path.to_string();
        async move {
            tokio::fs::symlink_metadata(&path)
                .await
                .map(|meta| Metadata::from_std(&meta))
                .map_err(|e| FsError::stat(&path, &e))
        }
    }

    fn list(&self, path: &str) -> impl Future<Output = FsResult<Vec<String>>> + Send {
        let path = path.to_string();
        async move {
            let mut dir = tokio::fs::read_dir(&path)
                .await
                .map_err(|e| FsError::read_dir(&path, &e))?;

            let mut names = Vec::new();
            while let Some(entry) = dir
                .next_entry()
                .await
                .map_err(|e| FsError::read_dir(&path, &e))?
            {
                // Non-UTF-8 names are kept lossily; the tables are string keyed
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
            Ok(names)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_local_stat_file_and_dir() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, b"hello").unwrap();

        let fs = LocalFs::new();
        let meta = fs.stat(file.to_str().unwrap()).await.unwrap();
        assert_eq!(meta, Metadata::file(5));

        let meta = fs.stat(dir.path().to_str().unwrap()).await.unwrap();
        assert_eq!(meta.kind, EntryKind::Directory);
    }

    #[tokio::test]
    async fn test_local_stat_missing() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = LocalFs::new().stat(missing.to_str().unwrap()).await.unwrap_err();
        assert!(matches!(err, FsError::StatFailed { .. }));
    }

    #[tokio::test]
    async fn test_local_list() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("x"), b"").unwrap();
        std::fs::create_dir(dir.path().join("y")).unwrap();

        let mut names = LocalFs::new().list(dir.path().to_str().unwrap()).await.unwrap();
        names.sort();
        assert_eq!(names, vec!["x".to_string(), "y".to_string()]);
    }

    #[tokio::test]
    async fn test_local_list_on_file_fails() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f");
        std::fs::write(&file, b"1").unwrap();
        let err = LocalFs::new().list(file.to_str().unwrap()).await.unwrap_err();
        assert!(matches!(err, FsError::ReadDirFailed { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_local_symlink_is_other() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        std::fs::write(&target, b"12345").unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let meta = LocalFs::new().stat(link.to_str().unwrap()).await.unwrap();
        assert_eq!(meta.kind, EntryKind::Other);
        assert_eq!(meta.contributed_size(), 0);
    }
}
