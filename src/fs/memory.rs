//! In-memory entry source
//!
//! A fixed tree of files, directories and "other" entries, with optional
//! injected lookup failures. Listings are returned in insertion order.

use crate::error::{FsError, FsResult};
use crate::fs::path;
use crate::fs::types::Metadata;
use crate::fs::EntrySource;
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug)]
struct Node {
    meta: Metadata,
    children: Vec<String>,
}

/// In-memory filesystem tree
#[derive(Debug, Default)]
pub struct MemoryFs {
    nodes: HashMap<String, Node>,
    stat_failures: HashSet<String>,
    list_failures: HashSet<String>,
    stat_calls: AtomicU64,
    list_calls: AtomicU64,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory
    pub fn dir(self, path: &str) -> Self {
        self.insert(path, Metadata::directory())
    }

    /// Add a regular file of `size` bytes
    pub fn file(self, path: &str, size: u64) -> Self {
        self.insert(path, Metadata::file(size))
    }

    /// Add an entry that is neither file nor directory (symlink, socket, ...)
    pub fn other(self, path: &str) -> Self {
        self.insert(path, Metadata::other())
    }

    /// Make the metadata lookup for `path` fail
    pub fn fail_stat(mut self, path: &str) -> Self {
        self.stat_failures.insert(path::normalize(path));
        self
    }

    /// Make the directory listing for `path` fail
    pub fn fail_list(mut self, path: &str) -> Self {
        self.list_failures.insert(path::normalize(path));
        self
    }

    /// Number of metadata lookups issued so far
    pub fn stat_calls(&self) -> u64 {
        self.stat_calls.load(Ordering::Relaxed)
    }

    /// Number of listing lookups issued so far
    pub fn list_calls(&self) -> u64 {
        self.list_calls.load(Ordering::Relaxed)
    }

    fn insert(mut self, raw: &str, meta: Metadata) -> Self {
        let full = path::normalize(raw);
        let parent = path::dirname(&full);
        if parent != full {
            if let Some(node) = self.nodes.get_mut(&parent) {
                if let Some(name) = full.rsplit('/').next() {
                    node.children.push(name.to_string());
                }
            }
        }
        self.nodes.insert(
            full,
            Node {
                meta,
                children: Vec::new(),
            },
        );
        self
    }

    fn lookup_stat(&self, path: &str) -> FsResult<Metadata> {
        if self.stat_failures.contains(path) {
            return Err(FsError::StatFailed {
                path: path.to_string(),
                reason: "permission denied".into(),
            });
        }
        self.nodes
            .get(path)
            .map(|node| node.meta)
            .ok_or_else(|| FsError::StatFailed {
                path: path.to_string(),
                reason: "no such file or directory".into(),
            })
    }

    fn lookup_list(&self, path: &str) -> FsResult<Vec<String>> {
        if self.list_failures.contains(path) {
            return Err(FsError::ReadDirFailed {
                path: path.to_string(),
                reason: "permission denied".into(),
            });
        }
        match self.nodes.get(path) {
            Some(node) if node.meta.kind.is_dir() => Ok(node.children.clone()),
            Some(_) => Err(FsError::ReadDirFailed {
                path: path.to_string(),
                reason: "not a directory".into(),
            }),
            None => Err(FsError::ReadDirFailed {
                path: path.to_string(),
                reason: "no such file or directory".into(),
            }),
        }
    }
}

impl EntrySource for MemoryFs {
    fn stat(&self, path: &str) -> impl Future<Output = FsResult<Metadata>> + Send {
        self.stat_calls.fetch_add(1, Ordering::Relaxed);
        std::future::ready(self.lookup_stat(path))
    }

    fn list(&self, path: &str) -> impl Future<Output = FsResult<Vec<String>>> + Send {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        std::future::ready(self.lookup_list(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_listing_follows_insertion_order() {
        let fs = MemoryFs::new()
            .dir("/r")
            .file("/r/z", 1)
            .dir("/r/a")
            .other("/r/m");

        assert_eq!(fs.list("/r").await.unwrap(), vec!["z", "a", "m"]);
        assert_eq!(fs.stat("/r/z").await.unwrap(), Metadata::file(1));
        assert_eq!(fs.stat_calls(), 1);
        assert_eq!(fs.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let fs = MemoryFs::new().dir("/r").fail_stat("/r").fail_list("/r");
        assert!(fs.stat("/r").await.is_err());
        assert!(fs.list("/r").await.is_err());
        assert!(fs.list("/missing").await.is_err());
    }
}
