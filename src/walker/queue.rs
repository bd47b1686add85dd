//! Work stack of pending entries
//!
//! Every [`WorkItem`] starts both of its lookups the moment it is created;
//! the walker only waits on them when the item is popped. The
//! [`WorkStack`] is LIFO: the most recently discovered entry is processed
//! next.

use crate::error::{FsError, FsResult};
use crate::fs::types::Metadata;
use crate::fs::EntrySource;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};

/// A path awaiting processing, with its lookups already in flight
///
/// Dropping an item detaches any lookup not yet awaited; the task still
/// runs but its result is discarded.
#[derive(Debug)]
pub struct WorkItem {
    /// Normalized path
    path: String,

    /// Pending metadata lookup
    stat: JoinHandle<FsResult<Metadata>>,

    /// Pending listing lookup (issued for every item; only consulted for
    /// directories)
    children: JoinHandle<FsResult<Vec<String>>>,
}

impl WorkItem {
    /// Create an item and immediately spawn both lookups for `path`
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<S: EntrySource>(source: &Arc<S>, path: String) -> Self {
        let stat = {
            let source = Arc::clone(source);
            let path = path.clone();
            tokio::spawn(async move { source.stat(&path).await })
        };
        let children = {
            let source = Arc::clone(source);
            let path = path.clone();
            tokio::spawn(async move { source.list(&path).await })
        };

        Self {
            path,
            stat,
            children,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Wait for the metadata lookup
    pub async fn metadata(&mut self) -> FsResult<Metadata> {
        let joined = (&mut self.stat).await;
        flatten(&self.path, joined)
    }

    /// Wait for the listing lookup, consuming the item
    pub async fn children(self) -> FsResult<Vec<String>> {
        let joined = self.children.await;
        flatten(&self.path, joined)
    }
}

fn flatten<T>(path: &str, joined: Result<FsResult<T>, JoinError>) -> FsResult<T> {
    joined.unwrap_or_else(|e| {
        Err(FsError::TaskFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })
    })
}

/// LIFO stack of pending work items
#[derive(Debug, Default)]
pub struct WorkStack {
    items: Vec<WorkItem>,
    peak_depth: usize,
}

impl WorkStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an item; it becomes the next one popped
    pub fn push(&mut self, item: WorkItem) {
        self.items.push(item);
        self.peak_depth = self.peak_depth.max(self.items.len());
    }

    /// Pop the most recently pushed item
    pub fn pop(&mut self) -> Option<WorkItem> {
        self.items.pop()
    }

    /// Number of pending items (each with two lookups in flight)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Largest number of items that were pending at once
    pub fn peak_depth(&self) -> usize {
        self.peak_depth
    }
}
