//! Recursive usage aggregator
//!
//! Walks everything reachable from a root path and accumulates, for every
//! visited path, the total bytes of the files beneath it and the number of
//! entries beneath it.
//!
//! # Processing
//!
//! ```text
//! WorkStack (LIFO)
//! │
//! └── pop item → await stat → fold into self + ancestors
//!                           → directory? await listing → push children
//!                                                        (each child spawns
//!                                                         stat + listing now)
//! ```
//!
//! Fold and expansion run on one logical thread; only the lookups overlap.
//! Unreadable entries are logged and replaced by neutral metadata, so the
//! walk always runs to completion.

use crate::fs::path;
use crate::fs::types::{EntryKind, Metadata};
use crate::fs::EntrySource;
use crate::walker::queue::{WorkItem, WorkStack};
use crate::walker::tables::UsageTables;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Counters collected during a walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Entries popped and processed
    pub visited: u64,
    pub files: u64,
    pub dirs: u64,
    /// Entries that were neither file nor directory (including failed stats)
    pub other: u64,
    /// Lookup failures (metadata or listing)
    pub errors: u64,
    /// Children skipped by the hidden-entry filter
    pub hidden: u64,
    /// Total file bytes found
    pub bytes: u64,
    /// Largest number of items pending at once
    pub peak_pending: usize,
    pub duration: Duration,
}

/// Progress information for display
#[derive(Debug, Clone, Default)]
pub struct WalkProgress {
    /// Entries processed so far
    pub visited: u64,
    /// Entries created but not yet processed
    pub pending: usize,
    /// File bytes found so far
    pub bytes: u64,
    pub elapsed: Duration,
}

impl WalkProgress {
    pub fn entries_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.visited as f64 / secs
        } else {
            0.0
        }
    }
}

/// Result of a completed walk
#[derive(Debug, Clone, Default)]
pub struct WalkOutcome {
    pub tables: UsageTables,
    pub stats: WalkStats,
}

/// Usage aggregator over an [`EntrySource`]
pub struct Aggregator<S: EntrySource> {
    source: Arc<S>,
}

impl<S: EntrySource> Aggregator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Share an existing source (lets callers inspect it after the walk)
    pub fn with_shared(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Walk `root` and return the size and count tables
    ///
    /// `root` is normalized lexically; pass an absolute path so table keys
    /// are absolute. Must run inside a tokio runtime.
    pub async fn aggregate(&self, root: &str) -> WalkOutcome {
        self.aggregate_with_progress(root, |_| {}).await
    }

    /// Like [`aggregate`](Self::aggregate), calling `on_progress` after each
    /// processed entry
    pub async fn aggregate_with_progress<F>(&self, root: &str, mut on_progress: F) -> WalkOutcome
    where
        F: FnMut(&WalkProgress),
    {
        let start = Instant::now();
        let root = path::normalize(root);
        info!(root = %root, "Starting walk");

        let mut tables = UsageTables::new();
        let mut stats = WalkStats::default();
        let mut stack = WorkStack::new();
        stack.push(WorkItem::spawn(&self.source, root.clone()));

        while let Some(mut item) = stack.pop() {
            let meta = self.resolve_metadata(&mut item, &mut stats).await;

            tables.fold_ancestors(item.path(), &root, &meta);

            // Listings of non-directories are never consulted
            if meta.kind.is_dir() {
                self.expand(item, &mut stack, &mut stats).await;
            }

            stats.visited += 1;
            debug!(visited = stats.visited, pending = stack.len(), "progress");
            on_progress(&WalkProgress {
                visited: stats.visited,
                pending: stack.len(),
                bytes: stats.bytes,
                elapsed: start.elapsed(),
            });
        }

        stats.peak_pending = stack.peak_depth();
        stats.duration = start.elapsed();
        info!(
            visited = stats.visited,
            files = stats.files,
            dirs = stats.dirs,
            errors = stats.errors,
            "Walk complete"
        );

        WalkOutcome { tables, stats }
    }

    /// Await an item's metadata, substituting the neutral default on failure
    /// or for anything that is neither file nor directory
    async fn resolve_metadata(&self, item: &mut WorkItem, stats: &mut WalkStats) -> Metadata {
        let meta = match item.metadata().await {
            Ok(meta) => meta,
            Err(e) => {
                warn!(path = %item.path(), error = %e, "could not stat");
                stats.errors += 1;
                Metadata::default()
            }
        };

        match meta.kind {
            EntryKind::File => {
                stats.files += 1;
                stats.bytes += meta.size;
                meta
            }
            EntryKind::Directory => {
                stats.dirs += 1;
                meta
            }
            EntryKind::Other => {
                warn!(path = %item.path(), "not a file or directory");
                stats.other += 1;
                Metadata::default()
            }
        }
    }

    /// Await a directory's listing and push its non-hidden children
    async fn expand(&self, item: WorkItem, stack: &mut WorkStack, stats: &mut WalkStats) {
        let dir = item.path().to_string();
        let names = match item.children().await {
            Ok(names) => names,
            Err(e) => {
                warn!(path = %dir, error = %e, "could not read dir");
                stats.errors += 1;
                return;
            }
        };

        for name in names {
            let child = path::join(&dir, &name);
            if path::is_hidden(&child) {
                debug!(path = %child, "skipping hidden entry");
                stats.hidden += 1;
                continue;
            }
            stack.push(WorkItem::spawn(&self.source, child));
        }
    }
}

/// Walk `root` over `source` with no progress callback
pub async fn aggregate<S: EntrySource>(source: S, root: &str) -> WalkOutcome {
    Aggregator::new(source).aggregate(root).await
}
