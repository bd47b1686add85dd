//! Metric tables
//!
//! A [`MetricTable`] maps a normalized path to an accumulated number and
//! iterates in key insertion order, so rendering is deterministic for a
//! given traversal order.

use crate::fs::path;
use crate::fs::types::Metadata;
use std::collections::HashMap;

/// Insertion-ordered mapping from path to accumulated value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl MetricTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value recorded for `key`
    pub fn get(&self, key: &str) -> Option<u64> {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ensure `key` exists (starting at 0) and add `amount` to it
    pub fn add(&mut self, key: &str, amount: u64) {
        let slot = match self.index.get(key) {
            Some(&i) => i,
            None => self.push(key, 0),
        };
        self.entries[slot].1 += amount;
    }

    /// Insert `key` with `initial` on first sight, otherwise increment by one
    pub fn bump(&mut self, key: &str, initial: u64) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.push(key, initial);
            }
        }
    }

    /// Iterate `(path, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    fn push(&mut self, key: &str, value: u64) -> usize {
        let slot = self.entries.len();
        self.entries.push((key.to_string(), value));
        self.index.insert(key.to_string(), slot);
        slot
    }
}

/// The two tables produced by a walk, populated in lockstep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageTables {
    /// Cumulative file bytes per path
    pub sizes: MetricTable,

    /// Cumulative descendant count per path (a file counts itself)
    pub counts: MetricTable,
}

impl UsageTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split into `(sizes, counts)`
    pub fn into_parts(self) -> (MetricTable, MetricTable) {
        (self.sizes, self.counts)
    }

    /// Number of paths recorded
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// `(size, count)` for one path
    pub fn get(&self, key: &str) -> Option<(u64, u64)> {
        Some((self.sizes.get(key)?, self.counts.get(key)?))
    }

    /// Iterate `(path, size, count)` in insertion order
    pub fn rows(&self) -> impl Iterator<Item = (&str, u64, u64)> + '_ {
        self.sizes
            .iter()
            .map(|(key, size)| (key, size, self.counts.get(key).unwrap_or(0)))
    }

    /// Fold one processed entry into itself and every ancestor up to `root`
    ///
    /// Walks from `path` through successive parents while the candidate is
    /// at least as long as `root`. Never goes past `root` itself, so a short
    /// relative root cannot fold into `.`, and stops at the `dirname` fixed
    /// point so a root of `/` terminates.
    pub fn fold_ancestors(&mut self, path: &str, root: &str, meta: &Metadata) {
        let added = meta.contributed_size();
        let initial_count = if meta.kind.is_dir() { 0 } else { 1 };

        let mut current = path.to_string();
        while current.len() >= root.len() {
            self.sizes.add(&current, added);
            self.counts.bump(&current, initial_count);
            if current == root {
                break;
            }

            let parent = path::normalize(&path::dirname(&current));
            if parent == current {
                break;
            }
            current = parent;
        }
    }
}
