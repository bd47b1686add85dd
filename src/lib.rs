//! usage-walker - Recursive Disk Usage Walker
//!
//! Computes, for a root path, the cumulative byte size and descendant entry
//! count of every file and directory reachable from it, skipping hidden
//! entries, and renders one `<size> <count> <path>` line per visited path.
//!
//! # Features
//!
//! - **Overlapped Lookups**: every discovered entry issues its metadata and
//!   listing lookups immediately; results are consumed one entry at a time.
//!
//! - **Graceful Degradation**: unreadable entries are logged and counted
//!   with no size instead of aborting the walk.
//!
//! - **Pluggable Source**: the walk runs over any [`fs::EntrySource`], such
//!   as the local disk or an in-memory tree.
//!
//! # Example
//!
//! ```bash
//! usage-walker /var/log
//! usage-walker ~/src -q | sort -n | tail
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod output;
pub mod progress;
pub mod walker;

pub use config::{CliArgs, WalkConfig};
pub use error::{ConfigError, FsError, FsResult};
pub use fs::{EntrySource, LocalFs, MemoryFs};
pub use walker::{aggregate, Aggregator, MetricTable, UsageTables, WalkOutcome, WalkStats};
