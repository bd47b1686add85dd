//! Recursive usage walker
//!
//! This module implements a single-pass walk that folds every visited
//! entry into cumulative size and count tables.
//!
//! # Architecture
//!
//! ```text
//!                ┌──────────────────────────────┐
//!                │          Aggregator          │
//!                │  - pop from LIFO WorkStack   │
//!                │  - fold into UsageTables     │
//!                └──────────────┬───────────────┘
//!                               │ push child (spawns stat + list)
//!       ┌───────────────────────┼───────────────────────┐
//!       │                       │                       │
//! ┌─────▼─────┐           ┌─────▼─────┐           ┌─────▼─────┐
//! │ WorkItem  │           │ WorkItem  │           │ WorkItem  │
//! │ stat task │           │ stat task │           │ stat task │
//! │ list task │           │ list task │           │ list task │
//! └───────────┘           └───────────┘           └───────────┘
//! ```

pub mod aggregator;
pub mod queue;
pub mod tables;

pub use aggregator::{aggregate, Aggregator, WalkOutcome, WalkProgress, WalkStats};
pub use queue::{WorkItem, WorkStack};
pub use tables::{MetricTable, UsageTables};
