//! Configuration types for usage-walker
//!
//! This module defines:
//! - CLI argument parsing using clap derive macros
//! - Runtime configuration with validation

use crate::error::ConfigError;
use crate::fs::path;
use clap::Parser;
use std::path::Path;

/// Recursive disk usage walker
#[derive(Parser, Debug, Clone)]
#[command(
    name = "usage-walker",
    version,
    about = "Print cumulative size and entry count for every path under a root",
    long_about = "Walks every non-hidden entry reachable from PATH and prints one line per \
                  visited path:\n\n    <bytes> <entries> <path>\n\n\
                  Sizes count regular files only. Symlinks, devices and unreadable entries \
                  count as one entry with no size. Diagnostics go to stderr.",
    after_help = "EXAMPLES:\n    \
        usage-walker /var/log\n    \
        usage-walker ~/src -q | sort -n | tail"
)]
pub struct CliArgs {
    /// Root path to scan
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Quiet mode - suppress progress spinner and summary
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose output (debug logging, including per-entry progress)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Validated runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkConfig {
    /// Absolute, normalized root path
    pub root: String,

    /// Show progress spinner and summary
    pub show_progress: bool,

    /// Verbose logging
    pub verbose: bool,
}

impl WalkConfig {
    /// Create and validate configuration from CLI arguments
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        let raw = args
            .path
            .filter(|p| !p.is_empty())
            .ok_or(ConfigError::MissingRoot)?;

        let root = resolve_root(&raw)?;

        Ok(Self {
            root,
            show_progress: !args.quiet,
            verbose: args.verbose,
        })
    }
}

/// Make `raw` absolute against the current directory and normalize it
///
/// Symlinks are not resolved.
pub fn resolve_root(raw: &str) -> Result<String, ConfigError> {
    let absolute = std::path::absolute(Path::new(raw)).map_err(|e| ConfigError::InvalidRoot {
        path: raw.to_string(),
        reason: e.to_string(),
    })?;

    let text = absolute.to_str().ok_or_else(|| ConfigError::InvalidRoot {
        path: raw.to_string(),
        reason: "path is not valid UTF-8".into(),
    })?;

    Ok(path::normalize(text))
}
