//! Error types for usage-walker
//!
//! This module defines the error hierarchy for:
//! - Filesystem lookups (metadata and directory listings)
//! - Configuration and CLI errors
//!
//! Lookup errors are per-entry: the walker logs them and substitutes a
//! neutral value instead of propagating. Only configuration errors stop a
//! run; the binary wraps them with anyhow context.

use thiserror::Error;

/// Errors from the two filesystem lookups the walker issues per entry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    /// Metadata lookup failed
    #[error("could not stat '{path}': {reason}")]
    StatFailed { path: String, reason: String },

    /// Directory listing failed
    #[error("could not read dir '{path}': {reason}")]
    ReadDirFailed { path: String, reason: String },

    /// The spawned lookup task never produced a value (panicked or cancelled)
    #[error("lookup task for '{path}' did not complete: {reason}")]
    TaskFailed { path: String, reason: String },
}

impl FsError {
    /// Build a stat failure from an I/O error
    pub fn stat(path: &str, err: &std::io::Error) -> Self {
        FsError::StatFailed {
            path: path.to_string(),
            reason: err.to_string(),
        }
    }

    /// Build a listing failure from an I/O error
    pub fn read_dir(path: &str, err: &std::io::Error) -> Self {
        FsError::ReadDirFailed {
            path: path.to_string(),
            reason: err.to_string(),
        }
    }
}

/// Configuration and CLI errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No root path given on the command line
    #[error("expected a single parameter: the path to scan")]
    MissingRoot,

    /// Root path could not be turned into an absolute path
    #[error("Invalid root path '{path}': {reason}")]
    InvalidRoot { path: String, reason: String },
}

/// Result type alias for FsError
pub type FsResult<T> = std::result::Result<T, FsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = FsError::read_dir("/missing", &io);
        assert_eq!(err.to_string(), "could not read dir '/missing': gone");

        let err = FsError::stat("/x", &io);
        assert!(matches!(err, FsError::StatFailed { ref path, .. } if path == "/x"));
    }

    #[test]
    fn test_config_error_message() {
        assert_eq!(
            ConfigError::MissingRoot.to_string(),
            "expected a single parameter: the path to scan"
        );
    }
}
