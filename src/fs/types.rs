//! Entry metadata types
//!
//! The walker only needs to know whether a path is a regular file, a
//! directory, or something else, plus a byte size for files.

use std::fs::FileType;

/// Classification of a filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntryKind {
    /// Regular file
    File,
    /// Directory
    Directory,
    /// Anything else: symlinks, devices, sockets, FIFOs, or an entry whose
    /// metadata could not be read
    #[default]
    Other,
}

impl EntryKind {
    /// Classify a std file type without following symlinks
    pub fn from_file_type(ft: FileType) -> Self {
        if ft.is_file() {
            EntryKind::File
        } else if ft.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        }
    }

    /// Check if this is a regular file
    pub fn is_file(&self) -> bool {
        *self == EntryKind::File
    }

    /// Check if this is a directory
    pub fn is_dir(&self) -> bool {
        *self == EntryKind::Directory
    }
}

/// Metadata for one path
///
/// `Metadata::default()` is the neutral value substituted whenever a lookup
/// fails or the entry is neither a file nor a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Metadata {
    /// Entry classification
    pub kind: EntryKind,

    /// Size in bytes (only meaningful for files)
    pub size: u64,
}

impl Metadata {
    /// Metadata for a regular file
    pub fn file(size: u64) -> Self {
        Self {
            kind: EntryKind::File,
            size,
        }
    }

    /// Metadata for a directory
    pub fn directory() -> Self {
        Self {
            kind: EntryKind::Directory,
            size: 0,
        }
    }

    /// Metadata for an entry that is neither file nor directory
    pub fn other() -> Self {
        Self::default()
    }

    /// Convert from std metadata (as returned by `symlink_metadata`)
    pub fn from_std(meta: &std::fs::Metadata) -> Self {
        let kind = EntryKind::from_file_type(meta.file_type());
        Self {
            kind,
            size: if kind.is_file() { meta.len() } else { 0 },
        }
    }

    /// Size this entry adds to itself and every ancestor
    pub fn contributed_size(&self) -> u64 {
        if self.kind.is_file() { self.size } else { 0 }
    }
}
