// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem adapters
//!
//! The narrow capability a version store needs from its backing storage:
//! existence checks, creating a resource, and resolving a path to a handle
//! that can be read and overwritten as a whole.

mod local;

pub use local::{LocalFilesystem, LocalHandle};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeFilesystem, FakeHandle, FsCall};

use std::fmt;
use thiserror::Error;

/// Errors from filesystem operations
#[derive(Debug, Error)]
pub enum FsError {
    #[error("path not found: {0}")]
    NotFound(String),
    #[error("path escapes filesystem root: {0}")]
    OutsideRoot(String),
    #[error("contents of {0} are not valid UTF-8")]
    InvalidUtf8(String),
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    pub(crate) fn io(path: &str, source: std::io::Error) -> Self {
        FsError::Io {
            path: path.to_string(),
            source,
        }
    }
}

/// What a resolved path points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKind {
    File,
    Dir,
    /// Anything else, described by the backend (e.g. "symlink", "socket").
    /// Symlinks are never followed when classifying.
    Other(String),
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::File => f.write_str("file"),
            ResourceKind::Dir => f.write_str("dir"),
            ResourceKind::Other(kind) => f.write_str(kind),
        }
    }
}

/// Handle to a single resolved resource
pub trait ResourceHandle: Send + Sync {
    /// Path the handle was resolved from
    fn path(&self) -> &str;

    /// Resource type at resolution time
    fn kind(&self) -> ResourceKind;

    fn is_file(&self) -> bool {
        self.kind() == ResourceKind::File
    }

    /// Read the entire contents as text
    fn read_all(&self) -> Result<String, FsError>;

    /// Replace the entire contents. `Ok(false)` means the backend refused the write.
    fn overwrite(&self, contents: &str) -> Result<bool, FsError>;
}

/// Adapter for a byte-oriented storage backend addressed by relative paths
pub trait FilesystemAdapter: Clone + Send + Sync + 'static {
    type Handle: ResourceHandle;

    /// Check whether anything exists at `path`
    fn exists(&self, path: &str) -> Result<bool, FsError>;

    /// Create a new resource with the given contents
    fn write_new(&self, path: &str, contents: &str) -> Result<bool, FsError>;

    /// Resolve `path` to a handle
    fn resolve(&self, path: &str) -> Result<Self::Handle, FsError>;
}
