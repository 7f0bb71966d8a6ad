// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake filesystem adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{FilesystemAdapter, FsError, ResourceHandle, ResourceKind};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Recorded filesystem call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsCall {
    Exists { path: String },
    WriteNew { path: String, contents: String },
    Resolve { path: String },
    Read { path: String },
    Overwrite { path: String, contents: String },
}

#[derive(Debug, Clone)]
enum FakeEntry {
    File(String),
    Dir,
}

#[derive(Default)]
struct FakeState {
    entries: HashMap<String, FakeEntry>,
    calls: Vec<FsCall>,
    refuse_writes: bool,
    error_writes: bool,
    error_reads: bool,
}

/// In-memory filesystem adapter for testing
#[derive(Clone, Default)]
pub struct FakeFilesystem {
    state: Arc<Mutex<FakeState>>,
}

impl FakeFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Create or replace a file
    pub fn set_contents(&self, path: &str, contents: &str) {
        self.lock()
            .entries
            .insert(path.to_string(), FakeEntry::File(contents.to_string()));
    }

    /// Create a directory at `path`
    pub fn add_dir(&self, path: &str) {
        self.lock().entries.insert(path.to_string(), FakeEntry::Dir);
    }

    /// Current contents of a file, if `path` is one
    pub fn contents(&self, path: &str) -> Option<String> {
        match self.lock().entries.get(path) {
            Some(FakeEntry::File(contents)) => Some(contents.clone()),
            _ => None,
        }
    }

    /// Make writes report `Ok(false)`
    pub fn refuse_writes(&self, refuse: bool) {
        self.lock().refuse_writes = refuse;
    }

    /// Make writes fail with an I/O error
    pub fn error_writes(&self, error: bool) {
        self.lock().error_writes = error;
    }

    /// Make reads fail with an I/O error
    pub fn error_reads(&self, error: bool) {
        self.lock().error_reads = error;
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<FsCall> {
        self.lock().calls.clone()
    }

    /// Forget recorded calls
    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// Recorded overwrites, as (path, contents)
    pub fn overwrites(&self) -> Vec<(String, String)> {
        self.lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                FsCall::Overwrite { path, contents } => Some((path.clone(), contents.clone())),
                _ => None,
            })
            .collect()
    }

    fn write(&self, path: &str, contents: &str, call: FsCall) -> Result<bool, FsError> {
        let mut state = self.lock();
        state.calls.push(call);

        if state.error_writes {
            return Err(FsError::io(path, std::io::Error::other("injected write error")));
        }
        if state.refuse_writes {
            return Ok(false);
        }
        if let Some(FakeEntry::Dir) = state.entries.get(path) {
            return Err(FsError::io(path, std::io::Error::other("is a directory")));
        }

        state
            .entries
            .insert(path.to_string(), FakeEntry::File(contents.to_string()));
        Ok(true)
    }
}

impl FilesystemAdapter for FakeFilesystem {
    type Handle = FakeHandle;

    fn exists(&self, path: &str) -> Result<bool, FsError> {
        let mut state = self.lock();
        state.calls.push(FsCall::Exists {
            path: path.to_string(),
        });
        Ok(state.entries.contains_key(path))
    }

    fn write_new(&self, path: &str, contents: &str) -> Result<bool, FsError> {
        let call = FsCall::WriteNew {
            path: path.to_string(),
            contents: contents.to_string(),
        };
        if self.lock().entries.contains_key(path) {
            self.lock().calls.push(call);
            return Ok(false);
        }
        self.write(path, contents, call)
    }

    fn resolve(&self, path: &str) -> Result<FakeHandle, FsError> {
        let mut state = self.lock();
        state.calls.push(FsCall::Resolve {
            path: path.to_string(),
        });

        let kind = match state.entries.get(path) {
            Some(FakeEntry::File(_)) => ResourceKind::File,
            Some(FakeEntry::Dir) => ResourceKind::Dir,
            None => return Err(FsError::NotFound(path.to_string())),
        };

        Ok(FakeHandle {
            fs: self.clone(),
            path: path.to_string(),
            kind,
        })
    }
}

/// Handle into a [`FakeFilesystem`]
#[derive(Clone)]
pub struct FakeHandle {
    fs: FakeFilesystem,
    path: String,
    kind: ResourceKind,
}

impl ResourceHandle for FakeHandle {
    fn path(&self) -> &str {
        &self.path
    }

    fn kind(&self) -> ResourceKind {
        self.kind.clone()
    }

    fn read_all(&self) -> Result<String, FsError> {
        let mut state = self.fs.lock();
        state.calls.push(FsCall::Read {
            path: self.path.clone(),
        });

        if state.error_reads {
            return Err(FsError::io(
                &self.path,
                std::io::Error::other("injected read error"),
            ));
        }

        match state.entries.get(&self.path) {
            Some(FakeEntry::File(contents)) => Ok(contents.clone()),
            Some(FakeEntry::Dir) => Err(FsError::io(
                &self.path,
                std::io::Error::other("is a directory"),
            )),
            None => Err(FsError::NotFound(self.path.clone())),
        }
    }

    fn overwrite(&self, contents: &str) -> Result<bool, FsError> {
        self.fs.write(
            &self.path,
            contents,
            FsCall::Overwrite {
                path: self.path.clone(),
                contents: contents.to_string(),
            },
        )
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
