// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local disk filesystem adapter

use super::{FilesystemAdapter, FsError, ResourceHandle, ResourceKind};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

/// Filesystem adapter rooted at a local directory
#[derive(Clone, Debug)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Join a relative path onto the root, refusing anything that could leave it
    fn full_path(&self, path: &str) -> Result<PathBuf, FsError> {
        let relative = Path::new(path);
        for component in relative.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(FsError::OutsideRoot(path.to_string()));
                }
            }
        }
        Ok(self.root.join(relative))
    }
}

/// Classify without following symlinks
fn kind_of(metadata: &fs::Metadata) -> ResourceKind {
    let file_type = metadata.file_type();
    if file_type.is_file() {
        ResourceKind::File
    } else if file_type.is_dir() {
        ResourceKind::Dir
    } else {
        ResourceKind::Other(describe_other(&file_type).to_string())
    }
}

#[cfg(unix)]
fn describe_other(file_type: &fs::FileType) -> &'static str {
    use std::os::unix::fs::FileTypeExt;

    if file_type.is_symlink() {
        "symlink"
    } else if file_type.is_fifo() {
        "fifo"
    } else if file_type.is_socket() {
        "socket"
    } else if file_type.is_char_device() {
        "char device"
    } else if file_type.is_block_device() {
        "block device"
    } else {
        "unknown"
    }
}

#[cfg(not(unix))]
fn describe_other(file_type: &fs::FileType) -> &'static str {
    if file_type.is_symlink() {
        "symlink"
    } else {
        "unknown"
    }
}

impl FilesystemAdapter for LocalFilesystem {
    type Handle = LocalHandle;

    fn exists(&self, path: &str) -> Result<bool, FsError> {
        let full = self.full_path(path)?;
        match fs::symlink_metadata(&full) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(FsError::io(path, e)),
        }
    }

    fn write_new(&self, path: &str, contents: &str) -> Result<bool, FsError> {
        let full = self.full_path(path)?;
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).map_err(|e| FsError::io(path, e))?;
        }

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&full) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(FsError::io(path, e)),
        };
        file.write_all(contents.as_bytes())
            .map_err(|e| FsError::io(path, e))?;
        file.sync_all().map_err(|e| FsError::io(path, e))?;
        Ok(true)
    }

    fn resolve(&self, path: &str) -> Result<LocalHandle, FsError> {
        let full = self.full_path(path)?;
        let metadata = match fs::symlink_metadata(&full) {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(FsError::NotFound(path.to_string()))
            }
            Err(e) => return Err(FsError::io(path, e)),
        };

        Ok(LocalHandle {
            path: path.to_string(),
            full,
            kind: kind_of(&metadata),
        })
    }
}

/// Handle to a resource on local disk
#[derive(Clone, Debug)]
pub struct LocalHandle {
    path: String,
    full: PathBuf,
    kind: ResourceKind,
}

impl LocalHandle {
    fn temp_path(&self) -> PathBuf {
        let name = self
            .full
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        self.full.with_file_name(format!("{}.tmp", name))
    }
}

fn replace_via(temp_path: &Path, target: &Path, contents: &str) -> io::Result<()> {
    let mut file = File::create(temp_path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    // Atomic replace (rename is atomic on POSIX)
    fs::rename(temp_path, target)
}

impl ResourceHandle for LocalHandle {
    fn path(&self) -> &str {
        &self.path
    }

    fn kind(&self) -> ResourceKind {
        self.kind.clone()
    }

    fn read_all(&self) -> Result<String, FsError> {
        let bytes = fs::read(&self.full).map_err(|e| FsError::io(&self.path, e))?;
        String::from_utf8(bytes).map_err(|_| FsError::InvalidUtf8(self.path.clone()))
    }

    fn overwrite(&self, contents: &str) -> Result<bool, FsError> {
        // Write to a sibling temp file, then rename over the target
        let temp_path = self.temp_path();
        if let Err(e) = replace_via(&temp_path, &self.full, contents) {
            let _ = fs::remove_file(&temp_path);
            return Err(FsError::io(&self.path, e));
        }
        Ok(true)
    }
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
