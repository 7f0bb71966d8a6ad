// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File-backed version store

use crate::codec;
use crate::repository::VersionRepository;
use baleen_adapters::{FilesystemAdapter, FsError, ResourceHandle, ResourceKind};
use baleen_core::{StoreConfig, VersionId, VersionIdError, DEFAULT_FILENAME};
use thiserror::Error;

/// Errors from version store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("expected path \"{path}\" to be a file but it is a \"{kind}\"")]
    InvalidResourceType { path: String, kind: ResourceKind },
    #[error("could not write to file \"{path}\"")]
    WriteFailure {
        path: String,
        #[source]
        source: Option<FsError>,
    },
    #[error("could not read file \"{path}\"")]
    ReadFailure {
        path: String,
        #[source]
        source: FsError,
    },
    #[error(transparent)]
    InvalidVersionId(#[from] VersionIdError),
}

impl StoreError {
    fn write(path: &str, result: Result<bool, FsError>) -> Result<(), StoreError> {
        match result {
            Ok(true) => Ok(()),
            Ok(false) => Err(StoreError::WriteFailure {
                path: path.to_string(),
                source: None,
            }),
            Err(e) => Err(StoreError::WriteFailure {
                path: path.to_string(),
                source: Some(e),
            }),
        }
    }

    fn read(path: &str) -> impl FnOnce(FsError) -> StoreError + '_ {
        move |source| StoreError::ReadFailure {
            path: path.to_string(),
            source,
        }
    }
}

/// Version store over a single file of newline-separated ids.
///
/// Nothing is cached: every operation reads the file again, and every
/// mutation rewrites it in full. Callers must not share the file between
/// concurrent writers.
pub struct VersionStore<F: FilesystemAdapter> {
    handle: F::Handle,
}

impl<F: FilesystemAdapter> VersionStore<F> {
    /// Open the store at `file`, creating an empty file if nothing is there.
    ///
    /// Fails with `InvalidResourceType` if `file` resolves to something
    /// other than a regular file.
    pub fn open(fs: &F, file: &str) -> Result<Self, StoreError> {
        let exists = fs.exists(file).map_err(StoreError::read(file))?;
        if !exists {
            tracing::info!(path = file, "creating version file");
            StoreError::write(file, fs.write_new(file, ""))?;
        }

        let handle = fs.resolve(file).map_err(StoreError::read(file))?;
        if !handle.is_file() {
            return Err(StoreError::InvalidResourceType {
                path: handle.path().to_string(),
                kind: handle.kind(),
            });
        }

        Ok(Self { handle })
    }

    /// Open the store at `.baleen_versions`
    pub fn open_default(fs: &F) -> Result<Self, StoreError> {
        Self::open(fs, DEFAULT_FILENAME)
    }

    pub fn from_config(fs: &F, config: &StoreConfig) -> Result<Self, StoreError> {
        Self::open(fs, &config.file)
    }

    /// Path of the backing file
    pub fn path(&self) -> &str {
        self.handle.path()
    }
}

fn index_of(needle: &VersionId, haystack: &[VersionId]) -> Option<usize> {
    haystack.iter().position(|item| needle.is_same_value_as(item))
}

impl<F: FilesystemAdapter> VersionRepository for VersionStore<F> {
    fn fetch_all(&self) -> Result<Vec<VersionId>, StoreError> {
        let contents = self
            .handle
            .read_all()
            .map_err(StoreError::read(self.path()))?;
        let ids = codec::parse(&contents);
        tracing::debug!(path = self.path(), count = ids.len(), "fetched versions");
        Ok(ids)
    }

    fn fetch(&self, id: &VersionId) -> Result<Option<VersionId>, StoreError> {
        let mut stored = self.fetch_all()?;
        Ok(index_of(id, &stored).map(|index| stored.swap_remove(index)))
    }

    fn save(&self, id: &VersionId) -> Result<bool, StoreError> {
        id.validate()?;
        let mut stored = self.fetch_all()?;
        if index_of(id, &stored).is_some() {
            tracing::debug!(path = self.path(), %id, "already migrated");
            return Ok(false);
        }

        stored.push(id.clone());
        let result = self.save_all(&stored)?;
        tracing::info!(path = self.path(), %id, "version saved");
        Ok(result)
    }

    fn delete(&self, id: &VersionId) -> Result<bool, StoreError> {
        let mut stored = self.fetch_all()?;
        let Some(index) = index_of(id, &stored) else {
            tracing::debug!(path = self.path(), %id, "not migrated");
            return Ok(false);
        };

        stored.remove(index);
        let result = self.save_all(&stored)?;
        tracing::info!(path = self.path(), %id, "version deleted");
        Ok(result)
    }

    fn save_all(&self, ids: &[VersionId]) -> Result<bool, StoreError> {
        for id in ids {
            id.validate()?;
        }
        let contents = codec::serialize(ids);
        StoreError::write(self.path(), self.handle.overwrite(&contents))?;
        tracing::debug!(path = self.path(), count = ids.len(), "versions written");
        Ok(true)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
