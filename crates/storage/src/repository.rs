// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Repository interface consumed by migration runners

use crate::store::StoreError;
use baleen_core::{Version, VersionId};

/// Bookkeeping of which versions have been migrated.
///
/// `save` and `delete` return `Ok(false)` only when there is nothing to do.
/// A failed read or write is always an `Err`.
pub trait VersionRepository {
    /// All migrated ids, in the order they were saved
    fn fetch_all(&self) -> Result<Vec<VersionId>, StoreError>;

    /// The stored id equal to `id`, if any
    fn fetch(&self, id: &VersionId) -> Result<Option<VersionId>, StoreError>;

    /// Record `id` as migrated. `Ok(false)` if it already was.
    fn save(&self, id: &VersionId) -> Result<bool, StoreError>;

    /// Forget `id`. `Ok(false)` if it was not stored.
    fn delete(&self, id: &VersionId) -> Result<bool, StoreError>;

    /// Replace the stored sequence with `ids`
    fn save_all(&self, ids: &[VersionId]) -> Result<bool, StoreError>;

    fn is_migrated(&self, id: &VersionId) -> Result<bool, StoreError> {
        Ok(self.fetch(id)?.is_some())
    }

    /// Stored ids as version records
    fn fetch_migrated(&self) -> Result<Vec<Version>, StoreError> {
        Ok(self
            .fetch_all()?
            .into_iter()
            .map(Version::migrated)
            .collect())
    }
}
