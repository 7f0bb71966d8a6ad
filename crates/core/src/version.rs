// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Version identifiers and records

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Reasons an id cannot be stored as one line of the version file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionIdError {
    #[error("version id cannot be blank")]
    Blank,
    #[error("version id cannot start or end with whitespace: {0:?}")]
    Padded(String),
    #[error("version id cannot contain line breaks: {0:?}")]
    LineBreak(String),
}

/// Unique identifier of one migration step.
///
/// Equality is exact string equality. There is no ordering between ids;
/// the order of a stored sequence is insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionId(String);

impl VersionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build an id, rejecting values that would not read back unchanged
    pub fn parse(raw: &str) -> Result<Self, VersionIdError> {
        let id = Self::new(raw);
        id.validate()?;
        Ok(id)
    }

    /// Check that the id survives a write and re-read of the version file
    pub fn validate(&self) -> Result<(), VersionIdError> {
        if self.0.trim().is_empty() {
            return Err(VersionIdError::Blank);
        }
        if self.0.trim() != self.0 {
            return Err(VersionIdError::Padded(self.0.clone()));
        }
        if self.0.contains(['\n', '\r']) {
            return Err(VersionIdError::LineBreak(self.0.clone()));
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value comparison with another id
    pub fn is_same_value_as(&self, other: &VersionId) -> bool {
        self.0 == other.0
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VersionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VersionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for VersionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A version as seen by a migration runner.
///
/// Records only come out of a version store, and presence in the store is
/// what migrated means, so there is no flag to keep in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    id: VersionId,
}

impl Version {
    pub fn migrated(id: impl Into<VersionId>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &VersionId {
        &self.id
    }

    pub fn is_migrated(&self) -> bool {
        true
    }
}

impl From<Version> for VersionId {
    fn from(version: Version) -> Self {
        version.id
    }
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
