// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! baleen-core: shared types for migration version tracking
//!
//! This crate provides:
//! - `VersionId`, the opaque identifier of one migration step
//! - `Version`, the record handed to migration runners
//! - `StoreConfig`, where the version file lives

pub mod config;
pub mod version;

pub use config::{ConfigError, StoreConfig, CONFIG_FILENAME, DEFAULT_FILENAME};
pub use version::{Version, VersionId, VersionIdError};
