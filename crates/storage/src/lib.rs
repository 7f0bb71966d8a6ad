// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Durable record of applied migration versions
//!
//! Versions live in a flat text file, one id per line, in the order they
//! were applied. Every operation re-reads the file and every mutation
//! rewrites it whole.

pub mod codec;
mod repository;
mod store;

pub use repository::VersionRepository;
pub use store::{StoreError, VersionStore};
