// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line codec for the version file

use baleen_core::VersionId;

/// Separator between stored ids
pub const SEPARATOR: char = '\n';

/// Parse file contents into ids, in file order.
///
/// Lines are trimmed; blank lines are skipped.
pub fn parse(text: &str) -> Vec<VersionId> {
    text.split(SEPARATOR)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(VersionId::from)
        .collect()
}

/// Join ids into file contents. No trailing separator.
pub fn serialize(ids: &[VersionId]) -> String {
    ids.iter()
        .map(VersionId::as_str)
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
