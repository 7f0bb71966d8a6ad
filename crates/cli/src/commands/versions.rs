// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Version bookkeeping commands

use crate::output::{self, OutputFormat};
use baleen_core::VersionId;
use baleen_storage::VersionRepository;
use clap::Subcommand;
use serde::Serialize;
use std::fmt;
use std::io::Write;

#[derive(Subcommand)]
pub enum VersionCommand {
    /// List migrated versions in the order they were applied
    List,
    /// Mark a version as migrated
    Add {
        /// Version id
        #[arg(value_parser = VersionId::parse)]
        id: VersionId,
    },
    /// Unmark a migrated version
    Remove {
        /// Version id
        #[arg(value_parser = VersionId::parse)]
        id: VersionId,
    },
    /// Show whether a version is migrated
    Status {
        /// Version id
        #[arg(value_parser = VersionId::parse)]
        id: VersionId,
    },
    /// Replace the stored versions with the given list
    Reset {
        /// Version ids, in application order
        #[arg(value_parser = VersionId::parse)]
        ids: Vec<VersionId>,
    },
}

#[derive(Serialize)]
struct VersionStatus {
    id: VersionId,
    migrated: bool,
}

impl fmt::Display for VersionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.migrated { "migrated" } else { "pending" };
        write!(f, "{}: {}", self.id, state)
    }
}

pub fn handle<R: VersionRepository>(
    repo: &R,
    command: VersionCommand,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        VersionCommand::List => list(repo, format, out),
        VersionCommand::Add { id } => add(repo, id, out),
        VersionCommand::Remove { id } => remove(repo, id, out),
        VersionCommand::Status { id } => status(repo, id, format, out),
        VersionCommand::Reset { ids } => reset(repo, ids, out),
    }
}

fn list<R: VersionRepository>(
    repo: &R,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let ids = repo.fetch_all()?;
    output::print_list(out, &ids, "No versions migrated", format)?;
    Ok(())
}

fn add<R: VersionRepository>(repo: &R, id: VersionId, out: &mut impl Write) -> anyhow::Result<()> {
    if repo.save(&id)? {
        writeln!(out, "Migrated {}", id)?;
    } else {
        writeln!(out, "Already migrated: {}", id)?;
    }
    Ok(())
}

fn remove<R: VersionRepository>(
    repo: &R,
    id: VersionId,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if repo.delete(&id)? {
        writeln!(out, "Removed {}", id)?;
    } else {
        writeln!(out, "Not migrated: {}", id)?;
    }
    Ok(())
}

fn status<R: VersionRepository>(
    repo: &R,
    id: VersionId,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let migrated = repo.is_migrated(&id)?;
    output::print(out, &VersionStatus { id, migrated }, format)?;
    Ok(())
}

fn reset<R: VersionRepository>(
    repo: &R,
    raw: Vec<VersionId>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut ids: Vec<VersionId> = Vec::with_capacity(raw.len());
    for id in raw {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    repo.save_all(&ids)?;
    writeln!(out, "Stored {} versions", ids.len())?;
    Ok(())
}

#[cfg(test)]
#[path = "versions_tests.rs"]
mod tests;
