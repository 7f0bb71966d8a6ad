// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print output in the specified format
pub fn print<T: Serialize + std::fmt::Display>(
    out: &mut impl Write,
    value: &T,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", value),
        OutputFormat::Json => writeln!(out, "{}", to_json(value)?),
    }
}

/// Print a list of items, or `empty` when there are none
pub fn print_list<T: Serialize + std::fmt::Display>(
    out: &mut impl Write,
    items: &[T],
    empty: &str,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text if items.is_empty() => writeln!(out, "{}", empty),
        OutputFormat::Text => {
            for item in items {
                writeln!(out, "{}", item)?;
            }
            Ok(())
        }
        OutputFormat::Json => writeln!(out, "{}", to_json(items)?),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> io::Result<String> {
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
