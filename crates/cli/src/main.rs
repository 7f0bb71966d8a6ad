// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! baleen - migration version bookkeeping CLI

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod error;
mod output;

use anyhow::{Context, Result};
use baleen_adapters::{LocalFilesystem, TracedFilesystem};
use baleen_core::StoreConfig;
use baleen_storage::VersionStore;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::commands::versions::{self, VersionCommand};
use crate::error::CliError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "baleen",
    version,
    about = "Baleen - track which migration versions have been applied"
)]
struct Cli {
    /// Project directory holding the version file (defaults to the current directory)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Version file, relative to the project directory
    #[arg(long, global = true)]
    file: Option<String>,

    /// Config file (defaults to <dir>/baleen.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    #[command(subcommand)]
    command: VersionCommand,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprint!("{}", CliError::from_anyhow(e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    let config = match &cli.config {
        Some(path) => StoreConfig::load(path)?,
        None => StoreConfig::for_project(&root)?,
    };
    let config = match cli.file {
        Some(file) => config.with_file(file),
        None => config,
    };

    tracing::debug!(root = %root.display(), file = %config.file, "opening version store");
    let fs = TracedFilesystem::new(LocalFilesystem::new(root));
    let store = VersionStore::from_config(&fs, &config)?;

    let stdout = std::io::stdout();
    versions::handle(&store, cli.command, cli.output, &mut stdout.lock())
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Set up subscriber with env filter
    let filter = EnvFilter::try_from_env("BALEEN_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
