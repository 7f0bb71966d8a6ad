// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Version store configuration
//!
//! Read from an optional `baleen.toml`:
//!
//! ```toml
//! [storage]
//! file = ".baleen_versions"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name used when the caller does not pick one
pub const DEFAULT_FILENAME: &str = ".baleen_versions";

/// Name of the project configuration file
pub const CONFIG_FILENAME: &str = "baleen.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Where the version store keeps its file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Path of the version file, relative to the filesystem root
    #[serde(default = "default_file")]
    pub file: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    storage: StoreConfig,
}

fn default_file() -> String {
    DEFAULT_FILENAME.to_string()
}

impl StoreConfig {
    /// Parse the contents of a config file
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(file.storage)
    }

    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::parse(&content, path)
    }

    /// Load `baleen.toml` from a project directory
    pub fn for_project(root: &Path) -> Result<Self, ConfigError> {
        Self::load(&root.join(CONFIG_FILENAME))
    }

    /// Replace the file name, keeping everything else
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
