// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! This module provides enhanced error types that include:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use baleen_storage::StoreError;
use std::fmt;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl CliError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Build a displayable error from whatever a command returned
    pub fn from_anyhow(err: anyhow::Error) -> Self {
        match err.downcast_ref::<StoreError>() {
            Some(store_err) => Self::from_store(store_err),
            None => Self::new(format!("{:#}", err)),
        }
    }

    fn from_store(err: &StoreError) -> Self {
        let base = Self::new(err.to_string());
        let base = match std::error::Error::source(err) {
            Some(source) => base.with_context(source.to_string()),
            None => base,
        };

        match err {
            StoreError::InvalidResourceType { .. } => base
                .with_suggestion("Move the existing entry out of the way")
                .with_suggestion("Point at another file: baleen --file <path> ..."),
            StoreError::WriteFailure { source: None, .. } => base
                .with_context("The storage backend refused the write")
                .with_suggestion("Check permissions and free space in the project directory"),
            StoreError::WriteFailure { .. } => base
                .with_suggestion("Check permissions and free space in the project directory"),
            StoreError::ReadFailure { .. } => {
                base.with_suggestion("Check that the version file is readable UTF-8 text")
            }
            StoreError::InvalidVersionId(_) => base
                .with_suggestion("Version ids are single lines with no surrounding whitespace"),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;
    use baleen_adapters::{FsError, ResourceKind};

    #[test]
    fn test_error_display() {
        let err = CliError::new("Something went wrong")
            .with_context("First context")
            .with_context("Second context")
            .with_suggestion("Try this")
            .with_suggestion("Or this");

        let output = format!("{}", err);
        assert!(output.contains("error: Something went wrong"));
        assert!(output.contains("-> First context"));
        assert!(output.contains("-> Second context"));
        assert!(output.contains("1. Try this"));
        assert!(output.contains("2. Or this"));
    }

    #[test]
    fn test_invalid_resource_type_error() {
        let err = CliError::from_anyhow(
            StoreError::InvalidResourceType {
                path: ".baleen_versions".to_string(),
                kind: ResourceKind::Dir,
            }
            .into(),
        );
        let output = format!("{}", err);
        assert!(output.contains(
            "error: expected path \".baleen_versions\" to be a file but it is a \"dir\""
        ));
        assert!(output.contains("--file"));
    }

    #[test]
    fn test_write_failure_shows_source() {
        let err = CliError::from_anyhow(
            StoreError::WriteFailure {
                path: "versions".to_string(),
                source: Some(FsError::OutsideRoot("../versions".to_string())),
            }
            .into(),
        );
        let output = format!("{}", err);
        assert!(output.contains("could not write to file \"versions\""));
        assert!(output.contains("-> path escapes filesystem root: ../versions"));
    }

    #[test]
    fn test_other_errors_keep_chain() {
        let err = CliError::from_anyhow(anyhow::anyhow!("inner").context("outer"));
        assert_eq!(err.message, "outer: inner");
    }
}
