//! Shared helpers for CLI specs

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

pub const VERSIONS_FILE: &str = ".baleen_versions";

/// A throwaway project directory
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root
    pub fn file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn dir_at(&self, rel: &str) {
        std::fs::create_dir_all(self.dir.path().join(rel)).unwrap();
    }

    /// Read a file relative to the project root
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.dir.path().join(rel).exists()
    }

    /// Command running `baleen` against this project
    pub fn baleen(&self) -> Baleen {
        let mut cmd = assert_cmd::Command::cargo_bin("baleen").unwrap();
        cmd.current_dir(self.dir.path());
        cmd.env_remove("BALEEN_LOG");
        cmd.env_remove("RUST_LOG");
        Baleen { cmd }
    }
}

pub struct Baleen {
    cmd: assert_cmd::Command,
}

impl Baleen {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(mut self) -> RunResult {
        let output = self.cmd.output().unwrap();
        let result = RunResult { output };
        assert!(
            result.output.status.success(),
            "expected success\nstdout: {}\nstderr: {}",
            result.stdout(),
            result.stderr()
        );
        result
    }

    pub fn fails(mut self) -> RunResult {
        let output = self.cmd.output().unwrap();
        let result = RunResult { output };
        assert!(
            !result.output.status.success(),
            "expected failure\nstdout: {}\nstderr: {}",
            result.stdout(),
            result.stderr()
        );
        result
    }
}

pub struct RunResult {
    output: Output,
}

impl RunResult {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(needle), "stdout missing {:?}:\n{}", needle, stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(needle), "stderr missing {:?}:\n{}", needle, stderr);
        self
    }
}
