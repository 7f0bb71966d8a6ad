// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::fs::{FilesystemAdapter, FsError, ResourceHandle, ResourceKind};

/// Wrapper that adds tracing to any FilesystemAdapter
#[derive(Clone)]
pub struct TracedFilesystem<F> {
    inner: F,
}

impl<F> TracedFilesystem<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: FilesystemAdapter> FilesystemAdapter for TracedFilesystem<F> {
    type Handle = TracedHandle<F::Handle>;

    fn exists(&self, path: &str) -> Result<bool, FsError> {
        let span = tracing::debug_span!("fs.exists", path);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.exists(path);
        let elapsed = start.elapsed();

        match &result {
            Ok(exists) => tracing::debug!(
                exists,
                elapsed_ms = elapsed.as_millis() as u64,
                "checked"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "exists check failed"
            ),
        }

        result
    }

    fn write_new(&self, path: &str, contents: &str) -> Result<bool, FsError> {
        let span = tracing::info_span!("fs.write_new", path);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.write_new(path, contents);
        let elapsed = start.elapsed();

        match &result {
            Ok(true) => tracing::info!(
                bytes = contents.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "created"
            ),
            Ok(false) => tracing::warn!("backend refused to create resource"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "create failed"
            ),
        }

        result
    }

    fn resolve(&self, path: &str) -> Result<Self::Handle, FsError> {
        let span = tracing::debug_span!("fs.resolve", path);
        let _guard = span.enter();

        match self.inner.resolve(path) {
            Ok(inner) => {
                tracing::debug!(kind = %inner.kind(), "resolved");
                Ok(TracedHandle { inner })
            }
            Err(e) => {
                tracing::error!(error = %e, "resolve failed");
                Err(e)
            }
        }
    }
}

/// Wrapper that adds tracing to any ResourceHandle
#[derive(Clone)]
pub struct TracedHandle<H> {
    inner: H,
}

impl<H: ResourceHandle> ResourceHandle for TracedHandle<H> {
    fn path(&self) -> &str {
        self.inner.path()
    }

    fn kind(&self) -> ResourceKind {
        self.inner.kind()
    }

    fn read_all(&self) -> Result<String, FsError> {
        let span = tracing::debug_span!("fs.read", path = self.inner.path());
        let _guard = span.enter();

        let result = self.inner.read_all();
        match &result {
            Ok(contents) => tracing::debug!(bytes = contents.len(), "read"),
            Err(e) => tracing::error!(error = %e, "read failed"),
        }

        result
    }

    fn overwrite(&self, contents: &str) -> Result<bool, FsError> {
        let span = tracing::info_span!("fs.overwrite", path = self.inner.path());
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.overwrite(contents);
        let elapsed = start.elapsed();

        match &result {
            Ok(true) => tracing::debug!(
                bytes = contents.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "written"
            ),
            // Surfaces as a store write failure
            Ok(false) => tracing::error!("backend refused write"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "write failed"
            ),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
