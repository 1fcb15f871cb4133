// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job executor adapters
//!
//! The core hands a finished [`JobSpec`] to an executor; translation to the
//! executor's native resource, connection handling and transport errors all
//! live behind this trait.

mod kubernetes;
mod manifest;

pub use kubernetes::KubeExecutor;
pub use manifest::{job_manifest, job_status, BACKOFF_LIMIT, JOB_LABEL};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ExecutorCall, FakeExecutorAdapter};

use async_trait::async_trait;
use kj_core::{JobSpec, JobStatus};
use thiserror::Error;

/// Errors from executor operations
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("failed to connect to executor: {0}")]
    Connection(String),
    #[error("job already exists: {0}")]
    AlreadyExists(String),
    #[error("job not found: {0}")]
    NotFound(String),
    #[error("invalid job name: `{0}`")]
    InvalidName(String),
    #[error("invalid job manifest: {0}")]
    Manifest(String),
    #[error("executor rejected request ({code}): {message}")]
    Api { code: u16, message: String },
    #[error("request failed: {0}")]
    Request(String),
}

/// Adapter for submitting and managing single-run batch jobs
#[async_trait]
pub trait ExecutorAdapter: Clone + Send + Sync + 'static {
    /// Create the job and return its initial status
    async fn submit(&self, spec: &JobSpec) -> Result<JobStatus, ExecutorError>;

    /// Current status, `None` if no job has this name
    async fn status(&self, name: &str) -> Result<Option<JobStatus>, ExecutorError>;

    /// Delete the job along with its pods
    async fn delete(&self, name: &str) -> Result<JobStatus, ExecutorError>;
}
