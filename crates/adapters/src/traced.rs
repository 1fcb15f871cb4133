// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::executor::{ExecutorAdapter, ExecutorError};
use async_trait::async_trait;
use kj_core::{sanitize, JobSpec, JobStatus};
use tracing::Instrument;

/// Wrapper that adds tracing to any ExecutorAdapter
#[derive(Clone)]
pub struct TracedExecutorAdapter<E> {
    inner: E,
}

impl<E> TracedExecutorAdapter<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<E: ExecutorAdapter> ExecutorAdapter for TracedExecutorAdapter<E> {
    async fn submit(&self, spec: &JobSpec) -> Result<JobStatus, ExecutorError> {
        let span = tracing::info_span!("executor.submit", name = spec.name());

        async move {
            tracing::info!(
                image = %spec.image,
                parallelism = spec.parallelism.get(),
                env_count = spec.env_vars.len(),
                "submitting"
            );

            // Precondition: name must survive sanitization
            let sanitized = sanitize(spec.name());
            if sanitized.is_empty() {
                tracing::error!("job name is empty");
                return Err(ExecutorError::InvalidName(spec.name().to_string()));
            }
            if sanitized != spec.name() {
                tracing::warn!(sanitized = %sanitized, "job name was not sanitized");
            }

            let start = std::time::Instant::now();
            let result = self.inner.submit(spec).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(status) => tracing::info!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    status = %status,
                    "job created"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "submit failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }

    async fn status(&self, name: &str) -> Result<Option<JobStatus>, ExecutorError> {
        let span = tracing::info_span!("executor.status", name);

        async move {
            if sanitize(name).is_empty() {
                tracing::error!("job name is empty");
                return Err(ExecutorError::InvalidName(name.to_string()));
            }

            let result = self.inner.status(name).await;
            match &result {
                Ok(Some(status)) => tracing::debug!(phase = %status.phase(), "status read"),
                // absent is an answer, not a failure
                Ok(None) => tracing::debug!("job not found"),
                Err(e) => tracing::error!(error = %e, "status failed"),
            }

            result
        }
        .instrument(span)
        .await
    }

    async fn delete(&self, name: &str) -> Result<JobStatus, ExecutorError> {
        let span = tracing::info_span!("executor.delete", name);

        async move {
            if sanitize(name).is_empty() {
                tracing::error!("job name is empty");
                return Err(ExecutorError::InvalidName(name.to_string()));
            }

            let start = std::time::Instant::now();
            let result = self.inner.delete(name).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(status) => tracing::info!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    status = %status,
                    "job deleted"
                ),
                Err(e) => tracing::warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "delete failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
