// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake executor adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::manifest::job_manifest;
use super::{ExecutorAdapter, ExecutorError};
use async_trait::async_trait;
use kj_core::{sanitize, JobSpec, JobStatus};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Recorded executor call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutorCall {
    Submit { name: String },
    Status { name: String },
    Delete { name: String },
}

/// Fake executor that keeps jobs in memory
#[derive(Clone, Default)]
pub struct FakeExecutorAdapter {
    jobs: Arc<Mutex<HashMap<String, JobStatus>>>,
    specs: Arc<Mutex<HashMap<String, JobSpec>>>,
    calls: Arc<Mutex<Vec<ExecutorCall>>>,
}

impl FakeExecutorAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ExecutorCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Spec submitted under `name`
    pub fn get_spec(&self, name: &str) -> Option<JobSpec> {
        self.specs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
            .cloned()
    }

    /// Overwrite the status reported for a job, simulating progress
    pub fn set_status(&self, mut status: JobStatus) {
        status.name = sanitize(&status.name);
        self.jobs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(status.name.clone(), status);
    }

    fn record(&self, call: ExecutorCall) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }
}

#[async_trait]
impl ExecutorAdapter for FakeExecutorAdapter {
    async fn submit(&self, spec: &JobSpec) -> Result<JobStatus, ExecutorError> {
        // same translation as a real executor, so manifest errors surface here too
        let job = job_manifest(spec)?;
        let name = job.metadata.name.unwrap_or_default();
        self.record(ExecutorCall::Submit { name: name.clone() });

        let mut jobs = self.jobs.lock().unwrap_or_else(|e| e.into_inner());
        if jobs.contains_key(&name) {
            return Err(ExecutorError::AlreadyExists(name));
        }

        let status = JobStatus::new(name.clone(), spec.completions().get());
        jobs.insert(name.clone(), status.clone());
        self.specs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name, spec.clone());

        Ok(status)
    }

    async fn status(&self, name: &str) -> Result<Option<JobStatus>, ExecutorError> {
        let name = sanitize(name);
        self.record(ExecutorCall::Status { name: name.clone() });

        let jobs = self.jobs.lock().unwrap_or_else(|e| e.into_inner());
        Ok(jobs.get(&name).cloned())
    }

    async fn delete(&self, name: &str) -> Result<JobStatus, ExecutorError> {
        let name = sanitize(name);
        self.record(ExecutorCall::Delete { name: name.clone() });

        self.specs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&name);
        self.jobs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&name)
            .ok_or(ExecutorError::NotFound(name))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
