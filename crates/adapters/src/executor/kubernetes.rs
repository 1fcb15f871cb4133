// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Kubernetes executor backed by the `batch/v1` Job API

use super::manifest::{job_manifest, job_status};
use super::{ExecutorAdapter, ExecutorError};
use async_trait::async_trait;
use k8s_openapi::api::batch::v1::Job;
use kj_core::{sanitize, JobSpec, JobStatus};
use kube::api::{Api, DeleteParams, PostParams, PropagationPolicy};
use kube::config::KubeConfigOptions;
use kube::{Client, Config};

/// Executor that creates namespaced Jobs on a Kubernetes cluster
#[derive(Clone)]
pub struct KubeExecutor {
    jobs: Api<Job>,
    namespace: String,
}

impl KubeExecutor {
    pub fn new(client: Client, namespace: &str) -> Self {
        Self {
            jobs: Api::namespaced(client, namespace),
            namespace: namespace.to_string(),
        }
    }

    /// Connect with in-cluster credentials, falling back to the kubeconfig.
    ///
    /// `context` selects a kubeconfig context; `None` uses the current one.
    pub async fn connect(context: Option<&str>, namespace: &str) -> Result<Self, ExecutorError> {
        let config = match Config::incluster() {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!(error = %e, "not running in-cluster, loading kubeconfig");
                let options = KubeConfigOptions {
                    context: context.map(str::to_string),
                    ..Default::default()
                };
                Config::from_kubeconfig(&options)
                    .await
                    .map_err(|e| ExecutorError::Connection(e.to_string()))?
            }
        };
        let client = Client::try_from(config).map_err(|e| ExecutorError::Connection(e.to_string()))?;
        Ok(Self::new(client, namespace))
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

#[async_trait]
impl ExecutorAdapter for KubeExecutor {
    async fn submit(&self, spec: &JobSpec) -> Result<JobStatus, ExecutorError> {
        let job = job_manifest(spec)?;
        let name = job.metadata.name.clone().unwrap_or_default();

        let created = self
            .jobs
            .create(&PostParams::default(), &job)
            .await
            .map_err(|e| api_error(&name, e))?;

        // the create response predates any controller update; prefer a fresh read
        match self.status(&name).await? {
            Some(status) => Ok(status),
            None => Ok(job_status(&created)),
        }
    }

    async fn status(&self, name: &str) -> Result<Option<JobStatus>, ExecutorError> {
        let name = sanitize(name);
        status_result(&name, self.jobs.get_status(&name).await)
    }

    async fn delete(&self, name: &str) -> Result<JobStatus, ExecutorError> {
        let name = sanitize(name);
        let params = DeleteParams {
            propagation_policy: Some(PropagationPolicy::Foreground),
            grace_period_seconds: Some(0),
            ..Default::default()
        };

        let deleted = self
            .jobs
            .delete(&name, &params)
            .await
            .map_err(|e| api_error(&name, e))?;

        Ok(deleted
            .left()
            .map(|job| job_status(&job))
            .unwrap_or_else(|| JobStatus::new(name, 0)))
    }
}

/// A missing job is not an error when asking for status
fn status_result(
    name: &str,
    result: Result<Job, kube::Error>,
) -> Result<Option<JobStatus>, ExecutorError> {
    match result {
        Ok(job) => Ok(Some(job_status(&job))),
        Err(kube::Error::Api(ae)) if ae.code == 404 => Ok(None),
        Err(e) => Err(api_error(name, e)),
    }
}

fn api_error(name: &str, err: kube::Error) -> ExecutorError {
    match err {
        kube::Error::Api(ae) if ae.code == 409 => ExecutorError::AlreadyExists(name.to_string()),
        kube::Error::Api(ae) if ae.code == 404 => ExecutorError::NotFound(name.to_string()),
        kube::Error::Api(ae) => ExecutorError::Api {
            code: ae.code,
            message: ae.message,
        },
        other => ExecutorError::Request(other.to_string()),
    }
}

#[cfg(test)]
#[path = "kubernetes_tests.rs"]
mod tests;
