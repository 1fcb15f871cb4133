// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Translation between [`JobSpec`] and the `batch/v1` Job resource

use super::ExecutorError;
use k8s_openapi::api::batch::v1::{Job, JobSpec as BatchJobSpec};
use k8s_openapi::api::core::v1::{
    Container, EnvVar, PodSpec, PodTemplateSpec, ResourceRequirements,
    Toleration as PodToleration,
};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kj_core::{sanitize, JobSpec, JobStatus, Resources};
use std::collections::BTreeMap;

/// Pod retries before the job is marked failed
pub const BACKOFF_LIMIT: i32 = 2;

/// Pod template label carrying the job name
pub const JOB_LABEL: &str = "job";

/// Build the Job resource for `spec`.
///
/// The name is sanitized again so a spec assembled by hand is still legal.
pub fn job_manifest(spec: &JobSpec) -> Result<Job, ExecutorError> {
    let name = sanitize(spec.name());
    if name.is_empty() {
        return Err(ExecutorError::Manifest("job name is empty".to_string()));
    }

    let parallelism = to_i32("parallelism", spec.parallelism.get())?;
    let ttl = to_i32("ttlSecondsAfterFinished", spec.ttl_seconds_after_finished)?;

    let container = Container {
        name: name.clone(),
        image: Some(spec.image.clone()),
        command: Some(spec.command().to_vec()),
        image_pull_policy: Some("Always".to_string()),
        env: Some(
            spec.env_vars
                .iter()
                .map(|(key, value)| EnvVar {
                    name: key.clone(),
                    value: Some(value.clone()),
                    ..Default::default()
                })
                .collect(),
        ),
        resources: resource_requirements(&spec.resources)?,
        ..Default::default()
    };

    let tolerations = spec
        .tolerations
        .iter()
        .map(|t| PodToleration {
            key: Some(t.key.clone()),
            operator: Some(t.operator.clone()),
            effect: Some(t.effect.clone()),
            ..Default::default()
        })
        .collect();

    let template = PodTemplateSpec {
        metadata: Some(ObjectMeta {
            labels: Some(BTreeMap::from([(JOB_LABEL.to_string(), name.clone())])),
            ..Default::default()
        }),
        spec: Some(PodSpec {
            restart_policy: Some("Never".to_string()),
            containers: vec![container],
            tolerations: Some(tolerations),
            node_selector: (!spec.node_selector.is_empty()).then(|| spec.node_selector.clone()),
            ..Default::default()
        }),
    };

    Ok(Job {
        metadata: ObjectMeta {
            name: Some(name),
            ..Default::default()
        },
        spec: Some(BatchJobSpec {
            template,
            backoff_limit: Some(BACKOFF_LIMIT),
            ttl_seconds_after_finished: Some(ttl),
            parallelism: Some(parallelism),
            completions: Some(parallelism),
            ..Default::default()
        }),
        ..Default::default()
    })
}

/// Read the executor-agnostic status out of a Job resource
pub fn job_status(job: &Job) -> JobStatus {
    let name = job.metadata.name.clone().unwrap_or_default();
    let completions = job
        .spec
        .as_ref()
        .and_then(|s| s.completions)
        .map(count)
        .unwrap_or(1);

    let mut status = JobStatus::new(name, completions);
    if let Some(observed) = &job.status {
        status.active = observed.active.map(count).unwrap_or(0);
        status.succeeded = observed.succeeded.map(count).unwrap_or(0);
        status.failed = observed.failed.map(count).unwrap_or(0);
        status.start_time = observed.start_time.as_ref().map(|t| t.0);
        status.completion_time = observed.completion_time.as_ref().map(|t| t.0);
    }
    status
}

fn resource_requirements(
    resources: &Resources,
) -> Result<Option<ResourceRequirements>, ExecutorError> {
    if resources.is_empty() {
        return Ok(None);
    }

    let mut requirements = ResourceRequirements::default();
    for (section, values) in resources {
        let quantities: BTreeMap<String, Quantity> = values
            .iter()
            .map(|(k, v)| (k.clone(), Quantity(v.clone())))
            .collect();
        match section.as_str() {
            "requests" => requirements.requests = Some(quantities),
            "limits" => requirements.limits = Some(quantities),
            other => {
                return Err(ExecutorError::Manifest(format!(
                    "unsupported resources section `{}` (expected `requests` or `limits`)",
                    other
                )))
            }
        }
    }
    Ok(Some(requirements))
}

fn to_i32(field: &str, value: u32) -> Result<i32, ExecutorError> {
    i32::try_from(value)
        .map_err(|_| ExecutorError::Manifest(format!("{} out of range: {}", field, value)))
}

fn count(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
