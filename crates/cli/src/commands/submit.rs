// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `kj submit <path>` - Run a Python script as a job

use super::{connect, parse_key_val};
use crate::error::KjError;
use anyhow::Result;
use clap::Args;
use kj_adapters::{job_manifest, ExecutorAdapter};
use kj_core::{Config, JobRequest, JobSpec, JobSpecBuilder, JobStatus, Overrides, PresetStore, UuidIdGen};
use std::path::PathBuf;

#[derive(Args)]
pub struct SubmitArgs {
    /// Python script to run
    pub path: PathBuf,

    /// Namespace to create the job in
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Container image, overriding the preset and the default
    #[arg(long)]
    pub image: Option<String>,

    /// Environment variables (KEY=VALUE), replacing any preset env
    #[arg(short = 'e', long = "env", value_parser = parse_key_val)]
    pub env: Vec<(String, String)>,

    /// Named preset to apply
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Print the job manifest instead of creating it
    #[arg(long)]
    pub dryrun: bool,
}

impl SubmitArgs {
    fn request(&self) -> JobRequest {
        let overrides = Overrides {
            image: self.image.clone(),
            env_vars: (!self.env.is_empty()).then(|| self.env.iter().cloned().collect()),
        };
        let request = JobRequest::script(&self.path).with_overrides(overrides);
        match &self.preset {
            Some(preset) => request.with_preset(preset),
            None => request,
        }
    }
}

pub async fn handle(args: SubmitArgs, config: &Config) -> Result<()> {
    let builder = JobSpecBuilder::new(config.default_image.clone(), UuidIdGen);
    let store = PresetStore::new(&config.presets_path);
    let spec = args
        .request()
        .resolve(&builder, &store)
        .map_err(KjError::spec)?;

    let namespace = config.namespace_or(args.namespace.as_deref());
    if args.dryrun {
        print!("{}", manifest_yaml(&spec, &namespace)?);
        return Ok(());
    }

    let executor = connect(config, &namespace).await?;
    let status = submit(&executor, &spec).await?;
    println!("Submitted: {}", status.name);
    println!("  Namespace: {}", namespace);
    println!("  Image: {}", spec.image);
    println!("  Status: {}", status.phase());
    Ok(())
}

/// Job manifest as YAML, placed in `namespace`
pub fn manifest_yaml(spec: &JobSpec, namespace: &str) -> Result<String> {
    let mut job = job_manifest(spec).map_err(KjError::executor)?;
    job.metadata.namespace = Some(namespace.to_string());
    Ok(serde_yaml::to_string(&job)?)
}

pub async fn submit<E: ExecutorAdapter>(executor: &E, spec: &JobSpec) -> Result<JobStatus, KjError> {
    executor.submit(spec).await.map_err(KjError::executor)
}

#[cfg(test)]
#[path = "submit_tests.rs"]
mod tests;
