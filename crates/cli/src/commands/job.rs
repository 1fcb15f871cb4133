// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `kj status` / `kj delete` - Inspect and remove submitted jobs

use super::connect;
use crate::error::KjError;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use kj_adapters::ExecutorAdapter;
use kj_core::{Config, JobStatus};

#[derive(Args)]
pub struct StatusArgs {
    /// Job name
    pub name: String,

    /// Namespace the job lives in
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Job name
    pub name: String,

    /// Namespace the job lives in
    #[arg(short, long)]
    pub namespace: Option<String>,
}

pub async fn status(args: StatusArgs, config: &Config) -> Result<()> {
    let namespace = config.namespace_or(args.namespace.as_deref());
    let executor = connect(config, &namespace).await?;

    match lookup(&executor, &args.name).await? {
        Some(status) => output::print(&status, args.output)?,
        None => println!("job not found: {}", args.name),
    }
    Ok(())
}

pub async fn delete(args: DeleteArgs, config: &Config) -> Result<()> {
    let namespace = config.namespace_or(args.namespace.as_deref());
    let executor = connect(config, &namespace).await?;

    let status = remove(&executor, &args.name).await?;
    println!("Deleted: {}", status.name);
    Ok(())
}

pub async fn lookup<E: ExecutorAdapter>(
    executor: &E,
    name: &str,
) -> Result<Option<JobStatus>, KjError> {
    executor.status(name).await.map_err(KjError::executor)
}

pub async fn remove<E: ExecutorAdapter>(executor: &E, name: &str) -> Result<JobStatus, KjError> {
    executor.delete(name).await.map_err(KjError::executor)
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
