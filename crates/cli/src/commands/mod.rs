// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod job;
pub mod presets;
pub mod submit;

use crate::error::KjError;
use kj_adapters::{KubeExecutor, TracedExecutorAdapter};
use kj_core::Config;

/// Connect to the configured cluster, scoped to `namespace`
pub async fn connect(
    config: &Config,
    namespace: &str,
) -> Result<TracedExecutorAdapter<KubeExecutor>, KjError> {
    let executor = KubeExecutor::connect(config.cluster_name.as_deref(), namespace)
        .await
        .map_err(KjError::executor)?;
    Ok(TracedExecutorAdapter::new(executor))
}

/// Parse a `KEY=VALUE` argument
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid key=value: no `=` found in `{s}`"))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
