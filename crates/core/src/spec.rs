// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical job description

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::num::NonZeroU32;

/// Retention window applied when nothing overrides it
pub const DEFAULT_TTL_SECONDS: u32 = 10;

/// Resource requests/limits keyed by section (`requests`, `limits`)
pub type Resources = BTreeMap<String, BTreeMap<String, String>>;

/// Scheduling toleration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Toleration {
    pub key: String,
    pub operator: String,
    pub effect: String,
}

/// Fully resolved description of one batch workload submission.
///
/// `name` and `command` are fixed at construction: the name is sanitized and
/// the command is always the bootstrap invocation produced by packaging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSpec {
    name: String,
    pub image: String,
    pub ttl_seconds_after_finished: u32,
    pub env_vars: BTreeMap<String, String>,
    /// Concurrent replicas; also the number of required completions
    pub parallelism: NonZeroU32,
    pub node_selector: BTreeMap<String, String>,
    pub resources: Resources,
    pub tolerations: Vec<Toleration>,
    command: Vec<String>,
}

impl JobSpec {
    /// Base spec with library defaults for everything but name, image and command
    pub(crate) fn new(name: String, image: String, command: Vec<String>) -> Self {
        Self {
            name,
            image,
            ttl_seconds_after_finished: DEFAULT_TTL_SECONDS,
            env_vars: BTreeMap::new(),
            parallelism: NonZeroU32::MIN,
            node_selector: BTreeMap::new(),
            resources: Resources::new(),
            tolerations: Vec::new(),
            command,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn command(&self) -> &[String] {
        &self.command
    }

    /// Required successful completions
    pub fn completions(&self) -> NonZeroU32 {
        self.parallelism
    }
}
