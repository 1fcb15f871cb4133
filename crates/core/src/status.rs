// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Executor-agnostic job status readback

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse lifecycle position derived from pod counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobPhase {
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl fmt::Display for JobPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JobPhase::Pending => "pending",
            JobPhase::Running => "running",
            JobPhase::Succeeded => "succeeded",
            JobPhase::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// Status of a submitted job as reported by the executor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
    pub name: String,
    pub active: u32,
    pub succeeded: u32,
    pub failed: u32,
    /// Successful completions the job needs
    pub completions: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<DateTime<Utc>>,
}

impl JobStatus {
    pub fn new(name: impl Into<String>, completions: u32) -> Self {
        Self {
            name: name.into(),
            completions,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> JobPhase {
        let all_succeeded = self.completions > 0 && self.succeeded >= self.completions;
        if self.completion_time.is_some() || all_succeeded {
            JobPhase::Succeeded
        } else if self.active > 0 {
            JobPhase::Running
        } else if self.failed > 0 {
            JobPhase::Failed
        } else {
            JobPhase::Pending
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (active: {}, succeeded: {}/{}, failed: {})",
            self.name,
            self.phase(),
            self.active,
            self.succeeded,
            self.completions,
            self.failed
        )?;
        if let Some(start) = self.start_time {
            write!(f, " started {}", start.to_rfc3339())?;
        }
        if let Some(done) = self.completion_time {
            write!(f, " completed {}", done.to_rfc3339())?;
        }
        Ok(())
    }
}
