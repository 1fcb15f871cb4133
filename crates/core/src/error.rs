// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Construction-time errors
//!
//! Every variant aborts spec-building before the executor is contacted.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning user intent into a [`crate::JobSpec`]
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("failed to read script {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to extract source of function `{function}`: {reason}")]
    SourceExtraction { function: String, reason: String },
    #[error("preset `{name}` not found in {}", path.display())]
    PresetNotFound { name: String, path: PathBuf },
    #[error("failed to parse presets {}: {message}", path.display())]
    PresetParse { path: PathBuf, message: String },
    #[error("failed to access presets {}: {source}", path.display())]
    PresetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("`{raw}` does not produce a valid job name")]
    NameInvalid { raw: String },
}

impl SpecError {
    /// Which construction layer failed
    pub fn layer(&self) -> &'static str {
        match self {
            SpecError::SourceRead { .. } => "script read",
            SpecError::SourceExtraction { .. } => "function extraction",
            SpecError::PresetNotFound { .. }
            | SpecError::PresetParse { .. }
            | SpecError::PresetIo { .. } => "preset resolution",
            SpecError::NameInvalid { .. } => "name validation",
        }
    }
}
