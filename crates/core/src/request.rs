// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One submission's worth of user intent

use crate::builder::{build, JobSpecBuilder, Overrides};
use crate::error::SpecError;
use crate::id::IdGen;
use crate::preset::PresetStore;
use crate::source::{FunctionSource, Kwargs};
use crate::spec::JobSpec;
use std::path::PathBuf;

/// What the job runs
#[derive(Debug, Clone)]
pub enum JobSource {
    Script(PathBuf),
    Function { func: FunctionSource, kwargs: Kwargs },
}

/// Source, optional preset name and explicit overrides
#[derive(Debug, Clone)]
pub struct JobRequest {
    pub source: JobSource,
    pub preset: Option<String>,
    pub overrides: Overrides,
}

impl JobRequest {
    pub fn script(path: impl Into<PathBuf>) -> Self {
        Self {
            source: JobSource::Script(path.into()),
            preset: None,
            overrides: Overrides::default(),
        }
    }

    pub fn function(func: FunctionSource, kwargs: Kwargs) -> Self {
        Self {
            source: JobSource::Function { func, kwargs },
            preset: None,
            overrides: Overrides::default(),
        }
    }

    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Resolve into a complete spec.
    ///
    /// The preset is resolved before the source is packaged, so a bad preset
    /// name fails without touching the script.
    pub fn resolve<G: IdGen>(
        &self,
        builder: &JobSpecBuilder<G>,
        presets: &PresetStore,
    ) -> Result<JobSpec, SpecError> {
        let preset = self
            .preset
            .as_deref()
            .map(|name| presets.resolve(name))
            .transpose()?;

        let base = match &self.source {
            JobSource::Script(path) => builder.script(path)?,
            JobSource::Function { func, kwargs } => builder.function(func, kwargs)?,
        };

        let spec = build(base, preset.as_ref(), &self.overrides);
        tracing::info!(
            name = spec.name(),
            image = %spec.image,
            preset = self.preset.as_deref().unwrap_or("-"),
            "job spec resolved"
        );
        Ok(spec)
    }
}
