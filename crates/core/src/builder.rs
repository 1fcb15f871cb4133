// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job spec construction and overlay
//!
//! Precedence is fixed: library defaults < preset < explicit overrides.
//! Layers only ever set fields; nothing clears a value set by an earlier layer.

use crate::error::SpecError;
use crate::id::IdGen;
use crate::name;
use crate::preset::Preset;
use crate::source::{self, FunctionSource, Kwargs};
use crate::spec::JobSpec;
use std::collections::BTreeMap;
use std::path::Path;

/// Explicit per-invocation overrides; these always win over a preset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub image: Option<String>,
    /// Replaces the preset's environment wholesale
    pub env_vars: Option<BTreeMap<String, String>>,
}

/// Overlay `preset` and then `overrides` onto `base`.
pub fn build(mut base: JobSpec, preset: Option<&Preset>, overrides: &Overrides) -> JobSpec {
    if let Some(preset) = preset {
        preset.apply_to(&mut base);
    }
    if let Some(image) = &overrides.image {
        base.image = image.clone();
    }
    if let Some(env_vars) = &overrides.env_vars {
        base.env_vars = env_vars.clone();
    }
    base
}

/// Produces base specs: sanitized unique name, default image and bootstrap command
#[derive(Clone)]
pub struct JobSpecBuilder<G: IdGen> {
    default_image: String,
    id_gen: G,
}

impl<G: IdGen> JobSpecBuilder<G> {
    pub fn new(default_image: impl Into<String>, id_gen: G) -> Self {
        Self {
            default_image: default_image.into(),
            id_gen,
        }
    }

    /// Base spec running a script file, named after the file stem
    pub fn script(&self, path: &Path) -> Result<JobSpec, SpecError> {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = self.job_name(&stem)?;
        let source = source::package_script(path)?;
        Ok(self.base(name, &source))
    }

    /// Base spec running a single function called with `kwargs`
    pub fn function(&self, func: &FunctionSource, kwargs: &Kwargs) -> Result<JobSpec, SpecError> {
        let name = self.job_name(func.name())?;
        let source = source::package_function(func, kwargs)?;
        Ok(self.base(name, &source))
    }

    /// `<sanitized base>-<suffix>`
    pub fn job_name(&self, base: &str) -> Result<String, SpecError> {
        name::with_suffix(base, &self.id_gen.next())
    }

    fn base(&self, name: String, source: &str) -> JobSpec {
        tracing::debug!(name = %name, source_len = source.len(), "packaged job source");
        JobSpec::new(
            name,
            self.default_image.clone(),
            source::bootstrap_command(source),
        )
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
