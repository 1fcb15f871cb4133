// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Named configuration overlays
//!
//! Presets live in a user-editable YAML document mapping preset names to
//! sparse records. Every field is optional; only fields that are present
//! overwrite the job they are applied to.

use crate::error::SpecError;
use crate::spec::{JobSpec, Resources, Toleration};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

/// Partial overlay for a [`JobSpec`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    pub image: Option<String>,
    #[serde(rename = "ttlSecondsAfterFinished", alias = "ttl_seconds_after_finished")]
    pub ttl_seconds_after_finished: Option<u32>,
    #[serde(default, deserialize_with = "scalar_map")]
    pub env: Option<BTreeMap<String, String>>,
    pub parallelism: Option<NonZeroU32>,
    #[serde(
        rename = "nodeSelector",
        alias = "node_selector",
        default,
        deserialize_with = "scalar_map"
    )]
    pub node_selector: Option<BTreeMap<String, String>>,
    #[serde(default, deserialize_with = "scalar_sections")]
    pub resources: Option<Resources>,
    pub tolerations: Option<Vec<Toleration>>,
}

impl Preset {
    /// Overwrite every field of `spec` that this preset sets.
    pub fn apply_to(&self, spec: &mut JobSpec) {
        if let Some(image) = &self.image {
            spec.image = image.clone();
        }
        if let Some(ttl) = self.ttl_seconds_after_finished {
            spec.ttl_seconds_after_finished = ttl;
        }
        if let Some(env) = &self.env {
            spec.env_vars = env.clone();
        }
        if let Some(parallelism) = self.parallelism {
            spec.parallelism = parallelism;
        }
        if let Some(node_selector) = &self.node_selector {
            spec.node_selector = node_selector.clone();
        }
        if let Some(resources) = &self.resources {
            spec.resources = resources.clone();
        }
        if let Some(tolerations) = &self.tolerations {
            spec.tolerations = tolerations.clone();
        }
    }

    /// YAML skeleton listing every preset key
    pub fn template() -> String {
        serde_yaml::to_string(&Preset::default()).unwrap_or_default()
    }
}

/// Parsed preset document
pub type PresetDocument = BTreeMap<String, Preset>;

/// Preset document on disk
#[derive(Debug, Clone)]
pub struct PresetStore {
    path: PathBuf,
}

impl PresetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the directory and an empty document if absent.
    pub fn ensure_exists(&self) -> Result<(), SpecError> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        std::fs::write(&self.path, "").map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), "created empty preset document");
        Ok(())
    }

    /// Raw document text, `None` when the document does not exist.
    pub fn list_raw(&self) -> Result<Option<String>, SpecError> {
        if !self.path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|e| self.io_error(e))
    }

    /// Parse the whole document. A missing or empty document has no presets.
    pub fn load(&self) -> Result<PresetDocument, SpecError> {
        match self.list_raw()? {
            Some(raw) => parse_document(&raw).map_err(|message| SpecError::PresetParse {
                path: self.path.clone(),
                message,
            }),
            None => Ok(PresetDocument::new()),
        }
    }

    /// Look up a preset by name.
    pub fn resolve(&self, name: &str) -> Result<Preset, SpecError> {
        let mut document = self.load()?;
        document
            .remove(name)
            .ok_or_else(|| SpecError::PresetNotFound {
                name: name.to_string(),
                path: self.path.clone(),
            })
    }

    fn io_error(&self, source: std::io::Error) -> SpecError {
        SpecError::PresetIo {
            path: self.path.clone(),
            source,
        }
    }
}

/// Numbers and booleans are written unquoted in hand-edited documents
/// (`cpu: 1`, `DEBUG: true`); keep them as their literal text.
fn scalar_text<E: serde::de::Error>(key: &str, value: serde_yaml::Value) -> Result<String, E> {
    match value {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        _ => Err(E::custom(format!(
            "`{}` must be a string, number or boolean",
            key
        ))),
    }
}

fn scalar_map<'de, D>(deserializer: D) -> Result<Option<BTreeMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, serde_yaml::Value>> = Option::deserialize(deserializer)?;
    raw.map(|map| {
        map.into_iter()
            .map(|(key, value)| scalar_text(&key, value).map(|text| (key, text)))
            .collect()
    })
    .transpose()
}

fn scalar_sections<'de, D>(deserializer: D) -> Result<Option<Resources>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, BTreeMap<String, serde_yaml::Value>>> =
        Option::deserialize(deserializer)?;
    raw.map(|sections| {
        sections
            .into_iter()
            .map(|(section, values)| -> Result<_, D::Error> {
                let values = values
                    .into_iter()
                    .map(|(key, value)| scalar_text(&key, value).map(|text| (key, text)))
                    .collect::<Result<BTreeMap<String, String>, D::Error>>()?;
                Ok((section, values))
            })
            .collect()
    })
    .transpose()
}

fn parse_document(raw: &str) -> Result<PresetDocument, String> {
    if raw.trim().is_empty() {
        return Ok(PresetDocument::new());
    }
    let value: serde_yaml::Value = serde_yaml::from_str(raw).map_err(|e| e.to_string())?;
    if value.is_null() {
        return Ok(PresetDocument::new());
    }
    serde_yaml::from_value(value).map_err(|e| e.to_string())
}

#[cfg(test)]
#[path = "preset_tests.rs"]
mod tests;
