// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide configuration
//!
//! Read from `KJ_`-prefixed environment variables:
//! - `KJ_CLUSTER_NAME` - kubeconfig context used outside a cluster
//! - `KJ_DEFAULT_IMAGE` - image used when neither preset nor flag sets one
//! - `KJ_PRESETS_PATH` - preset document location

use std::path::PathBuf;

pub const ENV_PREFIX: &str = "KJ_";
pub const DEFAULT_IMAGE: &str = "python:3.7.13-slim-buster";
pub const DEFAULT_NAMESPACE: &str = "default";
const NAMESPACE_ENV: &str = "KUBERNETES_NAMESPACE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub cluster_name: Option<String>,
    pub default_image: String,
    pub presets_path: PathBuf,
    /// Namespace used when no flag names one
    pub namespace: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let prefixed = |name: &str| var(&format!("{}{}", ENV_PREFIX, name));

        Self {
            cluster_name: prefixed("CLUSTER_NAME"),
            default_image: prefixed("DEFAULT_IMAGE").unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
            presets_path: prefixed("PRESETS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(default_presets_path),
            namespace: var(NAMESPACE_ENV).unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
        }
    }

    /// Explicit namespace if given, otherwise the configured one
    pub fn namespace_or(&self, explicit: Option<&str>) -> String {
        explicit
            .filter(|ns| !ns.is_empty())
            .unwrap_or(&self.namespace)
            .to_string()
    }
}

/// `<home>/.config/kj/presets.yaml`, relative to the working directory when home is unknown
pub fn default_presets_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".config")
        .join("kj")
        .join("presets.yaml")
}
