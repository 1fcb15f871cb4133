// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! This module provides enhanced error types that include:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use kj_adapters::ExecutorError;
use kj_core::SpecError;
use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct KjError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl KjError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for KjError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for KjError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Common error builders for typical failure scenarios.
impl KjError {
    /// Failure while turning the request into a job spec.
    pub fn spec(err: SpecError) -> Self {
        let layer = err.layer();
        let base = KjError::new(err.to_string()).with_context(format!("failed during {}", layer));
        let with_hints = match &err {
            SpecError::PresetNotFound { path, .. } => base
                .with_suggestion("List defined presets: kj presets view")
                .with_suggestion(format!("Add the preset to {}: kj presets edit", path.display())),
            SpecError::PresetParse { .. } => base
                .with_suggestion("Fix the document: kj presets edit")
                .with_suggestion("See every accepted key: kj presets template"),
            SpecError::SourceRead { path, .. } => base
                .with_suggestion(format!("Check that {} exists and is readable", path.display())),
            SpecError::NameInvalid { .. } => {
                base.with_suggestion("Rename the script so its name contains a letter or digit")
            }
            SpecError::SourceExtraction { .. } | SpecError::PresetIo { .. } => base,
        };
        with_hints.with_source(err)
    }

    /// Failure reported by the executor.
    pub fn executor(err: ExecutorError) -> Self {
        let base = KjError::new(err.to_string());
        let with_hints = match &err {
            ExecutorError::Connection(_) => base
                .with_context("No in-cluster credentials and no usable kubeconfig")
                .with_suggestion("Check the current context: kubectl config current-context")
                .with_suggestion("Select a kubeconfig context with KJ_CLUSTER_NAME"),
            ExecutorError::AlreadyExists(_) => {
                base.with_suggestion("Submit again to draw a fresh name suffix")
            }
            ExecutorError::NotFound(name) => base
                .with_context("The job may have finished and been cleaned up")
                .with_suggestion(format!("Check the job: kj status {}", name)),
            _ => base,
        };
        with_hints.with_source(err)
    }

    /// `$EDITOR` is needed to edit the preset document.
    pub fn editor_unset(path: &Path) -> Self {
        KjError::new("EDITOR is not set")
            .with_context(format!("Presets live in {}", path.display()))
            .with_suggestion("Set an editor: export EDITOR=vi")
            .with_suggestion(format!("Edit the file directly: {}", path.display()))
    }
}
