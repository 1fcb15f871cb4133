// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Preset document commands

use crate::error::KjError;
use anyhow::{bail, Result};
use clap::Subcommand;
use kj_core::{Config, Preset, PresetStore};
use std::process::Command;

#[derive(Subcommand)]
pub enum PresetsCommand {
    /// Open the preset document in $EDITOR, creating it if needed
    Edit,
    /// Print the preset document
    View,
    /// Print a preset with every accepted key
    Template,
}

pub fn handle(command: PresetsCommand, config: &Config) -> Result<()> {
    let store = PresetStore::new(&config.presets_path);
    match command {
        PresetsCommand::Edit => edit(&store, std::env::var("EDITOR").ok()),
        PresetsCommand::View => {
            if let Some(raw) = store.list_raw().map_err(KjError::spec)? {
                print!("{}", raw);
            }
            Ok(())
        }
        PresetsCommand::Template => {
            print!("{}", Preset::template());
            Ok(())
        }
    }
}

/// Edit the document with `editor`, then check that it still parses
fn edit(store: &PresetStore, editor: Option<String>) -> Result<()> {
    store.ensure_exists().map_err(KjError::spec)?;

    let editor = editor.filter(|e| !e.trim().is_empty());
    let Some(editor) = editor else {
        return Err(KjError::editor_unset(store.path()).into());
    };

    // EDITOR may carry flags, e.g. `code --wait`
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or_default();
    let status = Command::new(program)
        .args(parts)
        .arg(store.path())
        .status()?;
    if !status.success() {
        bail!("editor `{}` exited with {}", editor, status);
    }

    let presets = store.load().map_err(KjError::spec)?;
    tracing::info!(path = %store.path().display(), count = presets.len(), "presets saved");
    Ok(())
}

#[cfg(test)]
#[path = "presets_tests.rs"]
mod tests;
