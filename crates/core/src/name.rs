// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Executor-legal resource names

use crate::error::SpecError;

/// Longest name the executor accepts for a job (it is also used as a label value)
pub const MAX_NAME_LEN: usize = 63;

/// Length of the random suffix appended to every job name
pub const SUFFIX_LEN: usize = 4;

/// Replace every run of non-alphanumeric characters with a single `-` and lowercase.
///
/// Total over any input; an empty input yields an empty string.
pub fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_run = false;
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            in_run = false;
        } else if !in_run {
            out.push('-');
            in_run = true;
        }
    }
    out
}

/// Sanitize `raw` and reject results the executor could never accept.
pub fn validate(raw: &str) -> Result<String, SpecError> {
    let name = sanitize(raw);
    if !name.chars().any(|c| c.is_ascii_alphanumeric()) || name.len() > MAX_NAME_LEN {
        return Err(SpecError::NameInvalid {
            raw: raw.to_string(),
        });
    }
    Ok(name)
}

/// Build `<sanitized base>-<suffix>`, truncating the base so the result fits [`MAX_NAME_LEN`].
pub fn with_suffix(base: &str, suffix: &str) -> Result<String, SpecError> {
    let mut name = sanitize(base).trim_start_matches('-').to_string();
    if !name.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(SpecError::NameInvalid {
            raw: base.to_string(),
        });
    }
    // sanitized names are ASCII, so byte truncation is safe
    name.truncate(MAX_NAME_LEN - SUFFIX_LEN - 1);
    validate(&format!("{}-{}", name, suffix))
}

#[cfg(test)]
#[path = "name_tests.rs"]
mod tests;
