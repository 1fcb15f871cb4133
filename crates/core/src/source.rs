// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source packaging
//!
//! Turns a script file, or the text of a single function plus keyword
//! arguments, into one self-contained source blob and wraps it in the
//! bootstrap command. The bootstrap writes the blob to a temporary file inside
//! the container and runs it, so a stock runtime image can execute any script.

use crate::error::SpecError;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Shell program run by `sh -ec`; `$0` is the packaged source.
pub const BOOTSTRAP_SCRIPT: &str = "program_path=$(mktemp)\n\
printf \"%s\" \"$0\" > \"$program_path\"\n\
python3 -u \"$program_path\" \"$@\"\n";

/// Keyword arguments for a packaged function call, rendered in key order
pub type Kwargs = BTreeMap<String, Value>;

/// Wrap packaged source in the 4-element bootstrap invocation.
pub fn bootstrap_command(source: &str) -> Vec<String> {
    vec![
        "sh".to_string(),
        "-ec".to_string(),
        BOOTSTRAP_SCRIPT.to_string(),
        source.to_string(),
    ]
}

/// Convert CRLF line endings to LF, collapse runs of blank lines to one, drop
/// blank lines at either end and terminate with exactly one newline.
pub fn normalize(source: &str) -> String {
    let source = source.replace("\r\n", "\n");
    let mut out = String::with_capacity(source.len() + 1);
    let mut pending = 0usize;
    for c in source.chars() {
        if c == '\n' {
            pending += 1;
            continue;
        }
        if !out.is_empty() {
            for _ in 0..pending.min(2) {
                out.push('\n');
            }
        }
        pending = 0;
        out.push(c);
    }
    out.push('\n');
    out
}

/// Read a script file verbatim and normalize it.
pub fn package_script(path: &Path) -> Result<String, SpecError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SpecError::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize(&contents))
}

/// Source text of a single function, as written by the caller.
///
/// The text may carry surrounding indentation and decorators; both are
/// stripped when packaging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSource {
    name: String,
    text: String,
}

impl FunctionSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Load the function text from a file
    pub fn from_file(name: impl Into<String>, path: impl Into<PathBuf>) -> Result<Self, SpecError> {
        let path = path.into();
        let text = std::fs::read_to_string(&path)
            .map_err(|source| SpecError::SourceRead { path, source })?;
        Ok(Self::new(name, text))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dedented text starting at the function declaration
    pub fn definition(&self) -> Result<String, SpecError> {
        let dedented = dedent(&self.text);
        let lines: Vec<&str> = dedented
            .split('\n')
            .skip_while(|line| !is_declaration(line))
            .collect();

        if lines.is_empty() {
            return Err(SpecError::SourceExtraction {
                function: self.name.clone(),
                reason: "no function declaration found after dedenting; \
                         it is probably not properly indented"
                    .to_string(),
            });
        }

        Ok(lines.join("\n"))
    }
}

/// Package a function definition followed by a call with `kwargs`.
pub fn package_function(func: &FunctionSource, kwargs: &Kwargs) -> Result<String, SpecError> {
    let definition = func.definition()?;
    let call = format!("{}({})", func.name(), render_kwargs(kwargs));
    Ok(normalize(&format!("{}\n{}\n", definition, call)))
}

/// Render `key=value` pairs separated by commas.
///
/// Integers and booleans are written as interpreter literals, everything else as JSON.
pub fn render_kwargs(kwargs: &Kwargs) -> String {
    kwargs
        .iter()
        .map(|(key, value)| format!("{}={}", key, render_value(value)))
        .collect::<Vec<_>>()
        .join(",")
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
        other => other.to_string(),
    }
}

fn is_declaration(line: &str) -> bool {
    line.strip_prefix("def")
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_whitespace)
}

/// Remove the common leading whitespace of all non-blank lines.
///
/// Whitespace-only lines are emptied.
fn dedent(text: &str) -> String {
    let margin = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| &line[..line.len() - line.trim_start().len()])
        .reduce(common_prefix)
        .unwrap_or("");

    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                line.strip_prefix(margin).unwrap_or(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn common_prefix<'a>(a: &'a str, b: &'a str) -> &'a str {
    let len = a
        .char_indices()
        .zip(b.chars())
        .take_while(|((_, x), y)| x == y)
        .last()
        .map(|((i, c), _)| i + c.len_utf8())
        .unwrap_or(0);
    &a[..len]
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
