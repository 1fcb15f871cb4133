//! Shared helpers for kj specs.
//!
//! Each spec runs the `kj` binary against a throwaway home directory so the
//! user's preset document and kubeconfig are never touched.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Python script used by most specs
pub const HELLO_SCRIPT: &str = "import sys\n\n\n\nprint('hello', sys.argv)\n";

/// Preset document with one fully populated preset
pub const GPU_PRESETS: &str = "\
gpu:
  image: pytorch/pytorch:2.3.0
  ttlSecondsAfterFinished: 600
  env:
    CUDA_VISIBLE_DEVICES: \"0\"
  parallelism: 2
  nodeSelector:
    accelerator: nvidia
  resources:
    limits:
      nvidia.com/gpu: \"1\"
  tolerations:
    - key: gpu
      operator: Exists
      effect: NoSchedule
";

/// Temporary working directory with an isolated home
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Write a file relative to the project root
    pub fn file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn presets_path(&self) -> PathBuf {
        self.dir.path().join("home/.config/kj/presets.yaml")
    }

    /// Write the preset document at the configured location
    pub fn presets(&self, contents: &str) {
        self.file("home/.config/kj/presets.yaml", contents);
    }

    /// `kj` invocation scoped to this project
    pub fn kj(&self) -> Cli {
        let mut cmd = Command::cargo_bin("kj").unwrap();
        cmd.current_dir(self.dir.path())
            .env_clear()
            .env("PATH", std::env::var("PATH").unwrap_or_default())
            .env("HOME", self.dir.path().join("home"))
            .env("KJ_PRESETS_PATH", self.presets_path())
            .env("KUBECONFIG", self.dir.path().join("home/.kube/config"))
            .env("RUST_LOG", "warn");
        Cli { cmd }
    }
}

/// Builder around a single `kj` run
pub struct Cli {
    cmd: Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run and require a zero exit status
    pub fn passes(mut self) -> RunResult {
        let output = self.cmd.output().unwrap();
        let result = RunResult::from(output);
        assert!(
            result.success,
            "expected success\nstdout:\n{}\nstderr:\n{}",
            result.stdout, result.stderr
        );
        result
    }

    /// Run and require a non-zero exit status
    pub fn fails(mut self) -> RunResult {
        let output = self.cmd.output().unwrap();
        let result = RunResult::from(output);
        assert!(
            !result.success,
            "expected failure\nstdout:\n{}\nstderr:\n{}",
            result.stdout, result.stderr
        );
        result
    }
}

/// Captured output of a finished run
pub struct RunResult {
    success: bool,
    stdout: String,
    stderr: String,
}

impl From<std::process::Output> for RunResult {
    fn from(output: std::process::Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl RunResult {
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            predicate::str::contains(needle).eval(&self.stdout),
            "stdout missing {:?}:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout unexpectedly has {:?}:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            predicate::str::contains(needle).eval(&self.stderr),
            "stderr missing {:?}:\n{}",
            needle,
            self.stderr
        );
        self
    }
}
