//! Dry-run submission specs
//!
//! Verify `--dryrun` prints the Job manifest without contacting a cluster.

use crate::prelude::*;

#[test]
fn dryrun_prints_job_manifest() {
    let temp = Project::empty();
    temp.file("hello.py", HELLO_SCRIPT);

    temp.kj()
        .args(&["submit", "hello.py", "--dryrun"])
        .passes()
        .stdout_has("apiVersion: batch/v1")
        .stdout_has("kind: Job")
        .stdout_has("name: hello-")
        .stdout_has("namespace: default")
        .stdout_has("image: python:3.7.13-slim-buster")
        .stdout_has("imagePullPolicy: Always")
        .stdout_has("restartPolicy: Never")
        .stdout_has("backoffLimit: 2")
        .stdout_has("ttlSecondsAfterFinished: 10")
        .stdout_has("-ec")
        .stdout_has("print('hello', sys.argv)");
}

#[test]
fn dryrun_collapses_blank_lines_in_script() {
    let temp = Project::empty();
    temp.file("hello.py", HELLO_SCRIPT);

    temp.kj()
        .args(&["submit", "hello.py", "--dryrun"])
        .passes()
        .stdout_lacks("import sys\n\n\n");
}

#[test]
fn dryrun_sanitizes_script_name() {
    let temp = Project::empty();
    temp.file("Nightly_ETL.v2.py", HELLO_SCRIPT);

    temp.kj()
        .args(&["submit", "Nightly_ETL.v2.py", "--dryrun"])
        .passes()
        .stdout_has("name: nightly-etl-v2-")
        .stdout_has("job: nightly-etl-v2-");
}

#[test]
fn dryrun_uses_namespace_flag() {
    let temp = Project::empty();
    temp.file("hello.py", HELLO_SCRIPT);

    temp.kj()
        .args(&["submit", "hello.py", "--namespace", "batch", "--dryrun"])
        .passes()
        .stdout_has("namespace: batch");
}

#[test]
fn dryrun_uses_namespace_from_environment() {
    let temp = Project::empty();
    temp.file("hello.py", HELLO_SCRIPT);

    temp.kj()
        .env("KUBERNETES_NAMESPACE", "research")
        .args(&["submit", "hello.py", "--dryrun"])
        .passes()
        .stdout_has("namespace: research");
}

#[test]
fn dryrun_uses_configured_default_image() {
    let temp = Project::empty();
    temp.file("hello.py", HELLO_SCRIPT);

    temp.kj()
        .env("KJ_DEFAULT_IMAGE", "python:3.12-slim")
        .args(&["submit", "hello.py", "--dryrun"])
        .passes()
        .stdout_has("image: python:3.12-slim");
}

#[test]
fn dryrun_image_flag_wins() {
    let temp = Project::empty();
    temp.file("hello.py", HELLO_SCRIPT);

    temp.kj()
        .env("KJ_DEFAULT_IMAGE", "python:3.12-slim")
        .args(&["submit", "hello.py", "--image", "registry.local/etl:1", "--dryrun"])
        .passes()
        .stdout_has("image: registry.local/etl:1")
        .stdout_lacks("python:3.12-slim");
}

#[test]
fn dryrun_passes_env_flags() {
    let temp = Project::empty();
    temp.file("hello.py", HELLO_SCRIPT);

    temp.kj()
        .args(&["submit", "hello.py", "-e", "MODE=full", "-e", "DSN=a=b", "--dryrun"])
        .passes()
        .stdout_has("name: MODE")
        .stdout_has("value: full")
        .stdout_has("name: DSN")
        .stdout_has("value: a=b");
}
