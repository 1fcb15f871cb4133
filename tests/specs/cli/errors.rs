//! Error reporting specs
//!
//! Verify failures exit non-zero with a readable message on stderr.

use crate::prelude::*;

#[test]
fn submit_missing_script_fails() {
    let temp = Project::empty();

    temp.kj()
        .args(&["submit", "missing.py", "--dryrun"])
        .fails()
        .stderr_has("failed to read script")
        .stderr_has("missing.py");
}

#[test]
fn submit_rejects_env_without_equals() {
    let temp = Project::empty();
    temp.file("hello.py", HELLO_SCRIPT);

    temp.kj()
        .args(&["submit", "hello.py", "--env", "DEBUG", "--dryrun"])
        .fails()
        .stderr_has("no `=` found");
}

#[test]
fn submit_unusable_name_fails() {
    let temp = Project::empty();
    temp.file("___.py", HELLO_SCRIPT);

    temp.kj()
        .args(&["submit", "___.py", "--dryrun"])
        .fails()
        .stderr_has("does not produce a valid job name");
}

#[test]
fn status_without_cluster_fails_to_connect() {
    let temp = Project::empty();

    temp.kj()
        .args(&["status", "hello-0001"])
        .fails()
        .stderr_has("failed to connect")
        .stderr_has("KJ_CLUSTER_NAME");
}

#[test]
fn delete_without_cluster_fails_to_connect() {
    let temp = Project::empty();

    temp.kj()
        .args(&["delete", "hello-0001"])
        .fails()
        .stderr_has("failed to connect");
}
