//! Help output specs
//!
//! Verify the command surface is discoverable.

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    let temp = Project::empty();

    temp.kj()
        .args(&["--help"])
        .passes()
        .stdout_has("submit")
        .stdout_has("status")
        .stdout_has("delete")
        .stdout_has("presets");
}

#[test]
fn submit_help_lists_flags() {
    let temp = Project::empty();

    temp.kj()
        .args(&["submit", "--help"])
        .passes()
        .stdout_has("--namespace")
        .stdout_has("--image")
        .stdout_has("--env")
        .stdout_has("--preset")
        .stdout_has("--dryrun");
}

#[test]
fn status_help_lists_output_formats() {
    let temp = Project::empty();

    temp.kj()
        .args(&["status", "--help"])
        .passes()
        .stdout_has("text")
        .stdout_has("json");
}
