//! Preset document command specs
//!
//! Verify `kj presets view|template|edit`.

use crate::prelude::*;

#[test]
fn view_without_document_prints_nothing() {
    let temp = Project::empty();

    temp.kj().args(&["presets", "view"]).passes().stdout_eq("");
}

#[test]
fn view_prints_document_verbatim() {
    let temp = Project::empty();
    temp.presets(GPU_PRESETS);

    temp.kj()
        .args(&["presets", "view"])
        .passes()
        .stdout_eq(GPU_PRESETS);
}

#[test]
fn template_lists_every_key() {
    let temp = Project::empty();

    temp.kj()
        .args(&["presets", "template"])
        .passes()
        .stdout_has("image:")
        .stdout_has("ttlSecondsAfterFinished:")
        .stdout_has("env:")
        .stdout_has("parallelism:")
        .stdout_has("nodeSelector:")
        .stdout_has("resources:")
        .stdout_has("tolerations:");
}

#[test]
fn edit_without_editor_fails_and_creates_document() {
    let temp = Project::empty();

    temp.kj()
        .args(&["presets", "edit"])
        .fails()
        .stderr_has("EDITOR is not set")
        .stderr_has("export EDITOR");

    assert!(temp.presets_path().is_file());
}

#[test]
fn edit_runs_editor_on_document() {
    let temp = Project::empty();

    // `true` accepts the path and leaves the empty document alone
    temp.kj()
        .env("EDITOR", "true")
        .args(&["presets", "edit"])
        .passes();

    assert!(temp.presets_path().is_file());
    temp.kj().args(&["presets", "view"]).passes().stdout_eq("");
}
