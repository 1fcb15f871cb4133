//! Preset application specs
//!
//! Verify presets overlay the defaults and explicit flags overlay presets.

use crate::prelude::*;

#[test]
fn preset_fields_reach_manifest() {
    let temp = Project::empty();
    temp.file("train.py", HELLO_SCRIPT);
    temp.presets(GPU_PRESETS);

    temp.kj()
        .args(&["submit", "train.py", "--preset", "gpu", "--dryrun"])
        .passes()
        .stdout_has("image: pytorch/pytorch:2.3.0")
        .stdout_has("ttlSecondsAfterFinished: 600")
        .stdout_has("CUDA_VISIBLE_DEVICES")
        .stdout_has("parallelism: 2")
        .stdout_has("completions: 2")
        .stdout_has("accelerator: nvidia")
        .stdout_has("nvidia.com/gpu")
        .stdout_has("effect: NoSchedule");
}

#[test]
fn env_flag_replaces_preset_env() {
    let temp = Project::empty();
    temp.file("train.py", HELLO_SCRIPT);
    temp.presets(GPU_PRESETS);

    temp.kj()
        .args(&["submit", "train.py", "--preset", "gpu", "--env", "MODE=fast", "--dryrun"])
        .passes()
        .stdout_has("name: MODE")
        .stdout_lacks("CUDA_VISIBLE_DEVICES")
        .stdout_has("image: pytorch/pytorch:2.3.0");
}

#[test]
fn image_flag_replaces_preset_image() {
    let temp = Project::empty();
    temp.file("train.py", HELLO_SCRIPT);
    temp.presets(GPU_PRESETS);

    temp.kj()
        .args(&["submit", "train.py", "--preset", "gpu", "--image", "cuda:12", "--dryrun"])
        .passes()
        .stdout_has("image: cuda:12")
        .stdout_lacks("pytorch/pytorch")
        .stdout_has("ttlSecondsAfterFinished: 600");
}

#[test]
fn missing_preset_fails_with_suggestion() {
    let temp = Project::empty();
    temp.file("train.py", HELLO_SCRIPT);
    temp.presets(GPU_PRESETS);

    temp.kj()
        .args(&["submit", "train.py", "--preset", "cpu", "--dryrun"])
        .fails()
        .stderr_has("preset `cpu` not found")
        .stderr_has("kj presets view");
}

#[test]
fn preset_without_document_fails() {
    let temp = Project::empty();
    temp.file("train.py", HELLO_SCRIPT);

    temp.kj()
        .args(&["submit", "train.py", "--preset", "gpu", "--dryrun"])
        .fails()
        .stderr_has("preset `gpu` not found");
}

#[test]
fn malformed_preset_document_fails() {
    let temp = Project::empty();
    temp.file("train.py", HELLO_SCRIPT);
    temp.presets("gpu:\n  colour: red\n");

    temp.kj()
        .args(&["submit", "train.py", "--preset", "gpu", "--dryrun"])
        .fails()
        .stderr_has("failed to parse presets");
}

#[test]
fn missing_preset_is_reported_before_missing_script() {
    let temp = Project::empty();
    temp.presets(GPU_PRESETS);

    temp.kj()
        .args(&["submit", "missing.py", "--preset", "cpu", "--dryrun"])
        .fails()
        .stderr_has("preset `cpu` not found");
}

#[test]
fn unquoted_preset_numbers_are_accepted() {
    let temp = Project::empty();
    temp.file("train.py", HELLO_SCRIPT);
    temp.presets("gpu:\n  env:\n    WORKERS: 4\n  resources:\n    limits:\n      nvidia.com/gpu: 1\n");

    temp.kj()
        .args(&["submit", "train.py", "--preset", "gpu", "--dryrun"])
        .passes()
        .stdout_has("name: WORKERS")
        .stdout_has("nvidia.com/gpu");
}
