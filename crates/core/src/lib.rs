// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! kj-core: job specification model for the kj CLI
//!
//! This crate provides:
//! - Name sanitization for executor-legal resource names
//! - Source packaging into a self-contained bootstrap command
//! - Preset documents and their overlay onto job specs
//! - Deterministic job spec construction from a script or function

pub mod builder;
pub mod config;
pub mod error;
pub mod id;
pub mod name;
pub mod preset;
pub mod request;
pub mod source;
pub mod spec;
pub mod status;

pub use builder::{build, JobSpecBuilder, Overrides};
pub use config::Config;
pub use error::SpecError;
pub use id::{IdGen, SequentialIdGen, UuidIdGen};
pub use name::sanitize;
pub use preset::{Preset, PresetDocument, PresetStore};
pub use request::{JobRequest, JobSource};
pub use source::{bootstrap_command, FunctionSource, Kwargs};
pub use spec::{JobSpec, Resources, Toleration};
pub use status::{JobPhase, JobStatus};
