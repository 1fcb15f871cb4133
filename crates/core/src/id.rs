// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job name suffix generation

use crate::name::SUFFIX_LEN;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Generates short disambiguating suffixes for job names
pub trait IdGen: Clone + Send + Sync {
    fn next(&self) -> String;
}

/// Random suffix taken from a v4 UUID
#[derive(Clone, Default)]
pub struct UuidIdGen;

impl IdGen for UuidIdGen {
    fn next(&self) -> String {
        let mut id = uuid::Uuid::new_v4().simple().to_string();
        id.truncate(SUFFIX_LEN);
        id
    }
}

/// Sequential suffix generator for testing
#[derive(Clone)]
pub struct SequentialIdGen {
    counter: Arc<AtomicU64>,
}

impl SequentialIdGen {
    pub fn new() -> Self {
        Self {
            counter: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for SequentialIdGen {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGen for SequentialIdGen {
    fn next(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        format!("{:0width$x}", n % 0x10000, width = SUFFIX_LEN)
    }
}
