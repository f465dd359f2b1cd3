// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake backend for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use herald_core::{Notifier, Options};
use parking_lot::Mutex;
use std::sync::Arc;

/// Recorded send
#[derive(Debug, Clone, PartialEq)]
pub struct SendCall {
    pub message: String,
    pub options: Options,
}

#[derive(Debug)]
struct FakeState {
    calls: Vec<SendCall>,
}

/// Fake backend recording sends for assertions.
///
/// Clones share the recorded calls, so tests register a clone and keep the
/// original as a handle.
#[derive(Clone, Debug)]
pub struct FakeBackend {
    available: bool,
    result: bool,
    inner: Arc<Mutex<FakeState>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeBackend {
    /// Available backend whose sends succeed.
    pub fn new() -> Self {
        Self::with_behavior(true, true)
    }

    /// Backend with the given availability and send result.
    pub fn with_behavior(available: bool, result: bool) -> Self {
        Self {
            available,
            result,
            inner: Arc::new(Mutex::new(FakeState { calls: Vec::new() })),
        }
    }

    /// Backend whose availability probe answers `false`.
    pub fn unavailable() -> Self {
        Self::with_behavior(false, true)
    }

    /// Available backend whose sends report failure.
    pub fn failing() -> Self {
        Self::with_behavior(true, false)
    }

    /// All recorded sends.
    pub fn calls(&self) -> Vec<SendCall> {
        self.inner.lock().calls.clone()
    }
}

impl Notifier for FakeBackend {
    fn available(&self) -> bool {
        self.available
    }

    fn send(&self, message: &str, options: &Options) -> bool {
        self.inner.lock().calls.push(SendCall {
            message: message.to_string(),
            options: options.clone(),
        });
        self.result
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
