// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type for operations that reference unregistered keys.

use crate::key::Key;
use thiserror::Error;

/// One or more referenced registry keys are not registered.
///
/// Raised by explicit-key resolution and by reorder/preference operations.
/// The message names every offending key in the order first encountered,
/// so a caller fixing a preference list sees all of them at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown notifier(s) {}", join_keys(.keys))]
pub struct UnknownNotifier {
    pub keys: Vec<Key>,
}

impl UnknownNotifier {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Error naming a single key.
    pub fn key(key: impl Into<Key>) -> Self {
        Self {
            keys: vec![key.into()],
        }
    }
}

fn join_keys(keys: &[Key]) -> String {
    keys.iter()
        .map(|k| format!("{:?}", k.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
