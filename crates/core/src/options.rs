// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-call notification options.

use crate::key::Key;
use crate::severity::Severity;
use serde_json::{Map, Value};

/// Options accompanying a single dispatch or resolution call.
///
/// The recognized fields steer the core: `severity` is the tag the alias
/// methods inject, `preferred` is a transient resolution-order override,
/// `enabled` suppresses a single dispatch, and `require_available` makes
/// explicit-key resolution insist on an available backend. Everything else
/// rides in `extra` (`title`, `subtitle`, `icon`, ...) and is forwarded to
/// the chosen backend untouched; backends ignore keys they don't understand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    severity: Option<Severity>,
    preferred: Vec<Key>,
    enabled: Option<bool>,
    require_available: bool,
    extra: Map<String, Value>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_preferred<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        self.preferred = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn with_require_available(mut self, require: bool) -> Self {
        self.require_available = require;
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    /// Overwrites any caller-supplied severity; used by the alias methods.
    pub fn set_severity(&mut self, severity: Severity) {
        self.severity = Some(severity);
    }

    /// Transient resolution order; empty means "registry order".
    pub fn preferred(&self) -> &[Key] {
        &self.preferred
    }

    /// Per-call gate; `Some(false)` suppresses the dispatch.
    pub fn enabled(&self) -> Option<bool> {
        self.enabled
    }

    pub fn require_available(&self) -> bool {
        self.require_available
    }

    /// Backend-specific value under `key`, if any.
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Backend-specific string value under `key`, if any.
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }

    /// All backend-specific entries.
    pub fn extras(&self) -> &Map<String, Value> {
        &self.extra
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
