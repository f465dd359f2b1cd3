// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Severity tag carried in call options.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tone of a notification, injected by the severity alias methods and
/// mapped by each backend onto its native severity concept.
///
/// Backends treat an absent tag as [`Severity::Info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Ok => "ok",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Parse the lowercase tag name. Unrecognized names yield `None`;
    /// callers fall back to their info-equivalent.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ok" => Some(Severity::Ok),
            "info" => Some(Severity::Info),
            "warning" => Some(Severity::Warning),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "severity_tests.rs"]
mod tests;
