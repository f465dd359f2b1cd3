// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Growl backend shelling out to the growlnotify CLI.

use herald_core::{Notifier, Options, Severity};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Sends through Growl by invoking `growlnotify`.
///
/// Option mapping: `title` becomes the Growl application name, `subtitle`
/// becomes the Growl notification title, `icon` is passed as the image.
#[derive(Debug)]
pub struct GrowlBackend {
    program: PathBuf,
}

impl Default for GrowlBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl GrowlBackend {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("growlnotify"),
        }
    }

    /// Use a specific growlnotify binary instead of resolving `PATH`.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn priority(severity: Option<Severity>) -> &'static str {
        match severity {
            Some(Severity::Warning) => "1",
            Some(Severity::Error) => "2",
            Some(Severity::Ok) | Some(Severity::Info) | None => "0",
        }
    }

    /// Argument list for one send, minus the program name.
    fn build_args(message: &str, options: &Options) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        if let Some(title) = options.extra_str("title") {
            args.push("--name".into());
            args.push(title.into());
        }
        if let Some(subtitle) = options.extra_str("subtitle") {
            args.push("--title".into());
            args.push(subtitle.into());
        }
        if let Some(icon) = options.extra_str("icon") {
            args.push("--image".into());
            args.push(icon.into());
        }
        args.push("--priority".into());
        args.push(Self::priority(options.severity()).into());
        args.push("--message".into());
        args.push(message.into());
        args
    }

    fn on_path(program: &Path) -> bool {
        if program.is_absolute() {
            return program.is_file();
        }
        let Some(paths) = std::env::var_os("PATH") else {
            return false;
        };
        std::env::split_paths(&paths).any(|dir| dir.join(program).is_file())
    }
}

impl Notifier for GrowlBackend {
    fn available(&self) -> bool {
        Self::on_path(&self.program)
    }

    fn send(&self, message: &str, options: &Options) -> bool {
        let args = Self::build_args(message, options);
        match Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
        {
            Ok(status) if status.success() => true,
            Ok(status) => {
                tracing::warn!(%status, "growlnotify exited with non-zero status");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to spawn growlnotify");
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "growl_tests.rs"]
mod tests;
