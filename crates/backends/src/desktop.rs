// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Desktop notification-center backend using notify-rust.
//!
//! On macOS, `notify-rust` uses `mac-notification-sys` (Cocoa bindings) to
//! send notifications via the Notification Center. The first notification
//! triggers `ensure_application_set()` which runs an AppleScript to look up
//! a bundle identifier. In a process without Automation permissions, that
//! AppleScript blocks forever. We pre-set the bundle identifier at
//! construction time to bypass the lookup entirely.

use herald_core::{Notifier, Options, Severity};

/// Sends through the platform notification facility: Notification Center
/// on macOS, the freedesktop notification service on Linux, toasts on
/// Windows.
#[derive(Clone, Debug)]
pub struct DesktopBackend {
    app_name: String,
}

impl Default for DesktopBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopBackend {
    pub fn new() -> Self {
        #[cfg(target_os = "macos")]
        {
            // Pre-set the application bundle identifier so mac-notification-sys
            // skips its NSAppleScript lookup (which blocks forever in processes
            // that lack Automation permissions).
            let _ = mac_notification_sys::set_application("com.apple.Terminal");
        }
        Self {
            app_name: "Herald".to_string(),
        }
    }

    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        let mut backend = Self::new();
        backend.app_name = app_name.into();
        backend
    }

    /// Freedesktop icon name for the severity tag; absent and unrecognized
    /// tags fall back to info.
    fn icon_name(severity: Option<Severity>) -> &'static str {
        match severity {
            Some(Severity::Ok) => "dialog-ok",
            Some(Severity::Warning) => "dialog-warning",
            Some(Severity::Error) => "dialog-error",
            Some(Severity::Info) | None => "dialog-information",
        }
    }
}

impl Notifier for DesktopBackend {
    fn available(&self) -> bool {
        if cfg!(target_os = "linux") {
            // freedesktop notifications ride the session bus
            std::env::var_os("DBUS_SESSION_BUS_ADDRESS").is_some()
        } else {
            cfg!(any(target_os = "macos", target_os = "windows"))
        }
    }

    fn send(&self, message: &str, options: &Options) -> bool {
        let mut notification = notify_rust::Notification::new();
        notification
            .appname(&self.app_name)
            .summary(options.extra_str("title").unwrap_or(&self.app_name))
            .body(message)
            .icon(Self::icon_name(options.severity()));
        #[cfg(target_os = "macos")]
        if let Some(subtitle) = options.extra_str("subtitle") {
            notification.subtitle(subtitle);
        }
        match notification.show() {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "desktop notification failed");
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "desktop_tests.rs"]
mod tests;
