// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! herald: desktop notification dispatch through the first available backend.
//!
//! A host constructs a [`Hub`], registers backends (or calls
//! [`register_defaults`]), and dispatches with [`Hub::notify`] or one of
//! the severity aliases:
//!
//! ```no_run
//! use herald::{register_defaults, Hub, Options};
//!
//! let mut hub = Hub::new();
//! register_defaults(&mut hub);
//! let _ = hub.notify_ok("build finished", Options::new().with_extra("title", "CI"));
//! ```

pub use herald_backends::{
    register_defaults, DesktopBackend, GrowlBackend, GROWL, NOTIFICATION_CENTER,
};
pub use herald_core::{Hub, Key, Notifier, Options, Registry, Severity, UnknownNotifier};
