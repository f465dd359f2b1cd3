// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stock backend registration.

use crate::desktop::DesktopBackend;
use crate::growl::GrowlBackend;
use herald_core::Hub;

/// Key under which [`DesktopBackend`] registers.
pub const NOTIFICATION_CENTER: &str = "notification_center";

/// Key under which [`GrowlBackend`] registers.
pub const GROWL: &str = "growl";

/// Register the stock backends in default preference order: the platform
/// notification center first, then Growl.
pub fn register_defaults(hub: &mut Hub) {
    hub.register(NOTIFICATION_CENTER, DesktopBackend::new());
    hub.register(GROWL, GrowlBackend::new());
}

#[cfg(test)]
#[path = "defaults_tests.rs"]
mod tests;
