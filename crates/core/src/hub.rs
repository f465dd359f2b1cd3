// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The notification hub: enabled gate, registry, resolution and dispatch.

use crate::error::UnknownNotifier;
use crate::key::Key;
use crate::notifier::Notifier;
use crate::options::Options;
use crate::registry::Registry;
use crate::severity::Severity;

/// Host-constructed context owning the registry and the enabled gate.
///
/// One `Hub` per process is the expected shape; tests construct their own
/// isolated instances instead of resetting shared state. The hub performs
/// no locking: callers that dispatch from multiple threads must serialize
/// registry mutation themselves.
pub struct Hub {
    registry: Registry,
    enabled: bool,
}

impl Default for Hub {
    fn default() -> Self {
        Self::new()
    }
}

impl Hub {
    /// An enabled hub with an empty registry.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            enabled: true,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Insert or replace the notifier under `key`. Replacing keeps the
    /// key's position in the preference order.
    pub fn register(&mut self, key: impl Into<Key>, notifier: impl Notifier + 'static) {
        self.registry.register(key, notifier);
    }

    /// Empty the registry. Reset hook; there is no per-key unregister.
    pub fn clear(&mut self) {
        self.registry.clear();
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Process-wide gate; while `false` every dispatch returns `Some(false)`
    /// without touching the registry.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Current preference order.
    pub fn preferred(&self) -> Vec<Key> {
        self.registry.keys()
    }

    /// Persistently move `keys` to the front of the preference order,
    /// returning the new order. All-or-nothing on unknown keys.
    pub fn prefer<I, K>(&mut self, keys: I) -> Result<Vec<Key>, UnknownNotifier>
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        let keys: Vec<Key> = keys.into_iter().map(Into::into).collect();
        self.registry.reorder(&keys)?;
        Ok(self.registry.keys())
    }

    /// Resolve a notifier.
    ///
    /// With an explicit `key`: an unregistered key is an error; a registered
    /// one is returned regardless of availability unless
    /// `options.require_available()` is set, in which case an unavailable
    /// notifier yields `None`.
    ///
    /// Without a key: walk `options.preferred()` first (same unknown-key
    /// rule as [`Hub::prefer`], but read-only), then the remaining registry
    /// order, returning the first available notifier. None available is
    /// `Ok(None)`, not an error.
    pub fn notifier(
        &self,
        key: Option<&str>,
        options: &Options,
    ) -> Result<Option<&dyn Notifier>, UnknownNotifier> {
        if let Some(key) = key {
            let Some(notifier) = self.registry.get(key) else {
                return Err(UnknownNotifier::key(key));
            };
            if options.require_available() && !notifier.available() {
                return Ok(None);
            }
            return Ok(Some(notifier));
        }

        let order = self.registry.effective_order(options.preferred())?;
        for key in &order {
            if let Some(notifier) = self.registry.get(key.as_str()) {
                if notifier.available() {
                    tracing::debug!(key = %key, "resolved notifier");
                    return Ok(Some(notifier));
                }
            }
        }
        Ok(None)
    }

    /// Dispatch `message` to the first available notifier.
    ///
    /// `Ok(Some(false))` when dispatch is disabled (globally or per-call)
    /// or the backend reported failure; `Ok(None)` when no backend is
    /// eligible; otherwise the backend's own result. Options are forwarded
    /// to the backend unmodified.
    pub fn notify(
        &self,
        message: &str,
        options: &Options,
    ) -> Result<Option<bool>, UnknownNotifier> {
        if !self.enabled || options.enabled() == Some(false) {
            tracing::debug!("dispatch disabled, suppressing notification");
            return Ok(Some(false));
        }
        match self.notifier(None, options)? {
            Some(notifier) => Ok(Some(notifier.send(message, options))),
            None => {
                tracing::debug!("no available notifier, dropping notification");
                Ok(None)
            }
        }
    }

    pub fn notify_ok(
        &self,
        message: &str,
        options: Options,
    ) -> Result<Option<bool>, UnknownNotifier> {
        self.notify_tagged(Severity::Ok, message, options)
    }

    pub fn notify_info(
        &self,
        message: &str,
        options: Options,
    ) -> Result<Option<bool>, UnknownNotifier> {
        self.notify_tagged(Severity::Info, message, options)
    }

    pub fn notify_warning(
        &self,
        message: &str,
        options: Options,
    ) -> Result<Option<bool>, UnknownNotifier> {
        self.notify_tagged(Severity::Warning, message, options)
    }

    pub fn notify_error(
        &self,
        message: &str,
        options: Options,
    ) -> Result<Option<bool>, UnknownNotifier> {
        self.notify_tagged(Severity::Error, message, options)
    }

    /// Shared body of the severity aliases: stamp the tag and dispatch.
    fn notify_tagged(
        &self,
        severity: Severity,
        message: &str,
        mut options: Options,
    ) -> Result<Option<bool>, UnknownNotifier> {
        options.set_severity(severity);
        self.notify(message, &options)
    }
}

impl std::fmt::Debug for Hub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hub")
            .field("enabled", &self.enabled)
            .field("registry", &self.registry)
            .finish()
    }
}

#[cfg(test)]
#[path = "hub_tests.rs"]
mod tests;
