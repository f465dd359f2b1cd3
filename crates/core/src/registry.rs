// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Insertion-ordered notifier registry.

use crate::error::UnknownNotifier;
use crate::key::Key;
use crate::notifier::Notifier;
use indexmap::{IndexMap, IndexSet};

/// Ordered mapping from key to notifier.
///
/// Iteration order is the default preference order: registration order,
/// reshuffled by [`Registry::reorder`]. Re-registering an existing key
/// replaces the notifier but keeps the key's position.
#[derive(Default)]
pub struct Registry {
    entries: IndexMap<Key, Box<dyn Notifier>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the notifier under `key`.
    pub fn register(&mut self, key: impl Into<Key>, notifier: impl Notifier + 'static) {
        self.entries.insert(key.into(), Box::new(notifier));
    }

    pub fn get(&self, key: &str) -> Option<&dyn Notifier> {
        self.entries.get(key).map(|n| &**n)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in current iteration order.
    pub fn keys(&self) -> Vec<Key> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty the registry. Test/reset hook; there is no per-key unregister.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in current iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &dyn Notifier)> {
        self.entries.iter().map(|(k, n)| (k, &**n))
    }

    /// The order produced by moving `priority` keys to the front, without
    /// mutating the registry.
    ///
    /// Duplicates in `priority` collapse to their first occurrence. The
    /// remaining keys keep their prior relative order. Any key absent from
    /// the registry fails the whole projection with an error naming every
    /// absent key.
    pub fn effective_order(&self, priority: &[Key]) -> Result<Vec<Key>, UnknownNotifier> {
        let head = self.check_priority(priority)?;
        let tail: Vec<Key> = self
            .entries
            .keys()
            .filter(|k| !head.contains(k.as_str()))
            .cloned()
            .collect();
        let mut order: Vec<Key> = head.into_iter().collect();
        order.extend(tail);
        Ok(order)
    }

    /// Reorder the registry so `priority` keys come first.
    ///
    /// All-or-nothing: when any key is unknown the registry is left
    /// untouched and the error names every unknown key.
    pub fn reorder(&mut self, priority: &[Key]) -> Result<(), UnknownNotifier> {
        let order = self.effective_order(priority)?;
        let mut old = std::mem::take(&mut self.entries);
        self.entries = order
            .into_iter()
            .filter_map(|k| old.shift_remove_entry(k.as_str()))
            .collect();
        Ok(())
    }

    /// Deduped priority keys, or an error naming every absent one.
    fn check_priority(&self, priority: &[Key]) -> Result<IndexSet<Key>, UnknownNotifier> {
        let keys: IndexSet<Key> = priority.iter().cloned().collect();
        let unknown: Vec<Key> = keys
            .iter()
            .filter(|k| !self.entries.contains_key(k.as_str()))
            .cloned()
            .collect();
        if unknown.is_empty() {
            Ok(keys)
        } else {
            Err(UnknownNotifier::new(unknown))
        }
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("keys", &self.keys())
            .finish()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
