// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The backend capability contract.

use crate::options::Options;

/// A notification backend.
///
/// Implementations pair a cheap availability probe with a synchronous send.
/// `send` must tolerate extras it does not understand by ignoring them, and
/// must map the severity tag onto its own native concept, treating an
/// absent tag as info.
pub trait Notifier: std::fmt::Debug {
    /// Whether the underlying facility is currently usable.
    ///
    /// Must be cheap and side-effect-free; resolution probes candidates in
    /// preference order until one answers `true`.
    fn available(&self) -> bool;

    /// Deliver `message`. Returns `true` on success, `false` when the
    /// native facility reports failure.
    fn send(&self, message: &str, options: &Options) -> bool;
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn available(&self) -> bool {
        (**self).available()
    }

    fn send(&self, message: &str, options: &Options) -> bool {
        (**self).send(message, options)
    }
}
