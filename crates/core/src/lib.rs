// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! herald-core: notifier registry, resolution and dispatch.
//!
//! A [`Hub`] owns an ordered [`Registry`] of backends implementing
//! [`Notifier`] and dispatches each message to the first available one,
//! honoring per-call and persistent preference orders.

pub mod error;
pub mod hub;
pub mod key;
pub mod notifier;
pub mod options;
pub mod registry;
pub mod severity;

pub use error::UnknownNotifier;
pub use hub::Hub;
pub use key::Key;
pub use notifier::Notifier;
pub use options::Options;
pub use registry::Registry;
pub use severity::Severity;
