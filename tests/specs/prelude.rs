//! Test helpers for behavioral specifications.

#![allow(dead_code)]

use herald::Hub;
use herald_backends::FakeBackend;

/// Register a fresh available fake under `key`, returning a handle that
/// shares the recorded calls with the registered clone.
pub fn available(hub: &mut Hub, key: &str) -> FakeBackend {
    register(hub, key, FakeBackend::new())
}

/// Register a fake whose availability probe answers `false`.
pub fn unavailable(hub: &mut Hub, key: &str) -> FakeBackend {
    register(hub, key, FakeBackend::unavailable())
}

/// Register an available fake whose sends report failure.
pub fn failing(hub: &mut Hub, key: &str) -> FakeBackend {
    register(hub, key, FakeBackend::failing())
}

fn register(hub: &mut Hub, key: &str, fake: FakeBackend) -> FakeBackend {
    hub.register(key, fake.clone());
    fake
}
