//! Dispatch outcome specs
//!
//! The three dispatch outcomes stay distinct: `Some(false)` means disabled
//! or backend failure, `None` means no eligible backend, and a delivered
//! message returns the backend's own result.

use crate::prelude::*;
use herald::{Hub, Options};

#[test]
fn empty_registry_yields_none() {
    let hub = Hub::new();
    assert_eq!(hub.notify("x", &Options::new()), Ok(None));
    assert!(hub.notifier(None, &Options::new()).unwrap().is_none());
}

#[test]
fn first_available_backend_receives_the_message() {
    let mut hub = Hub::new();
    let foo = unavailable(&mut hub, "foo");
    let bar = available(&mut hub, "bar");

    assert_eq!(hub.notify("x", &Options::new()), Ok(Some(true)));

    assert!(foo.calls().is_empty());
    let calls = bar.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].message, "x");
    assert_eq!(calls[0].options, Options::new());
}

#[test]
fn backend_failure_is_forwarded_verbatim() {
    let mut hub = Hub::new();
    let foo = failing(&mut hub, "foo");
    assert_eq!(hub.notify("x", &Options::new()), Ok(Some(false)));
    assert_eq!(foo.calls().len(), 1);
}

#[test]
fn global_disable_short_circuits_before_the_registry() {
    let mut hub = Hub::new();
    let foo = available(&mut hub, "foo");
    hub.set_enabled(false);

    assert_eq!(hub.notify("x", &Options::new()), Ok(Some(false)));
    assert!(foo.calls().is_empty());
}

#[test]
fn per_call_disable_short_circuits_before_the_registry() {
    let mut hub = Hub::new();
    let foo = available(&mut hub, "foo");

    let options = Options::new().with_enabled(false);
    assert_eq!(hub.notify("x", &options), Ok(Some(false)));
    assert!(foo.calls().is_empty());
}

#[test]
fn disabled_dispatch_skips_even_preference_validation() {
    // the short-circuit happens before the resolver, so an unknown
    // preferred key is never seen
    let mut hub = Hub::new();
    available(&mut hub, "foo");
    hub.set_enabled(false);

    let options = Options::new().with_preferred(["nope"]);
    assert_eq!(hub.notify("x", &options), Ok(Some(false)));
}

#[test]
fn extras_reach_the_backend_unmodified() {
    let mut hub = Hub::new();
    let foo = available(&mut hub, "foo");

    let options = Options::new()
        .with_extra("title", "CI")
        .with_extra("subtitle", "main")
        .with_extra("icon", "img.jpg")
        .with_extra("custom", 7);
    hub.notify("done", &options).unwrap();

    assert_eq!(foo.calls()[0].options, options);
}
