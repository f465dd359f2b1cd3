//! Preference order specs
//!
//! `preferred` exposes the registry order; `prefer` reshuffles it
//! persistently as a bijection on the key set.

use crate::prelude::*;
use herald::Hub;

#[test]
fn registration_order_is_the_default_preference() {
    let mut hub = Hub::new();
    available(&mut hub, "foo");
    available(&mut hub, "bar");
    available(&mut hub, "baz");
    assert_eq!(hub.preferred(), ["foo", "bar", "baz"]);
}

#[test]
fn prefer_reorders_all_keys() {
    let mut hub = Hub::new();
    available(&mut hub, "foo");
    available(&mut hub, "bar");
    available(&mut hub, "baz");
    hub.prefer(["bar", "foo", "baz"]).unwrap();
    assert_eq!(hub.preferred(), ["bar", "foo", "baz"]);
}

#[test]
fn prefer_moves_a_single_key_to_the_front() {
    let mut hub = Hub::new();
    available(&mut hub, "foo");
    available(&mut hub, "bar");
    available(&mut hub, "baz");
    hub.prefer(["baz"]).unwrap();
    assert_eq!(hub.preferred(), ["baz", "foo", "bar"]);
}

#[test]
fn prefer_keeps_the_tail_in_prior_relative_order() {
    let mut hub = Hub::new();
    available(&mut hub, "foo");
    available(&mut hub, "bar");
    available(&mut hub, "baz");
    hub.prefer(["baz", "foo"]).unwrap();
    assert_eq!(hub.preferred(), ["baz", "foo", "bar"]);
}

#[test]
fn prefer_ignores_duplicate_keys() {
    let mut hub = Hub::new();
    available(&mut hub, "foo");
    available(&mut hub, "bar");
    available(&mut hub, "baz");
    hub.prefer(["bar", "foo", "foo", "baz", "bar", "bar", "baz"])
        .unwrap();
    assert_eq!(hub.preferred(), ["bar", "foo", "baz"]);
}

#[test]
fn failed_prefer_leaves_the_registry_untouched() {
    let mut hub = Hub::new();
    available(&mut hub, "foo");
    available(&mut hub, "bar");
    let err = hub.prefer(["baz", "bar"]).unwrap_err();
    assert_eq!(err.to_string(), "unknown notifier(s) \"baz\"");
    assert_eq!(hub.preferred(), ["foo", "bar"]);
}

#[test]
fn re_registering_a_key_keeps_its_position() {
    let mut hub = Hub::new();
    available(&mut hub, "foo");
    available(&mut hub, "bar");
    let replacement = unavailable(&mut hub, "foo");
    assert_eq!(hub.preferred(), ["foo", "bar"]);
    // the replacement is live: "foo" is now unavailable
    assert!(!hub
        .notifier(Some("foo"), &herald::Options::new())
        .unwrap()
        .unwrap()
        .available());
    assert!(replacement.calls().is_empty());
}
