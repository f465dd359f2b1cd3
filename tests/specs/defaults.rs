//! Default backend registration specs

use herald::{register_defaults, Hub, Options, GROWL, NOTIFICATION_CENTER};

#[test]
fn defaults_prefer_the_notification_center() {
    let mut hub = Hub::new();
    register_defaults(&mut hub);
    assert_eq!(hub.preferred(), [NOTIFICATION_CENTER, GROWL]);
}

#[test]
fn default_keys_resolve_explicitly() {
    let mut hub = Hub::new();
    register_defaults(&mut hub);
    assert!(hub
        .notifier(Some(NOTIFICATION_CENTER), &Options::new())
        .unwrap()
        .is_some());
    assert!(hub.notifier(Some(GROWL), &Options::new()).unwrap().is_some());
}

#[test]
fn defaults_can_be_reordered() {
    let mut hub = Hub::new();
    register_defaults(&mut hub);
    let order = hub.prefer([GROWL]).unwrap();
    assert_eq!(order, [GROWL, NOTIFICATION_CENTER]);
}
