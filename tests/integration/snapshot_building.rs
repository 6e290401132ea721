//! End-to-end snapshot filtering across a multi-device store.

use serde_json::json;

use snap::key::{PluginStateMap, StateKey};
use snap::plugin::{PluginCapability, PluginRegistry};
use snap::snapshot::build_snapshot;

use crate::common::{fixtures, logging};

#[test]
fn test_mixed_store_is_filtered_to_selected_device() {
    logging::init();

    let phone = fixtures::emulator("serial-a");
    let pixel = fixtures::physical("serial-b");

    let phone_app1 = fixtures::client(&phone, "mailapp");
    let phone_app2 = fixtures::client(&phone, "chatapp");
    let pixel_app = fixtures::client(&pixel, "mailapp");

    let mut registry = PluginRegistry::new();
    registry.register("CrashReporter", PluginCapability::Device);
    registry.register("Inspector", PluginCapability::Client);

    let mut states = PluginStateMap::new();
    states.insert(
        StateKey::for_client(&phone_app1.id, "Inspector"),
        json!({"nodes": 12}),
    );
    states.insert(
        StateKey::for_client(&pixel_app.id, "Inspector"),
        json!({"nodes": 4}),
    );
    states.insert(
        StateKey::for_device("serial-a", "CrashReporter"),
        json!({"crashes": []}),
    );
    states.insert(
        StateKey::for_device("serial-b", "CrashReporter"),
        json!({"crashes": [1]}),
    );
    states.insert(
        StateKey::for_client(&phone_app2.id, "Inspector"),
        json!({"nodes": 7}),
    );

    let notifications = vec![
        fixtures::client_notification("Inspector", &phone_app1.id, "n1"),
        fixtures::client_notification("Inspector", &pixel_app.id, "n2"),
        fixtures::device_notification("CrashReporter", "n3"),
        fixtures::device_notification("UnregisteredPlugin", "n4"),
    ];

    let clients = vec![phone_app1.clone(), pixel_app, phone_app2.clone()];
    let snapshot = build_snapshot(&notifications, Some(&phone), &states, &clients, &registry)
        .expect("a selected device must produce a snapshot");

    // Clients: only the phone's, in input order.
    assert_eq!(snapshot.clients, vec![phone_app1.clone(), phone_app2.clone()]);

    // States: both phone clients plus the phone's device plugin, source
    // order preserved.
    let kept: Vec<StateKey> = snapshot.store.plugin_states.keys().cloned().collect();
    assert_eq!(
        kept,
        vec![
            StateKey::for_client(&phone_app1.id, "Inspector"),
            StateKey::for_device("serial-a", "CrashReporter"),
            StateKey::for_client(&phone_app2.id, "Inspector"),
        ]
    );

    // Notifications: the phone client's and the registered device plugin's.
    let ids: Vec<&str> = snapshot
        .store
        .active_notifications
        .iter()
        .map(|active| active.notification.id.as_str())
        .collect();
    assert_eq!(ids, vec!["n1", "n3"]);
}

#[test]
fn test_switching_selected_device_selects_the_other_half() {
    logging::init();

    let phone = fixtures::emulator("serial-a");
    let pixel = fixtures::physical("serial-b");
    let phone_app = fixtures::client(&phone, "mailapp");
    let pixel_app = fixtures::client(&pixel, "mailapp");

    let mut states = PluginStateMap::new();
    states.insert(StateKey::for_client(&phone_app.id, "Logs"), json!({"n": 1}));
    states.insert(StateKey::for_client(&pixel_app.id, "Logs"), json!({"n": 2}));

    let clients = vec![phone_app.clone(), pixel_app.clone()];
    let registry = PluginRegistry::new();

    let for_phone = build_snapshot(&[], Some(&phone), &states, &clients, &registry).unwrap();
    let for_pixel = build_snapshot(&[], Some(&pixel), &states, &clients, &registry).unwrap();

    assert_eq!(for_phone.clients, vec![phone_app.clone()]);
    assert_eq!(for_pixel.clients, vec![pixel_app.clone()]);
    assert!(
        for_phone
            .store
            .plugin_states
            .contains_key(&StateKey::for_client(&phone_app.id, "Logs"))
    );
    assert!(
        !for_phone
            .store
            .plugin_states
            .contains_key(&StateKey::for_client(&pixel_app.id, "Logs"))
    );
    assert!(
        for_pixel
            .store
            .plugin_states
            .contains_key(&StateKey::for_client(&pixel_app.id, "Logs"))
    );
}

#[test]
fn test_repeated_builds_are_identical() {
    logging::init();

    let phone = fixtures::emulator("serial-a");
    let app = fixtures::client(&phone, "mailapp");
    let mut states = PluginStateMap::new();
    states.insert(StateKey::for_client(&app.id, "Logs"), json!({"n": 1}));
    let clients = vec![app];
    let registry = PluginRegistry::new();

    let first = build_snapshot(&[], Some(&phone), &states, &clients, &registry);
    let second = build_snapshot(&[], Some(&phone), &states, &clients, &registry);
    assert_eq!(first, second);
}
