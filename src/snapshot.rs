//! Device-scoped snapshot building.
//!
//! The filtering pass over the global store: given the selected device, the
//! known clients, the plugin-state map, and pending notifications, keep
//! only what is attributable to the selected device and package it for
//! export. The pass is pure and makes a single linear scan over each input.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::client::Client;
use crate::device::{Device, DeviceInfo};
use crate::key::PluginStateMap;
use crate::notification::ActiveNotification;
use crate::plugin::PluginRegistry;

/// Store contents surviving the device filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreExport {
    /// Plugin state for the selected device and its clients, source order
    /// preserved.
    pub plugin_states: PluginStateMap,
    /// Pending notifications scoped to the selected device or its clients.
    pub active_notifications: Vec<ActiveNotification>,
}

/// The filtered, device-scoped export payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The selected device's public fields.
    pub device: DeviceInfo,
    /// Clients running on the selected device, input order preserved.
    pub clients: Vec<Client>,
    /// Filtered store contents.
    pub store: StoreExport,
}

/// Build a snapshot of the store limited to the selected device.
///
/// Returns `None` when no device is selected; there is nothing to export
/// and that is not an error. Empty input collections are valid and yield
/// empty output fields.
///
/// A plugin-state entry survives when its scope is one of the surviving
/// clients, or when its scope is the device serial and its plugin is
/// registered device-scoped. A notification survives when it names a
/// surviving client, or carries no client and its plugin is registered
/// device-scoped. Everything else is dropped silently: state left behind
/// by disconnected or unselected sources is garbage, not a fault.
#[must_use]
pub fn build_snapshot(
    notifications: &[ActiveNotification],
    selected_device: Option<&Device>,
    plugin_states: &PluginStateMap,
    clients: &[Client],
    device_plugins: &PluginRegistry,
) -> Option<Snapshot> {
    let Some(device) = selected_device else {
        debug!("no device selected, nothing to export");
        return None;
    };

    debug!(
        serial = %device.serial,
        clients = clients.len(),
        states = plugin_states.len(),
        notifications = notifications.len(),
        "building device snapshot"
    );

    // Stable filter: surviving clients keep their input order.
    let selected_clients: Vec<Client> = clients
        .iter()
        .filter(|client| client.device_serial() == device.serial)
        .cloned()
        .collect();

    let client_ids: HashSet<&str> = selected_clients
        .iter()
        .map(|client| client.id.as_str())
        .collect();

    let plugin_states_out: PluginStateMap = plugin_states
        .iter()
        .filter(|(key, _)| {
            let keep = client_ids.contains(key.scope.as_str())
                || (key.scope == device.serial && device_plugins.is_device_plugin(&key.plugin_id));
            if !keep {
                trace!(scope = %key.scope, plugin = %key.plugin_id, "dropping state entry");
            }
            keep
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let active_notifications: Vec<ActiveNotification> = notifications
        .iter()
        .filter(|active| match &active.client {
            Some(client_id) => client_ids.contains(client_id.as_str()),
            None => device_plugins.is_device_plugin(&active.plugin_id),
        })
        .cloned()
        .collect();

    debug!(
        clients = selected_clients.len(),
        states = plugin_states_out.len(),
        notifications = active_notifications.len(),
        "snapshot built"
    );

    Some(Snapshot {
        device: device.info(),
        clients: selected_clients,
        store: StoreExport {
            plugin_states: plugin_states_out,
            active_notifications,
        },
    })
}
