//! Fixture builders for devices, clients, and notifications.

use snap::client::Client;
use snap::device::{Device, DeviceType};
use snap::notification::{ActiveNotification, Notification, Severity};

/// An emulator device with fixed display fields.
pub fn emulator(serial: &str) -> Device {
    Device::new(serial, DeviceType::Emulator, "TestiPhone", "iOS")
}

/// A physical device with fixed display fields.
pub fn physical(serial: &str) -> Device {
    Device::new(serial, DeviceType::Physical, "TestPixel", "Android")
}

/// A client for an app running on the given device.
pub fn client(device: &Device, app: &str) -> Client {
    Client::from_device(device, app)
}

/// A client-scoped warning notification.
pub fn client_notification(plugin_id: &str, client_id: &str, notification_id: &str) -> ActiveNotification {
    ActiveNotification {
        plugin_id: plugin_id.to_string(),
        notification: Notification::new(
            notification_id,
            "title",
            "Notification Message",
            Severity::Warning,
        ),
        client: Some(client_id.to_string()),
    }
}

/// A device-scoped error notification.
pub fn device_notification(plugin_id: &str, notification_id: &str) -> ActiveNotification {
    ActiveNotification {
        plugin_id: plugin_id.to_string(),
        notification: Notification::new(notification_id, "title", "Device alert", Severity::Error),
        client: None,
    }
}
