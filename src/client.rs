//! Connected application instances.
//!
//! Each client represents one app running on some device. The conventional
//! identifier `app#os#deviceType#serial` associates a client with exactly
//! one device; the embedded `device_id` carries the same serial in
//! structured form and is what the snapshot builder matches on.

use serde::{Deserialize, Serialize};

use crate::device::Device;

/// Connection query describing where a client runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientQuery {
    /// Application name.
    pub app: String,
    /// Platform string.
    pub os: String,
    /// Device kind string (e.g. "emulator").
    pub device: String,
    /// Serial of the device this client runs on.
    pub device_id: String,
}

/// One connected application instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Opaque identifier, conventionally `app#os#deviceType#serial`.
    pub id: String,
    /// Structured connection query.
    pub query: ClientQuery,
}

impl Client {
    /// Build the client record for an app running on the given device.
    #[must_use]
    pub fn from_device(device: &Device, app: &str) -> Self {
        Self {
            id: client_identifier(device, app),
            query: ClientQuery {
                app: app.to_string(),
                os: device.os.clone(),
                device: device.device_type.as_str().to_string(),
                device_id: device.serial.clone(),
            },
        }
    }

    /// Serial of the device this client belongs to.
    #[must_use]
    pub fn device_serial(&self) -> &str {
        &self.query.device_id
    }
}

/// Conventional client identifier: `app#os#deviceType#serial`.
#[must_use]
pub fn client_identifier(device: &Device, app: &str) -> String {
    format!(
        "{app}#{os}#{device_type}#{serial}",
        os = device.os,
        device_type = device.device_type,
        serial = device.serial
    )
}
