//! Device identity types.
//!
//! A device is a physical or virtual target capable of running client
//! applications, identified by a stable serial. Device lifecycle (discovery,
//! archival, disconnect) is owned by the surrounding tool; this crate only
//! reads the identity fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of device a store entry originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    /// Physical hardware connected over USB or network.
    Physical,
    /// Emulator or simulator instance.
    Emulator,
    /// Device reconstructed from a previously exported snapshot.
    Archived,
}

impl DeviceType {
    /// String form used in client identifiers and export JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Emulator => "emulator",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A connected (or archived) device.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    /// Stable serial number, unique per device instance.
    pub serial: String,
    /// Device kind.
    pub device_type: DeviceType,
    /// Human-readable display name.
    pub title: String,
    /// Platform string (e.g. "iOS", "Android").
    pub os: String,
}

impl Device {
    /// Create a new device.
    #[must_use]
    pub fn new(
        serial: impl Into<String>,
        device_type: DeviceType,
        title: impl Into<String>,
        os: impl Into<String>,
    ) -> Self {
        Self {
            serial: serial.into(),
            device_type,
            title: title.into(),
            os: os.into(),
        }
    }

    /// Derive the serializable export record for this device.
    #[must_use]
    pub fn info(&self) -> DeviceInfo {
        DeviceInfo {
            serial: self.serial.clone(),
            device_type: self.device_type,
            title: self.title.clone(),
            os: self.os.clone(),
        }
    }
}

/// Serializable device record embedded in export snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    /// Device serial number.
    pub serial: String,
    /// Device kind.
    pub device_type: DeviceType,
    /// Human-readable display name.
    pub title: String,
    /// Platform string.
    pub os: String,
}
