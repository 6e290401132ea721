//! Structured plugin-state keys.
//!
//! The store keys plugin state by owner and plugin. The legacy wire form is
//! the composite string `<scope>#<pluginId>` where scope is a client id or
//! a device serial; client ids themselves contain `#`, so the wire form is
//! split at the LAST separator. Plugin ids must not contain `#` for the
//! wire form to round-trip; scopes may.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SnapError;

/// Key of one plugin-state entry: which scope owns it and which plugin
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey {
    /// Owning scope: a client id or a device serial.
    pub scope: String,
    /// Plugin that produced the state.
    pub plugin_id: String,
}

impl StateKey {
    /// Key for state owned by a client.
    #[must_use]
    pub fn for_client(client_id: impl Into<String>, plugin_id: impl Into<String>) -> Self {
        Self {
            scope: client_id.into(),
            plugin_id: plugin_id.into(),
        }
    }

    /// Key for state owned by a device.
    #[must_use]
    pub fn for_device(serial: impl Into<String>, plugin_id: impl Into<String>) -> Self {
        Self {
            scope: serial.into(),
            plugin_id: plugin_id.into(),
        }
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.scope, self.plugin_id)
    }
}

impl FromStr for StateKey {
    type Err = SnapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Last separator: scopes may contain '#', plugin ids may not.
        let (scope, plugin_id) =
            s.rsplit_once('#')
                .ok_or_else(|| SnapError::MalformedStateKey {
                    key: s.to_string(),
                })?;
        if scope.is_empty() || plugin_id.is_empty() {
            return Err(SnapError::MalformedStateKey {
                key: s.to_string(),
            });
        }
        Ok(Self {
            scope: scope.to_string(),
            plugin_id: plugin_id.to_string(),
        })
    }
}

impl Serialize for StateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Plugin state for all scopes, in insertion order.
///
/// Payloads are opaque to this crate; they are carried as raw JSON values.
pub type PluginStateMap = IndexMap<StateKey, serde_json::Value>;
