//! Typed plugin registry.
//!
//! Plugins operate either at device scope or at client scope. The registry
//! maps plugin ids to their capability and answers explicit lookups; there
//! is no runtime type inspection.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Scope a plugin operates at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginCapability {
    /// Plugin attaches to a device and holds state keyed by serial.
    Device,
    /// Plugin attaches to a client and holds state keyed by client id.
    Client,
}

/// Registry of known plugin definitions keyed by plugin id.
#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
    plugins: HashMap<String, PluginCapability>,
}

impl PluginRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin with its capability. Re-registering replaces the
    /// previous capability.
    pub fn register(&mut self, id: impl Into<String>, capability: PluginCapability) {
        self.plugins.insert(id.into(), capability);
    }

    /// Look up the capability of a plugin.
    #[must_use]
    pub fn capability(&self, id: &str) -> Option<PluginCapability> {
        self.plugins.get(id).copied()
    }

    /// Whether the plugin is registered as device-scoped.
    #[must_use]
    pub fn is_device_plugin(&self, id: &str) -> bool {
        matches!(self.capability(id), Some(PluginCapability::Device))
    }

    /// Number of registered plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
