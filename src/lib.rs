//! Device-scoped export snapshots for debug-tool application state.
//!
//! A debugging tool keeps one in-memory store for all connected devices:
//! clients (app instances), per-plugin state, and pending notifications.
//! This library filters that global store down to the data attributable to
//! a single selected device and packages it as a serializable snapshot.
//!
//! # Modules
//!
//! - `device`: Device identity and the serializable device export record
//! - `client`: Connected application instances and their identifiers
//! - `plugin`: Typed plugin registry with device/client capabilities
//! - `key`: Structured plugin-state keys and the ordered state map
//! - `notification`: Plugin-raised alerts scoped to a client or device
//! - `snapshot`: The filtering pass that builds a device-scoped snapshot
//! - `export`: Versioned export-file wrapper with JSON serialization
//! - `error`: Error types
#![forbid(unsafe_code)]

pub mod client;
pub mod device;
pub mod error;
pub mod export;
pub mod key;
pub mod notification;
pub mod plugin;
pub mod snapshot;
