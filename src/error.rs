//! Error types for snapshot and export operations.

use thiserror::Error;

/// Primary error type for snapshot operations.
///
/// The snapshot builder itself is total: an absent device yields `None` and
/// unmatched entries are dropped, never raised. Errors only arise at the
/// edges, when parsing legacy state keys or serializing an export file.
#[derive(Error, Debug)]
pub enum SnapError {
    #[error("Malformed plugin state key '{key}': expected '<scope>#<pluginId>'")]
    MalformedStateKey { key: String },

    #[error("Export serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using SnapError.
pub type Result<T> = std::result::Result<T, SnapError>;
