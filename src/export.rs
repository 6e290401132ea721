//! Versioned export-file wrapper.
//!
//! A snapshot on its own has no header; the export wrapper adds the file
//! format version and the export timestamp so surrounding tooling can write
//! it to disk or ship it over a transport and later re-import it. Writing
//! the file is the caller's job; this module only produces and parses JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::snapshot::Snapshot;

/// Current export file format version.
pub const FILE_VERSION: &str = "1.0.0";

/// A snapshot wrapped with export metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFile {
    /// Export file format version.
    pub file_version: String,
    /// When the export was produced.
    pub exported_at: DateTime<Utc>,
    /// The device-scoped snapshot.
    #[serde(flatten)]
    pub snapshot: Snapshot,
}

impl ExportFile {
    /// Wrap a snapshot with the current format version and timestamp.
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            file_version: FILE_VERSION.to_string(),
            exported_at: Utc::now(),
            snapshot,
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse an export file from JSON.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
