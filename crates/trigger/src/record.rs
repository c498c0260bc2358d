//! Incident record snapshot and the write-back seam to the record store.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::TriggerError;

/// Snapshot of an incident record as presented at trigger time.
///
/// Owned by the external record store; this system only reads it. The one
/// mutation this trigger performs (the work note) goes through
/// [`RecordStore`], never through this struct.
#[derive(Debug, Clone, Deserialize)]
pub struct IncidentRecord {
    /// Record identifier (e.g. `INC0010042`).
    pub number: String,
    /// Free-text short description; extraction source.
    pub short_description: String,
    /// Priority as the store presents it (enum-like string).
    pub priority: String,
    /// Identity that created the record.
    pub sys_created_by: String,
    /// Server network address field; may be absent or empty.
    #[serde(default)]
    pub server_ip: Option<String>,
}

/// Write access to the record store, limited to the single mutation this
/// trigger performs.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Append a work note to the record and persist that one field update.
    ///
    /// The store guarantees this update does not re-fire the trigger
    /// recursively; this method issues exactly one update call.
    async fn append_work_note(&self, number: &str, note: &str) -> Result<(), TriggerError>;
}
