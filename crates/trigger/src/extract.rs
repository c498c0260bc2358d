//! Field extraction from the record's free-text description.

use std::sync::OnceLock;

use regex::Regex;

use crate::record::IncidentRecord;

static SERVER_NAME_RE: OnceLock<Regex> = OnceLock::new();

/// Pattern recovering the server name from an SSH failure description.
///
/// The capture is greedy to end of input on purpose: anything after the
/// marker belongs to the server-name field and is only whitespace-trimmed.
fn server_name_re() -> &'static Regex {
    SERVER_NAME_RE.get_or_init(|| {
        Regex::new(r"SSH Connection Failure:\s*(.+)").expect("Invalid server name pattern")
    })
}

/// Fields derived from the record. Lives for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedInfo {
    /// Server name from the description, or `""` when the pattern misses.
    pub server_name: String,
    /// Server address from the record field, or `""` when absent.
    pub server_ip: String,
}

/// Derive server identity from the record.
///
/// A description without the SSH failure marker is not an error; both
/// fields degrade to the empty string and the pipeline continues.
#[must_use]
pub fn extract(record: &IncidentRecord) -> ExtractedInfo {
    let server_name = server_name_re()
        .captures(&record.short_description)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    let server_ip = record
        .server_ip
        .as_deref()
        .unwrap_or_default()
        .to_string();

    ExtractedInfo {
        server_name,
        server_ip,
    }
}
