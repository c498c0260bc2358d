//! Outbound payload construction.

use serde::Serialize;

use crate::extract::ExtractedInfo;
use crate::record::IncidentRecord;

/// Flat JSON message forwarded to the incident-processing endpoint.
///
/// The endpoint relies on a stable six-key shape: every field is a string
/// and every key is present even when its value is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchPayload {
    pub incident_id: String,
    pub description: String,
    pub priority: String,
    pub reported_by: String,
    pub server_name: String,
    pub server_ip: String,
}

/// Assemble the outbound payload from the record and the extracted fields.
///
/// Pure and deterministic; string coercion happens here and nowhere else.
/// Values are forwarded verbatim, without validation.
#[must_use]
pub fn build(record: &IncidentRecord, extracted: &ExtractedInfo) -> DispatchPayload {
    DispatchPayload {
        incident_id: record.number.clone(),
        description: record.short_description.clone(),
        priority: record.priority.clone(),
        reported_by: record.sys_created_by.clone(),
        server_name: extracted.server_name.clone(),
        server_ip: extracted.server_ip.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract;

    fn record() -> IncidentRecord {
        IncidentRecord {
            number: "INC0010042".to_string(),
            short_description: "SSH Connection Failure: web-prod-01".to_string(),
            priority: "1".to_string(),
            sys_created_by: "monitoring".to_string(),
            server_ip: Some("10.0.0.5".to_string()),
        }
    }

    #[test]
    fn test_builds_all_fields() {
        let rec = record();
        let payload = build(&rec, &extract::extract(&rec));

        assert_eq!(payload.incident_id, "INC0010042");
        assert_eq!(payload.description, "SSH Connection Failure: web-prod-01");
        assert_eq!(payload.priority, "1");
        assert_eq!(payload.reported_by, "monitoring");
        assert_eq!(payload.server_name, "web-prod-01");
        assert_eq!(payload.server_ip, "10.0.0.5");
    }

    #[test]
    fn test_serializes_exactly_six_string_keys() {
        let rec = IncidentRecord {
            number: "INC0010043".to_string(),
            short_description: "Disk full".to_string(),
            priority: "3".to_string(),
            sys_created_by: "alice".to_string(),
            server_ip: None,
        };
        let payload = build(&rec, &extract::extract(&rec));

        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 6);
        for key in [
            "incident_id",
            "description",
            "priority",
            "reported_by",
            "server_name",
            "server_ip",
        ] {
            assert!(object[key].is_string(), "{key} must be a string");
        }
        // Missing sources degrade to empty strings, never dropped keys.
        assert_eq!(object["server_name"], "");
        assert_eq!(object["server_ip"], "");
    }

    #[test]
    fn test_garbage_forwarded_verbatim() {
        let rec = IncidentRecord {
            number: "???".to_string(),
            short_description: "\u{0}weird\n".to_string(),
            priority: "not-a-priority".to_string(),
            sys_created_by: String::new(),
            server_ip: Some("not an ip".to_string()),
        };
        let payload = build(&rec, &extract::extract(&rec));

        assert_eq!(payload.incident_id, "???");
        assert_eq!(payload.priority, "not-a-priority");
        assert_eq!(payload.server_ip, "not an ip");
    }
}
