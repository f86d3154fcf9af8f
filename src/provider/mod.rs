//! Record source abstraction.
//!
//! This module defines the `RecordSource` trait that lets the dashboard
//! obtain registrations from different places (the backend store over HTTP,
//! or a static fixture) through one interface.

mod fixture;
mod http;

pub use fixture::FixtureSource;
pub use http::{DEFAULT_ENDPOINT, HttpSource};

use std::path::PathBuf;

use serde_json::Value;

use crate::model::{Registration, Rejection, decode_records};

/// The collection could not be obtained. Fetches are all-or-nothing, so
/// this is the only error that crosses the source boundary.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    /// Network or transport failure (refused, timed out, reset).
    #[error("transport error: {0}")]
    Transport(String),
    /// The store answered with a non-success status.
    #[error("unexpected status {code}")]
    Status { code: u16 },
    /// The body was not a JSON array of records.
    #[error("unreadable payload: {0}")]
    Payload(String),
    /// A fixture file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result of one successful fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Validated records in store order.
    pub records: Vec<Registration>,
    /// Records dropped at the boundary.
    pub rejected: Vec<Rejection>,
}

impl LoadReport {
    /// Validates a raw payload. Anything other than a JSON array is a
    /// [`ConnectionError::Payload`].
    pub fn from_payload(payload: Value) -> Result<Self, ConnectionError> {
        match payload {
            Value::Array(items) => {
                let (records, rejected) = decode_records(items);
                Ok(Self { records, rejected })
            }
            other => Err(ConnectionError::Payload(format!(
                "expected a JSON array, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Parses and validates a raw JSON body.
    pub fn from_slice(body: &[u8]) -> Result<Self, ConnectionError> {
        let payload: Value =
            serde_json::from_slice(body).map_err(|e| ConnectionError::Payload(e.to_string()))?;
        Self::from_payload(payload)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Abstraction for registration data sources.
///
/// - `HttpSource`: the backend store's `GET /api/registrations`
/// - `FixtureSource`: built-in sample data or a JSON file
///
/// The trait is object-safe and used as `Box<dyn RecordSource + Send + Sync>`
/// so that a fetch can run on a worker thread.
pub trait RecordSource {
    /// Returns the complete, unfiltered collection.
    ///
    /// Called once per session and again on an explicit re-sync.
    /// No partial results: either every record is delivered (minus the
    /// ones rejected by validation) or the call fails.
    fn fetch_all(&self) -> Result<LoadReport, ConnectionError>;

    /// Short human-readable description for the header and logs.
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_must_be_an_array() {
        let err = LoadReport::from_payload(json!({"message": "Failed to fetch registrations"}))
            .unwrap_err();
        assert!(matches!(err, ConnectionError::Payload(ref m) if m.contains("an object")));

        let err = LoadReport::from_slice(b"<html>").unwrap_err();
        assert!(matches!(err, ConnectionError::Payload(_)));
    }

    #[test]
    fn test_empty_array_is_an_empty_report() {
        let report = LoadReport::from_slice(b"[]").unwrap();
        assert!(report.records.is_empty());
        assert!(report.rejected.is_empty());
    }

    #[test]
    fn test_report_keeps_rejections() {
        let report = LoadReport::from_payload(json!([
            {"id": "1", "name": "A", "email": "a@x", "registration_type": "student", "created_at": "2024-03-10"},
            {"id": "2", "name": "B", "email": "b@x", "registration_type": "robot", "created_at": "2024-03-10"}
        ]))
        .unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].index, 1);
    }
}
