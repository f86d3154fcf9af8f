//! Wire schema for registration records and validation at the store boundary.
//!
//! The canonical object is:
//!
//! ```json
//! { "id": "1", "name": "Alex Rivera", "email": "alex@example.com",
//!   "registration_type": "professional", "company": "Tech Corp",
//!   "phone": "+1 (555) 123-4567", "created_at": "2024-03-10T10:30:00Z" }
//! ```
//!
//! `_id` is accepted for `id`, `registrationType` for `registration_type`
//! and `createdAt` for `created_at`. A record may carry both spellings of a
//! field as long as they agree. The type is matched case-insensitively.
//! Unknown fields are ignored.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::{RecordId, Registration, RegistrationType};
use crate::util::parse_created_at;

/// Why a single wire record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("record is not a JSON object: {0}")]
    NotAnObject(String),
    #[error("malformed record: {0}")]
    Malformed(String),
    #[error("missing or empty field '{0}'")]
    MissingField(&'static str),
    #[error("unknown registration type '{0}'")]
    UnknownType(String),
    #[error("invalid created_at '{0}'")]
    InvalidTimestamp(String),
    #[error("duplicate id '{0}'")]
    DuplicateId(String),
    #[error("conflicting values for '{0}'")]
    ConflictingField(&'static str),
}

/// A rejected record: its position in the payload, its id if one was
/// readable, and the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub index: usize,
    pub id: Option<String>,
    pub error: ValidationError,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(u64),
}

impl WireId {
    fn into_string(self) -> String {
        match self {
            WireId::Text(s) => s,
            WireId::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireRegistration {
    id: Option<WireId>,
    #[serde(rename = "_id")]
    mongo_id: Option<WireId>,
    name: Option<String>,
    email: Option<String>,
    registration_type: Option<String>,
    #[serde(rename = "registrationType")]
    registration_type_camel: Option<String>,
    company: Option<String>,
    phone: Option<String>,
    created_at: Option<String>,
    #[serde(rename = "createdAt")]
    created_at_camel: Option<String>,
}

/// Merges two spellings of one field. Empty strings count as absent; both
/// present must be equal.
fn reconcile(
    primary: Option<String>,
    secondary: Option<String>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    match (optional(primary), optional(secondary)) {
        (Some(a), Some(b)) if a != b => Err(ValidationError::ConflictingField(field)),
        (Some(a), _) => Ok(Some(a)),
        (None, b) => Ok(b),
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ValidationError::MissingField(field))
}

fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl WireRegistration {
    fn take_id(&mut self) -> Result<Option<String>, ValidationError> {
        reconcile(
            self.id.take().map(WireId::into_string),
            self.mongo_id.take().map(WireId::into_string),
            "id",
        )
    }

    fn into_registration(self, id: String) -> Result<Registration, ValidationError> {
        let name = required(self.name, "name")?;
        let email = required(self.email, "email")?;
        let raw_type = required(
            reconcile(
                self.registration_type,
                self.registration_type_camel,
                "registration_type",
            )?,
            "registration_type",
        )?;
        let registration_type =
            RegistrationType::parse(&raw_type).ok_or(ValidationError::UnknownType(raw_type))?;
        let raw_created = required(
            reconcile(self.created_at, self.created_at_camel, "created_at")?,
            "created_at",
        )?;
        let created_at = parse_created_at(&raw_created)
            .map_err(|_| ValidationError::InvalidTimestamp(raw_created))?;

        Ok(Registration {
            id: RecordId::new(id),
            name,
            email,
            registration_type,
            company: optional(self.company),
            phone: optional(self.phone),
            created_at,
        })
    }
}

fn decode_one(value: Value) -> Result<Registration, (Option<String>, ValidationError)> {
    if !value.is_object() {
        return Err((None, ValidationError::NotAnObject(value.to_string())));
    }
    let mut wire: WireRegistration = serde_json::from_value(value)
        .map_err(|e| (None, ValidationError::Malformed(e.to_string())))?;
    let id = match wire.take_id().map_err(|e| (None, e))? {
        Some(id) => id,
        None => return Err((None, ValidationError::MissingField("id"))),
    };
    wire.into_registration(id.clone()).map_err(|e| (Some(id), e))
}

/// Decodes a payload array into validated records.
///
/// Invalid records are skipped and returned as [`Rejection`]s; the relative
/// order of accepted records is preserved. The first occurrence of an id
/// wins, later duplicates are rejected.
pub fn decode_records(values: Vec<Value>) -> (Vec<Registration>, Vec<Rejection>) {
    let mut records = Vec::with_capacity(values.len());
    let mut rejected = Vec::new();
    let mut seen: HashSet<RecordId> = HashSet::with_capacity(values.len());

    for (index, value) in values.into_iter().enumerate() {
        match decode_one(value) {
            Ok(record) if seen.contains(&record.id) => {
                let id = record.id.to_string();
                warn!(index, id = %id, "rejecting duplicate registration id");
                rejected.push(Rejection {
                    index,
                    id: Some(id.clone()),
                    error: ValidationError::DuplicateId(id),
                });
            }
            Ok(record) => {
                seen.insert(record.id.clone());
                records.push(record);
            }
            Err((id, error)) => {
                warn!(index, id = ?id, error = %error, "rejecting invalid registration");
                rejected.push(Rejection { index, id, error });
            }
        }
    }

    (records, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: Value) -> (Vec<Registration>, Vec<Rejection>) {
        match value {
            Value::Array(items) => decode_records(items),
            other => panic!("expected array, got {other}"),
        }
    }

    #[test]
    fn decodes_canonical_record() {
        let (records, rejected) = decode(json!([{
            "id": "1",
            "name": "Alex Rivera",
            "email": "alex@example.com",
            "registration_type": "professional",
            "company": "Tech Corp",
            "phone": "+1 (555) 123-4567",
            "created_at": "2024-03-10T10:30:00Z"
        }]));
        assert!(rejected.is_empty());
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.id.as_str(), "1");
        assert_eq!(r.registration_type, RegistrationType::Professional);
        assert_eq!(r.company.as_deref(), Some("Tech Corp"));
        assert_eq!(r.phone.as_deref(), Some("+1 (555) 123-4567"));
    }

    #[test]
    fn accepts_mongo_style_variant() {
        let (records, rejected) = decode(json!([{
            "_id": "65f1c0ffee",
            "name": "Sarah Chen",
            "email": "sarah.c@uni.edu",
            "registration_type": "Student",
            "createdAt": "2024-03-11T14:20:00.000Z",
            "updatedAt": "2024-03-11T14:20:00.000Z",
            "__v": 0
        }]));
        assert!(rejected.is_empty());
        assert_eq!(records[0].id.as_str(), "65f1c0ffee");
        assert_eq!(records[0].registration_type, RegistrationType::Student);
        assert_eq!(records[0].company, None);
    }

    #[test]
    fn numeric_ids_and_date_only_timestamps() {
        let (records, rejected) = decode(json!([
            {"id": 1, "name": "A", "email": "a@x", "registration_type": "student", "created_at": "2024-03-10"}
        ]));
        assert!(rejected.is_empty());
        assert_eq!(records[0].id.as_str(), "1");
    }

    #[test]
    fn empty_optional_fields_are_absent() {
        let (records, _) = decode(json!([{
            "id": "1", "name": "A", "email": "a@x", "registration_type": "professional",
            "company": "", "phone": "", "created_at": "2024-03-10"
        }]));
        assert_eq!(records[0].company, None);
        assert_eq!(records[0].phone, None);
    }

    #[test]
    fn invalid_records_are_rejected_and_order_is_kept() {
        let (records, rejected) = decode(json!([
            {"id": "1", "name": "A", "email": "a@x", "registration_type": "student", "created_at": "2024-03-10"},
            {"id": "2", "email": "b@x", "registration_type": "student", "created_at": "2024-03-10"},
            {"id": "3", "name": "C", "email": "c@x", "registration_type": "speaker", "created_at": "2024-03-10"},
            {"id": "4", "name": "D", "email": "d@x", "registration_type": "student", "created_at": "not a date"},
            {"name": "E", "email": "e@x", "registration_type": "student", "created_at": "2024-03-10"},
            42,
            {"id": "1", "name": "Dup", "email": "dup@x", "registration_type": "student", "created_at": "2024-03-10"},
            {"id": "8", "name": "H", "email": "h@x", "registration_type": "professional", "created_at": "2024-03-12"}
        ]));

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "8"]);

        let reasons: Vec<(usize, &ValidationError)> =
            rejected.iter().map(|r| (r.index, &r.error)).collect();
        assert_eq!(reasons.len(), 6);
        assert_eq!(reasons[0], (1, &ValidationError::MissingField("name")));
        assert_eq!(
            reasons[1],
            (2, &ValidationError::UnknownType("speaker".to_string()))
        );
        assert_eq!(
            reasons[2],
            (3, &ValidationError::InvalidTimestamp("not a date".to_string()))
        );
        assert_eq!(reasons[3], (4, &ValidationError::MissingField("id")));
        assert!(matches!(reasons[4], (5, ValidationError::NotAnObject(_))));
        assert_eq!(
            reasons[5],
            (6, &ValidationError::DuplicateId("1".to_string()))
        );
        assert_eq!(rejected[0].id.as_deref(), Some("2"));
    }

    #[test]
    fn wrong_field_type_is_rejected_not_fatal() {
        let (records, rejected) = decode(json!([
            {"id": "1", "name": 5, "email": "a@x", "registration_type": "student", "created_at": "2024-03-10"},
            {"id": "2", "name": "B", "email": "b@x", "registration_type": "student", "created_at": "2024-03-10"}
        ]));
        assert_eq!(records.len(), 1);
        assert_eq!(rejected.len(), 1);
        assert!(matches!(rejected[0].error, ValidationError::Malformed(_)));
    }

    #[test]
    fn both_id_spellings_are_accepted_when_equal() {
        let (records, rejected) = decode(json!([{
            "_id": "65f1",
            "id": "65f1",
            "name": "Sarah Chen",
            "email": "sarah.c@uni.edu",
            "registration_type": "student",
            "created_at": "2024-03-11T14:20:00Z",
            "createdAt": "2024-03-11T14:20:00Z"
        }]));
        assert!(rejected.is_empty(), "{rejected:?}");
        assert_eq!(records[0].id.as_str(), "65f1");
    }

    #[test]
    fn conflicting_spellings_are_rejected() {
        let (records, rejected) = decode(json!([
            {"_id": "65f1", "id": "65f2", "name": "A", "email": "a@x",
             "registration_type": "student", "created_at": "2024-03-10"},
            {"id": "2", "name": "B", "email": "b@x", "registration_type": "student",
             "created_at": "2024-03-10", "createdAt": "2024-03-11"},
            {"id": "3", "name": "C", "email": "c@x", "registration_type": "student",
             "registrationType": "professional", "created_at": "2024-03-10"}
        ]));
        assert!(records.is_empty());
        let errors: Vec<&ValidationError> = rejected.iter().map(|r| &r.error).collect();
        assert_eq!(
            errors,
            vec![
                &ValidationError::ConflictingField("id"),
                &ValidationError::ConflictingField("created_at"),
                &ValidationError::ConflictingField("registration_type"),
            ]
        );
        assert_eq!(rejected[1].id.as_deref(), Some("2"));
    }
}
