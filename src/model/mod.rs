//! Registration records as held in memory.
//!
//! Records are decoded and validated once at the wire boundary (see [`wire`])
//! and are read-only from then on.

pub mod wire;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use wire::{Rejection, ValidationError, decode_records};

/// Opaque record identifier assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registration track. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationType {
    Student,
    Professional,
}

impl RegistrationType {
    /// Display label used in tables and the type filter.
    pub fn label(&self) -> &'static str {
        match self {
            RegistrationType::Student => "Student",
            RegistrationType::Professional => "Professional",
        }
    }

    /// Parses a wire value. Letter case is not significant.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("student") {
            Some(RegistrationType::Student)
        } else if value.eq_ignore_ascii_case("professional") {
            Some(RegistrationType::Professional)
        } else {
            None
        }
    }
}

impl fmt::Display for RegistrationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One applicant submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub registration_type: RegistrationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Registration {
    pub fn is_professional(&self) -> bool {
        self.registration_type == RegistrationType::Professional
    }

    /// Company as it should be displayed: only professionals show one,
    /// even if the store kept a value for a student.
    pub fn display_company(&self) -> Option<&str> {
        if self.is_professional() {
            self.company.as_deref()
        } else {
            None
        }
    }

    /// Case-insensitive literal substring match against name or email.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn reg(kind: RegistrationType, company: Option<&str>) -> Registration {
        Registration {
            id: RecordId::new("1"),
            name: "Alex Rivera".to_string(),
            email: "alex@example.com".to_string(),
            registration_type: kind,
            company: company.map(str::to_string),
            phone: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 10, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn registration_type_parse_ignores_case() {
        assert_eq!(
            RegistrationType::parse("student"),
            Some(RegistrationType::Student)
        );
        assert_eq!(
            RegistrationType::parse("Professional"),
            Some(RegistrationType::Professional)
        );
        assert_eq!(
            RegistrationType::parse("STUDENT"),
            Some(RegistrationType::Student)
        );
        assert_eq!(RegistrationType::parse("speaker"), None);
        assert_eq!(RegistrationType::parse(""), None);
    }

    #[test]
    fn company_is_hidden_for_students() {
        let student = reg(RegistrationType::Student, Some("Uni Lab"));
        assert_eq!(student.display_company(), None);

        let pro = reg(RegistrationType::Professional, Some("Tech Corp"));
        assert_eq!(pro.display_company(), Some("Tech Corp"));

        let pro_without = reg(RegistrationType::Professional, None);
        assert_eq!(pro_without.display_company(), None);
    }

    #[test]
    fn search_matches_name_or_email_case_insensitively() {
        let r = reg(RegistrationType::Professional, None);
        assert!(r.matches_search(""));
        assert!(r.matches_search("rivera"));
        assert!(r.matches_search("example.com"));
        assert!(!r.matches_search("sarah"));
        // No trimming: a trailing space is part of the needle.
        assert!(!r.matches_search("rivera "));
    }

    #[test]
    fn serializes_to_canonical_schema() {
        let r = reg(RegistrationType::Professional, Some("Tech Corp"));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["registration_type"], "professional");
        assert_eq!(json["company"], "Tech Corp");
        assert!(json.get("phone").is_none());
        assert_eq!(json["created_at"], "2024-03-10T10:30:00Z");
    }
}
