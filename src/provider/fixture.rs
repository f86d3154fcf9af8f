//! Static record source: the built-in sample set or a JSON file.
//!
//! Both go through the same wire decoding as the HTTP source, so a fixture
//! behaves exactly like a store response with the same body.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use tracing::info;

use super::{ConnectionError, LoadReport, RecordSource};

const SAMPLE_REGISTRATIONS: &str = r#"[
  {"id": "1", "name": "Alex Rivera", "email": "alex@example.com", "registration_type": "Professional", "company": "Tech Corp", "phone": "+1 (555) 123-4567", "created_at": "2024-03-10T10:30:00Z"},
  {"id": "2", "name": "Sarah Chen", "email": "sarah.c@uni.edu", "registration_type": "Student", "phone": "+1 (555) 987-6543", "created_at": "2024-03-11T14:20:00Z"},
  {"id": "3", "name": "Marcus Johnson", "email": "marcus.j@innovate.io", "registration_type": "Professional", "company": "Innovate AI", "created_at": "2024-03-12T09:15:00Z"},
  {"id": "4", "name": "Elena Rodriguez", "email": "elena.r@stanford.edu", "registration_type": "Student", "created_at": "2024-03-08T16:45:00Z"},
  {"id": "5", "name": "David Kim", "email": "d.kim@globalsoft.com", "registration_type": "Professional", "company": "GlobalSoft", "phone": "+1 (555) 234-5678", "created_at": "2024-03-13T11:00:00Z"},
  {"id": "6", "name": "Jamie Vardy", "email": "jvardy@college.ac.uk", "registration_type": "Student", "created_at": "2024-03-14T08:30:00Z"},
  {"id": "7", "name": "Samantha Wu", "email": "swu@design.studio", "registration_type": "Professional", "company": "Creative Edge", "phone": "+1 (555) 345-6789", "created_at": "2024-03-05T13:10:00Z"},
  {"id": "8", "name": "Robert Brown", "email": "rbrown@stateu.edu", "registration_type": "Student", "created_at": "2024-03-09T15:20:00Z"},
  {"id": "9", "name": "Lisa Taylor", "email": "lisa.t@fintech.com", "registration_type": "Professional", "company": "FinTech Solutions", "phone": "+1 (555) 456-7890", "created_at": "2024-03-15T12:05:00Z"},
  {"id": "10", "name": "Kevin Lee", "email": "klee@techy.com", "registration_type": "Professional", "company": "Techy Inc", "phone": "+1 (555) 567-8901", "created_at": "2024-03-16T17:40:00Z"},
  {"id": "11", "name": "Sophie Martin", "email": "smartin@polytech.fr", "registration_type": "Student", "created_at": "2024-03-17T10:00:00Z"},
  {"id": "12", "name": "Niko Bellic", "email": "niko@liberty.com", "registration_type": "Professional", "company": "LCPD", "phone": "+1 (555) 678-9012", "created_at": "2024-03-18T09:00:00Z"}
]"#;

#[derive(Debug, Clone)]
enum FixtureData {
    Sample,
    File(PathBuf),
}

/// Read-only source that never talks to the network.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    data: FixtureData,
    latency: Duration,
}

impl FixtureSource {
    /// The built-in 12-record sample set.
    pub fn sample() -> Self {
        Self {
            data: FixtureData::Sample,
            latency: Duration::ZERO,
        }
    }

    /// Records read from a JSON file on every fetch.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            data: FixtureData::File(path.into()),
            latency: Duration::ZERO,
        }
    }

    /// Sleeps for `latency` before answering, to mimic a network round trip.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl RecordSource for FixtureSource {
    fn fetch_all(&self) -> Result<LoadReport, ConnectionError> {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }

        let report = match &self.data {
            FixtureData::Sample => LoadReport::from_slice(SAMPLE_REGISTRATIONS.as_bytes())?,
            FixtureData::File(path) => {
                let body = std::fs::read(path).map_err(|source| ConnectionError::Io {
                    path: path.clone(),
                    source,
                })?;
                LoadReport::from_slice(&body)?
            }
        };

        info!(
            source = %self.describe(),
            records = report.records.len(),
            rejected = report.rejected.len(),
            "fixture loaded"
        );
        Ok(report)
    }

    fn describe(&self) -> String {
        match &self.data {
            FixtureData::Sample => "sample data".to_string(),
            FixtureData::File(path) => path.display().to_string(),
        }
    }
}
