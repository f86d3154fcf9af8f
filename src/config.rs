//! Record source configuration resolved from command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use crate::provider::{DEFAULT_ENDPOINT, FixtureSource, HttpSource, RecordSource};

/// Latency of the built-in sample set in interactive mode, matching a slow
/// store round trip so the loading state is visible.
pub const SAMPLE_LATENCY: Duration = Duration::from_millis(600);

/// Where registrations come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// Built-in sample data.
    Sample { latency: Duration },
    /// JSON file with the wire schema.
    Fixture(PathBuf),
    /// The registration store's REST API.
    Http {
        url: String,
        endpoint: String,
        timeout: Duration,
    },
}

impl SourceConfig {
    /// Picks a source: a fixture file wins over a URL, and with neither the
    /// sample set is used.
    pub fn resolve(
        url: Option<String>,
        endpoint: Option<String>,
        fixture: Option<PathBuf>,
        timeout: Duration,
    ) -> Self {
        match (fixture, url) {
            (Some(path), _) => SourceConfig::Fixture(path),
            (None, Some(url)) => SourceConfig::Http {
                url,
                endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
                timeout,
            },
            (None, None) => SourceConfig::Sample {
                latency: Duration::ZERO,
            },
        }
    }

    /// Same config, but with a sample latency applied if it is the sample set.
    pub fn with_sample_latency(self, latency: Duration) -> Self {
        match self {
            SourceConfig::Sample { .. } => SourceConfig::Sample { latency },
            other => other,
        }
    }

    pub fn build(&self) -> Box<dyn RecordSource + Send + Sync> {
        match self {
            SourceConfig::Sample { latency } => {
                Box::new(FixtureSource::sample().with_latency(*latency))
            }
            SourceConfig::Fixture(path) => Box::new(FixtureSource::from_path(path)),
            SourceConfig::Http {
                url,
                endpoint,
                timeout,
            } => Box::new(
                HttpSource::new(url.clone())
                    .with_endpoint(endpoint.clone())
                    .with_timeout(*timeout),
            ),
        }
    }
}
