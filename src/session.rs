//! Load lifecycle of one dashboard session.
//!
//! A session fetches the collection once and holds it read-only. A re-sync
//! starts a fresh load; at most one load is in flight at a time, and a
//! result that arrives for an older load is discarded.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::model::{Registration, Rejection};
use crate::provider::{ConnectionError, LoadReport};

/// Where the session is in its load cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fetch is in flight; rows must not be projected.
    Loading,
    /// The collection is available.
    Ready,
    /// The last fetch failed; the message is shown in a blocking overlay.
    Failed(String),
}

/// Records plus load state, owned by the hosting shell.
#[derive(Debug, Default)]
pub struct Session {
    phase: LoadPhase,
    records: Vec<Registration>,
    rejected: Vec<Rejection>,
    generation: u64,
    loaded_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn is_ready(&self) -> bool {
        self.phase == LoadPhase::Ready
    }

    /// Error message of a failed load.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// The loaded collection. Empty unless the session is ready.
    pub fn records(&self) -> &[Registration] {
        &self.records
    }

    pub fn rejected(&self) -> &[Rejection] {
        &self.rejected
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// Starts a new load and returns its generation, or `None` if a load is
    /// already in flight.
    ///
    /// Previously loaded records are dropped: a re-sync starts from scratch.
    pub fn begin_load(&mut self) -> Option<u64> {
        if self.is_loading() {
            debug!(generation = self.generation, "load already in flight");
            return None;
        }
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        self.records.clear();
        self.rejected.clear();
        self.loaded_at = None;
        debug!(generation = self.generation, "load started");
        Some(self.generation)
    }

    /// Applies the result of load `generation`.
    ///
    /// Returns `false` (and changes nothing) if the result is stale.
    pub fn finish_load(
        &mut self,
        generation: u64,
        result: Result<LoadReport, ConnectionError>,
    ) -> bool {
        if generation != self.generation || !self.is_loading() {
            debug!(
                generation,
                current = self.generation,
                "discarding stale load result"
            );
            return false;
        }

        match result {
            Ok(report) => {
                info!(
                    generation,
                    records = report.records.len(),
                    rejected = report.rejected.len(),
                    "session ready"
                );
                self.records = report.records;
                self.rejected = report.rejected;
                self.loaded_at = Some(Utc::now());
                self.phase = LoadPhase::Ready;
            }
            Err(e) => {
                warn!(generation, error = %e, "load failed");
                self.phase = LoadPhase::Failed(e.to_string());
            }
        }
        true
    }
}
