//! Source Statistics
//!
//! Tracks outcome counts and latency for each source.

use serde::{Deserialize, Serialize};

use super::types::SourceOutcome;
use super::error::SourceFailure;

/// Statistics for a single source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceStats {
    pub total_requests: u64,
    pub usable: u64,
    pub absent: u64,
    pub failed: u64,
    pub timeouts: u64,
    pub total_latency_ms: u64,
}

impl SourceStats {
    pub fn avg_latency_ms(&self) -> u64 {
        if self.total_requests == 0 {
            0
        } else {
            self.total_latency_ms / self.total_requests
        }
    }

    /// Share of calls that produced a usable result.
    pub fn hit_rate(&self) -> f64 {
        if self.total_requests == 0 {
            0.0
        } else {
            self.usable as f64 / self.total_requests as f64
        }
    }

    pub fn record(&mut self, outcome: &SourceOutcome, latency_ms: u64) {
        self.total_requests += 1;
        self.total_latency_ms += latency_ms;

        match outcome {
            SourceOutcome::Usable(_) => self.usable += 1,
            SourceOutcome::Absent => self.absent += 1,
            SourceOutcome::Failed(SourceFailure::Timeout) => {
                self.failed += 1;
                self.timeouts += 1;
            }
            SourceOutcome::Failed(_) => self.failed += 1,
        }
    }
}
