//! Resolution Policy
//!
//! Source ordering, stop/continue rules and the cache-fill decision.

use std::sync::Arc;

use super::config::ResolutionMode;
use super::source::SourceAdapter;
use super::types::{SourceKind, SourceOutcome, SourceResult};

/// Outcome of one adapter call, tagged with where it came from.
#[derive(Debug, Clone)]
pub struct Evaluated {
    pub source: String,
    pub is_local: bool,
    pub outcome: SourceOutcome,
}

/// Orders adapters and decides when resolution stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionPolicy {
    mode: ResolutionMode,
}

impl ResolutionPolicy {
    pub fn new(mode: ResolutionMode) -> Self {
        Self { mode }
    }

    pub fn first_match() -> Self {
        Self::new(ResolutionMode::FirstMatch)
    }

    pub fn aggregate() -> Self {
        Self::new(ResolutionMode::Aggregate)
    }

    pub fn mode(&self) -> ResolutionMode {
        self.mode
    }

    /// Local sources first, registration order otherwise.
    pub fn order(&self, sources: &[Arc<dyn SourceAdapter>]) -> Vec<Arc<dyn SourceAdapter>> {
        let mut ordered = sources.to_vec();
        // sort_by_key is stable
        ordered.sort_by_key(|s| !s.is_local());
        ordered
    }

    /// The usable result of an outcome, if it carries a non-blank payload.
    pub fn usable<'a>(&self, outcome: &'a SourceOutcome) -> Option<&'a SourceResult> {
        match outcome {
            SourceOutcome::Usable(result)
                if result.kind != SourceKind::Absent
                    && result
                        .payload
                        .as_deref()
                        .is_some_and(|p| !p.trim().is_empty()) =>
            {
                Some(result)
            }
            _ => None,
        }
    }

    /// Whether evaluation stops after this outcome.
    pub fn stops_on(&self, outcome: &SourceOutcome) -> bool {
        self.mode == ResolutionMode::FirstMatch && self.usable(outcome).is_some()
    }

    /// Body to back-fill into the local store, if any.
    ///
    /// Nothing is written when the local store already answered. Otherwise the
    /// first non-local inline text wins, then the first non-local link.
    pub fn cache_fill_body(&self, evaluated: &[Evaluated]) -> Option<String> {
        let local_hit = evaluated
            .iter()
            .any(|e| e.is_local && self.usable(&e.outcome).is_some());
        if local_hit {
            return None;
        }

        let external: Vec<&SourceResult> = evaluated
            .iter()
            .filter(|e| !e.is_local)
            .filter_map(|e| self.usable(&e.outcome))
            .collect();

        external
            .iter()
            .find(|r| r.kind == SourceKind::InlineText)
            .or_else(|| external.first())
            .map(|r| r.body())
    }

    /// True when no adapter answered at all (every one failed).
    pub fn all_failed(&self, evaluated: &[Evaluated]) -> bool {
        !evaluated.is_empty() && evaluated.iter().all(|e| e.outcome.is_failed())
    }
}
