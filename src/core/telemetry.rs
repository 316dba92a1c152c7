//! Search telemetry
//!
//! Every Tamil query is appended to the search history before any source
//! runs; the grouped counts give the word of the day.

use std::sync::Arc;

use crate::database::{LexiconStore, StoreResult, TermFrequency};

#[derive(Clone)]
pub struct TelemetryRecorder {
    store: Arc<dyn LexiconStore>,
}

impl TelemetryRecorder {
    pub fn new(store: Arc<dyn LexiconStore>) -> Self {
        Self { store }
    }

    /// Append a search event. Best effort: returns whether the write succeeded.
    pub async fn record(&self, term: &str) -> bool {
        match self.store.append_event(term).await {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to record search for {}: {}", term, e);
                false
            }
        }
    }

    /// The most searched term; ties go to the most recently searched one.
    pub async fn most_frequent(&self) -> StoreResult<Option<TermFrequency>> {
        Ok(self.store.top_by_frequency(1).await?.into_iter().next())
    }
}
