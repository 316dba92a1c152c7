//! Local Store Source
//!
//! The curated lexicon. Always consulted first.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::resolver::{Query, SourceAdapter, SourceFailure, SourceOutcome, SourceResult};
use crate::database::LexiconStore;

pub const LOCAL_STORE_ID: &str = "LocalStore";

pub struct LocalStoreSource {
    store: Arc<dyn LexiconStore>,
}

impl LocalStoreSource {
    pub fn new(store: Arc<dyn LexiconStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SourceAdapter for LocalStoreSource {
    fn id(&self) -> &str {
        LOCAL_STORE_ID
    }

    fn name(&self) -> &str {
        "சொல் அகராதி (Master DB)"
    }

    fn is_local(&self) -> bool {
        true
    }

    async fn resolve(&self, query: &Query) -> SourceOutcome {
        match self.store.get_by_key(query.as_str()).await {
            Ok(Some(entry)) => SourceOutcome::Usable(SourceResult::inline_text(LOCAL_STORE_ID, entry.body)),
            Ok(None) => SourceOutcome::Absent,
            Err(e) => SourceOutcome::Failed(SourceFailure::StoreRead(e.to_string())),
        }
    }
}
