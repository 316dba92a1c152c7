//! Lexicon store abstraction
//!
//! The resolver only talks to the store through [`LexiconStore`], so the
//! handle can be shared as `Arc<dyn LexiconStore>` and replaced in tests.

use async_trait::async_trait;

use super::{Database, LexiconEntry, LexiconOps, SearchHistoryOps, TermFrequency};

/// Persistence errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Key-value view of the persistent lexicon plus the search telemetry log.
#[async_trait]
pub trait LexiconStore: Send + Sync {
    /// Look up the entry whose lemma equals `lemma` exactly.
    async fn get_by_key(&self, lemma: &str) -> StoreResult<Option<LexiconEntry>>;

    /// Insert unless the lemma exists. Returns whether a row was created.
    async fn insert_if_absent(&self, lemma: &str, body: &str) -> StoreResult<bool>;

    /// Insert or overwrite the body of an existing lemma.
    async fn upsert(&self, lemma: &str, body: &str) -> StoreResult<LexiconEntry>;

    /// Append one search event.
    async fn append_event(&self, term: &str) -> StoreResult<()>;

    /// Most searched terms, highest count first.
    async fn top_by_frequency(&self, limit: usize) -> StoreResult<Vec<TermFrequency>>;
}

#[async_trait]
impl LexiconStore for Database {
    async fn get_by_key(&self, lemma: &str) -> StoreResult<Option<LexiconEntry>> {
        Ok(self.get_entry(lemma).await?)
    }

    async fn insert_if_absent(&self, lemma: &str, body: &str) -> StoreResult<bool> {
        Ok(self.insert_entry_if_absent(lemma, body).await?)
    }

    async fn upsert(&self, lemma: &str, body: &str) -> StoreResult<LexiconEntry> {
        Ok(self.upsert_entry(lemma, body).await?)
    }

    async fn append_event(&self, term: &str) -> StoreResult<()> {
        let event = self.record_search(term).await?;
        log::trace!("Search #{} recorded for {:?}", event.id, event.term);
        Ok(())
    }

    async fn top_by_frequency(&self, limit: usize) -> StoreResult<Vec<TermFrequency>> {
        Ok(self.top_terms(limit).await?)
    }
}
