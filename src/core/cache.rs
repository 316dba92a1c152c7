//! Cache-fill
//!
//! Writes externally confirmed words into the local lexicon with
//! insert-if-absent semantics, so a curated body is never replaced.

use std::sync::Arc;

use crate::database::LexiconStore;

/// What a persist call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheFill {
    Inserted,
    AlreadyPresent,
    Failed,
}

#[derive(Clone)]
pub struct CacheWriter {
    store: Arc<dyn LexiconStore>,
}

impl CacheWriter {
    pub fn new(store: Arc<dyn LexiconStore>) -> Self {
        Self { store }
    }

    /// Persist `lemma` unless it already exists. Write errors are logged, not returned.
    pub async fn persist(&self, lemma: &str, body: &str) -> CacheFill {
        match self.store.insert_if_absent(lemma, body).await {
            Ok(true) => {
                log::info!("Cache-fill stored new lemma {}", lemma);
                CacheFill::Inserted
            }
            Ok(false) => {
                log::debug!("Cache-fill skipped, lemma {} already present", lemma);
                CacheFill::AlreadyPresent
            }
            Err(e) => {
                log::warn!("Cache-fill failed for {}: {}", lemma, e);
                CacheFill::Failed
            }
        }
    }
}
