//! Finalize
//!
//! Explicit entry creation. Unlike cache-fill this always upserts, so a
//! re-finalized lemma gets its body replaced.

use std::sync::Arc;

use crate::core::resolver::{ResolveError, Result};
use crate::database::{LexiconEntry, LexiconStore};

/// Field labels of a freshly finalized entry.
const STUB_FIELDS: [&str; 4] = ["சொல்வகை", "பொருள்", "எடுத்துக்காட்டு", "சொற்பிறப்பு"];

/// Templated body with every field left empty.
pub fn stub_body(lemma: &str) -> String {
    let mut body = format!("{lemma}\n");
    for field in STUB_FIELDS {
        body.push_str(field);
        body.push_str(": \n");
    }
    body
}

#[derive(Clone)]
pub struct Finalizer {
    store: Arc<dyn LexiconStore>,
}

impl Finalizer {
    pub fn new(store: Arc<dyn LexiconStore>) -> Self {
        Self { store }
    }

    /// Upsert `lemma` with `body`, or with the stub template when no body is given.
    pub async fn finalize(&self, lemma: &str, body: Option<&str>) -> Result<LexiconEntry> {
        let lemma = lemma.trim();
        if lemma.is_empty() {
            return Err(ResolveError::EmptyLemma);
        }

        let body = match body {
            Some(b) => b.to_string(),
            None => stub_body(lemma),
        };

        let entry = self.store.upsert(lemma, &body).await?;
        log::info!("Finalized lemma {}", lemma);
        Ok(entry)
    }
}
