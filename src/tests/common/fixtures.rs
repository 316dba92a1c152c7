//! Test Fixtures
//!
//! Temporary databases, seeded lexicons and canned sources.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tempfile::TempDir;

use crate::core::resolver::{Query, SourceAdapter, SourceOutcome, SourceResult};
use crate::database::{Database, LexiconOps};

// =============================================================================
// Database Fixtures
// =============================================================================

/// Create a test database in a temporary directory.
/// Returns both the database and the TempDir (which must be kept alive).
pub async fn create_test_db() -> (Database, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db = Database::new(temp_dir.path())
        .await
        .expect("Failed to create test database");
    (db, temp_dir)
}

/// Test database pre-seeded with curated entries.
pub async fn create_seeded_db(entries: &[(&str, &str)]) -> (Database, TempDir) {
    let (db, temp) = create_test_db().await;
    for (lemma, body) in entries {
        db.upsert_entry(lemma, body).await.expect("Failed to seed entry");
    }
    (db, temp)
}

// =============================================================================
// Source Fixtures
// =============================================================================

/// Source that answers every query with the same inline text.
pub struct CannedSource {
    id: &'static str,
    text: Option<&'static str>,
    calls: AtomicU32,
}

impl CannedSource {
    pub fn answering(id: &'static str, text: &'static str) -> Arc<Self> {
        Arc::new(Self {
            id,
            text: Some(text),
            calls: AtomicU32::new(0),
        })
    }

    pub fn silent(id: &'static str) -> Arc<Self> {
        Arc::new(Self {
            id,
            text: None,
            calls: AtomicU32::new(0),
        })
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SourceAdapter for CannedSource {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.id
    }

    async fn resolve(&self, _query: &Query) -> SourceOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.text {
            Some(text) => SourceOutcome::Usable(SourceResult::inline_text(self.id, text)),
            None => SourceOutcome::Absent,
        }
    }
}
