//! Lexicon database operations
//!
//! Insert-if-absent is the soft write used by cache-fill and bulk import;
//! upsert is reserved for explicit finalization and overwrites the body.

use super::models::{now_timestamp, LexiconEntry};
use super::Database;
use sqlx::Row;

/// Extension trait for lexicon database operations
pub trait LexiconOps {
    fn get_entry(&self, lemma: &str) -> impl std::future::Future<Output = Result<Option<LexiconEntry>, sqlx::Error>> + Send;
    fn insert_entry_if_absent(&self, lemma: &str, body: &str) -> impl std::future::Future<Output = Result<bool, sqlx::Error>> + Send;
    fn upsert_entry(&self, lemma: &str, body: &str) -> impl std::future::Future<Output = Result<LexiconEntry, sqlx::Error>> + Send;
    fn import_entries(&self, entries: &[(String, String)]) -> impl std::future::Future<Output = Result<u64, sqlx::Error>> + Send;
    fn count_entries(&self) -> impl std::future::Future<Output = Result<i64, sqlx::Error>> + Send;
}

impl LexiconOps for Database {
    async fn get_entry(&self, lemma: &str) -> Result<Option<LexiconEntry>, sqlx::Error> {
        sqlx::query_as::<_, LexiconEntry>(
            "SELECT lemma, body, created_at, updated_at FROM lexicon_entries WHERE lemma = ?",
        )
        .bind(lemma)
        .fetch_optional(self.pool())
        .await
    }

    async fn insert_entry_if_absent(&self, lemma: &str, body: &str) -> Result<bool, sqlx::Error> {
        let now = now_timestamp();
        let result = sqlx::query(
            r#"
            INSERT INTO lexicon_entries (lemma, body, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(lemma) DO NOTHING
            "#,
        )
        .bind(lemma)
        .bind(body)
        .bind(&now)
        .bind(&now)
        .execute(self.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn upsert_entry(&self, lemma: &str, body: &str) -> Result<LexiconEntry, sqlx::Error> {
        let now = now_timestamp();
        sqlx::query_as::<_, LexiconEntry>(
            r#"
            INSERT INTO lexicon_entries (lemma, body, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(lemma) DO UPDATE SET
                body = excluded.body,
                updated_at = excluded.updated_at
            RETURNING lemma, body, created_at, updated_at
            "#,
        )
        .bind(lemma)
        .bind(body)
        .bind(&now)
        .bind(&now)
        .fetch_one(self.pool())
        .await
    }

    async fn import_entries(&self, entries: &[(String, String)]) -> Result<u64, sqlx::Error> {
        let now = now_timestamp();
        let mut tx = self.pool().begin().await?;
        let mut inserted = 0;

        for (lemma, body) in entries {
            let result = sqlx::query(
                r#"
                INSERT INTO lexicon_entries (lemma, body, created_at, updated_at)
                VALUES (?, ?, ?, ?)
                ON CONFLICT(lemma) DO NOTHING
                "#,
            )
            .bind(lemma)
            .bind(body)
            .bind(&now)
            .bind(&now)
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    async fn count_entries(&self) -> Result<i64, sqlx::Error> {
        let row = sqlx::query("SELECT COUNT(*) as total FROM lexicon_entries")
            .fetch_one(self.pool())
            .await?;
        Ok(row.get("total"))
    }
}
