//! Search history database operations
//!
//! Append-only record of incoming queries, aggregated into term frequencies.

use super::models::{now_timestamp, SearchEvent, TermFrequency};
use super::Database;
use sqlx::Row;

/// Extension trait for search history database operations
pub trait SearchHistoryOps {
    fn record_search(&self, term: &str) -> impl std::future::Future<Output = Result<SearchEvent, sqlx::Error>> + Send;
    fn top_terms(&self, limit: usize) -> impl std::future::Future<Output = Result<Vec<TermFrequency>, sqlx::Error>> + Send;
    fn search_count(&self, term: &str) -> impl std::future::Future<Output = Result<i64, sqlx::Error>> + Send;
}

impl SearchHistoryOps for Database {
    async fn record_search(&self, term: &str) -> Result<SearchEvent, sqlx::Error> {
        sqlx::query_as::<_, SearchEvent>(
            "INSERT INTO search_history (term, searched_at) VALUES (?, ?) RETURNING id, term, searched_at",
        )
        .bind(term)
        .bind(now_timestamp())
        .fetch_one(self.pool())
        .await
    }

    /// Ties on count go to the term searched most recently.
    async fn top_terms(&self, limit: usize) -> Result<Vec<TermFrequency>, sqlx::Error> {
        sqlx::query_as::<_, TermFrequency>(
            r#"
            SELECT term, COUNT(*) as count
            FROM search_history
            GROUP BY term
            ORDER BY count DESC, MAX(id) DESC
            LIMIT ?
            "#,
        )
        .bind(limit as i64)
        .fetch_all(self.pool())
        .await
    }

    async fn search_count(&self, term: &str) -> Result<i64, sqlx::Error> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM search_history WHERE term = ?")
            .bind(term)
            .fetch_one(self.pool())
            .await?;
        Ok(row.get("count"))
    }
}
