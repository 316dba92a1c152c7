//! Database record types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One confirmed word in the lexicon. At most one row exists per lemma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LexiconEntry {
    pub lemma: String,
    pub body: String,
    /// RFC 3339 timestamp of first insertion
    pub created_at: String,
    /// RFC 3339 timestamp of the last upsert
    pub updated_at: String,
}

/// A single recorded query. Duplicates are expected.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SearchEvent {
    pub id: i64,
    pub term: String,
    pub searched_at: String,
}

/// Grouped count of search events for one term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TermFrequency {
    pub term: String,
    pub count: i64,
}

/// Current time in the format stored in every timestamp column.
pub(crate) fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}
