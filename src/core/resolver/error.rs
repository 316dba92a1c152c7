//! Resolution Error Types

use crate::database::StoreError;

/// Why a source could not answer. Carried inside `SourceOutcome::Failed`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceFailure {
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    #[error("Source timed out")]
    Timeout,

    #[error("Malformed upstream response: {0}")]
    Malformed(String),

    /// The local store could not be read. Distinct from "no such lemma".
    #[error("Lexicon store read failed: {0}")]
    StoreRead(String),
}

impl From<reqwest::Error> for SourceFailure {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SourceFailure::Timeout
        } else if e.is_decode() {
            SourceFailure::Malformed(e.to_string())
        } else {
            SourceFailure::Unavailable(e.to_string())
        }
    }
}

/// Errors surfaced by resolver operations other than `resolve`.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Lemma must not be empty")]
    EmptyLemma,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for resolver operations
pub type Result<T> = std::result::Result<T, ResolveError>;
