//! Source Adapter Trait
//!
//! Defines the trait that every dictionary source must implement.

use async_trait::async_trait;

use super::types::{Query, SourceOutcome};

/// Uniform wrapper around one internal or external data source.
///
/// `resolve` cannot fail: transport errors, bad payloads and store read
/// errors are reported as [`SourceOutcome::Failed`].
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Stable identifier reported as the originating source (e.g. "Wiktionary")
    fn id(&self) -> &str;

    /// Localized display name
    fn name(&self) -> &str;

    /// Whether this source is the curated local lexicon
    fn is_local(&self) -> bool {
        false
    }

    /// Look the query up in this source
    async fn resolve(&self, query: &Query) -> SourceOutcome;
}
