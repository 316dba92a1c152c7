//! Word Resolver
//!
//! Resolves a query into a lexicon entry through an ordered waterfall of
//! sources:
//! - Script gate routing non-Tamil input to English -> Tamil suggestions
//! - Best-effort search telemetry
//! - First-match (sequential, short-circuit) or aggregate (concurrent) dispatch
//! - Per-source timeouts and statistics
//! - Insert-if-absent cache-fill of externally confirmed words

mod builder;
mod config;
mod error;
mod policy;
mod source;
mod stats;
mod types;


// Re-export public API
pub use builder::WordResolverBuilder;
pub use config::{ResolutionMode, ResolverConfig};
pub use error::{ResolveError, Result, SourceFailure};
pub use policy::{Evaluated, ResolutionPolicy};
pub use source::SourceAdapter;
pub use stats::SourceStats;
pub use types::{AggregateItem, Outcome, Query, SourceKind, SourceOutcome, SourceResult};

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use tokio::sync::RwLock;
use tokio::time::timeout;

use crate::core::cache::CacheWriter;
use crate::core::finalize::Finalizer;
use crate::core::script;
use crate::core::suggest::SuggestionService;
use crate::core::telemetry::TelemetryRecorder;
use crate::database::{LexiconEntry, TermFrequency};

// ============================================================================
// Word Resolver
// ============================================================================

/// Orchestrates one resolution call across all registered sources.
#[derive(Clone)]
pub struct WordResolver {
    /// Sources in evaluation order (local first)
    sources: Vec<Arc<dyn SourceAdapter>>,
    policy: ResolutionPolicy,
    config: ResolverConfig,
    cache: CacheWriter,
    telemetry: TelemetryRecorder,
    finalizer: Finalizer,
    suggestions: SuggestionService,
    /// Statistics per source id
    stats: Arc<RwLock<HashMap<String, SourceStats>>>,
}

impl WordResolver {
    pub fn builder(store: Arc<dyn crate::database::LexiconStore>) -> WordResolverBuilder {
        WordResolverBuilder::new(store)
    }

    pub fn policy(&self) -> ResolutionPolicy {
        self.policy
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Source ids in evaluation order.
    pub fn source_ids(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.id().to_string()).collect()
    }

    pub async fn stats(&self) -> HashMap<String, SourceStats> {
        self.stats.read().await.clone()
    }

    pub async fn source_stats(&self, id: &str) -> Option<SourceStats> {
        self.stats.read().await.get(id).cloned()
    }

    /// Resolve raw user input. Always returns a well-formed outcome.
    #[tracing::instrument(level = "debug", skip(self), fields(mode = %self.policy.mode()))]
    pub async fn resolve(&self, raw: &str) -> Outcome {
        let query = Query::new(raw);
        if query.is_empty() {
            return Outcome::choose(Vec::new());
        }

        if !script::is_tamil(query.as_str()) {
            log::debug!("Non-Tamil query {:?}, routing to suggestions", query.as_str());
            return Outcome::choose(self.suggestions.suggest(query.as_str()).await);
        }

        log::debug!("Resolving {:?} ({} mode)", query.as_str(), self.policy.mode());
        self.telemetry.record(query.as_str()).await;

        let evaluated = match self.policy.mode() {
            ResolutionMode::FirstMatch => self.run_first_match(&query).await,
            ResolutionMode::Aggregate => self.run_aggregate(&query).await,
        };

        if self.config.cache_fill {
            if let Some(body) = self.policy.cache_fill_body(&evaluated) {
                self.cache.persist(query.as_str(), &body).await;
            }
        }

        self.shape_outcome(&query, &evaluated)
    }

    /// English -> Tamil candidates without touching the waterfall.
    pub async fn suggest(&self, text: &str) -> Vec<String> {
        self.suggestions.suggest(text).await
    }

    /// Create or overwrite the entry for `lemma`.
    pub async fn finalize(&self, lemma: &str, body: Option<&str>) -> Result<LexiconEntry> {
        self.finalizer.finalize(lemma, body).await
    }

    /// Most searched term so far, if any.
    pub async fn word_of_the_day(&self) -> Result<Option<TermFrequency>> {
        Ok(self.telemetry.most_frequent().await?)
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    async fn run_first_match(&self, query: &Query) -> Vec<Evaluated> {
        let mut evaluated = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            let result = self.evaluate(source, query).await;
            let stop = self.policy.stops_on(&result.outcome);
            evaluated.push(result);
            if stop {
                break;
            }
        }
        evaluated
    }

    async fn run_aggregate(&self, query: &Query) -> Vec<Evaluated> {
        // join_all keeps input order
        join_all(self.sources.iter().map(|source| self.evaluate(source, query))).await
    }

    /// Run one source under the per-source timeout and record its outcome.
    async fn evaluate(&self, source: &Arc<dyn SourceAdapter>, query: &Query) -> Evaluated {
        let id = source.id().to_string();
        let start = Instant::now();

        let outcome = match timeout(self.config.source_timeout, source.resolve(query)).await {
            Ok(outcome) => outcome,
            Err(_) => SourceOutcome::Failed(SourceFailure::Timeout),
        };
        let latency = start.elapsed().as_millis() as u64;

        match &outcome {
            SourceOutcome::Failed(SourceFailure::StoreRead(reason)) => {
                log::warn!(
                    "Local lexicon unreadable ({}), degrading to external sources for {:?}",
                    reason,
                    query.as_str()
                );
            }
            SourceOutcome::Failed(failure) => {
                log::warn!("Source {} failed for {:?}: {}", id, query.as_str(), failure);
            }
            other => {
                log::debug!("Source {} -> {} ({}ms)", id, other.label(), latency);
            }
        }

        self.stats
            .write()
            .await
            .entry(id.clone())
            .or_default()
            .record(&outcome, latency);

        Evaluated {
            source: id,
            is_local: source.is_local(),
            outcome,
        }
    }

    fn shape_outcome(&self, query: &Query, evaluated: &[Evaluated]) -> Outcome {
        if self.policy.all_failed(evaluated) {
            log::error!("Every source failed for {:?}", query.as_str());
            return Outcome::Error {
                message: format!("No source could be reached for {}", query),
            };
        }

        match self.policy.mode() {
            ResolutionMode::FirstMatch => {
                match evaluated.iter().find_map(|e| self.policy.usable(&e.outcome)) {
                    Some(result) => {
                        log::info!("Resolved {:?} from {}", query.as_str(), result.source);
                        Outcome::resolved(query, result)
                    }
                    None => {
                        log::info!("No entry for {:?}", query.as_str());
                        Outcome::choose(vec![query.as_str().to_string()])
                    }
                }
            }
            ResolutionMode::Aggregate => {
                let results: Vec<AggregateItem> = evaluated
                    .iter()
                    .filter_map(|e| self.policy.usable(&e.outcome))
                    .cloned()
                    .map(AggregateItem::from)
                    .collect();
                log::info!("Aggregated {} result(s) for {:?}", results.len(), query.as_str());
                Outcome::Aggregate {
                    lemma: query.as_str().to_string(),
                    results,
                }
            }
        }
    }
}
