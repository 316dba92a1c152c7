//! Word Resolver Builder
//!
//! Builder pattern for constructing a WordResolver.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use super::config::{ResolutionMode, ResolverConfig};
use super::policy::ResolutionPolicy;
use super::source::SourceAdapter;
use super::WordResolver;
use crate::core::cache::CacheWriter;
use crate::core::finalize::Finalizer;
use crate::core::sources::LocalStoreSource;
use crate::core::suggest::SuggestionService;
use crate::core::telemetry::TelemetryRecorder;
use crate::database::LexiconStore;

/// Builder for constructing a WordResolver.
///
/// The local store source is registered automatically; external sources are
/// consulted in the order they are added.
pub struct WordResolverBuilder {
    store: Arc<dyn LexiconStore>,
    sources: Vec<Arc<dyn SourceAdapter>>,
    policy: ResolutionPolicy,
    config: ResolverConfig,
    suggestions: SuggestionService,
}

impl WordResolverBuilder {
    pub fn new(store: Arc<dyn LexiconStore>) -> Self {
        Self {
            sources: vec![Arc::new(LocalStoreSource::new(store.clone()))],
            store,
            policy: ResolutionPolicy::default(),
            config: ResolverConfig::default(),
            suggestions: SuggestionService::default(),
        }
    }

    pub fn add_source(mut self, source: Arc<dyn SourceAdapter>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_mode(mut self, mode: ResolutionMode) -> Self {
        self.policy = ResolutionPolicy::new(mode);
        self
    }

    pub fn with_policy(mut self, policy: ResolutionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.source_timeout = timeout;
        self
    }

    pub fn with_cache_fill(mut self, enabled: bool) -> Self {
        self.config.cache_fill = enabled;
        self
    }

    pub fn with_suggestions(mut self, suggestions: SuggestionService) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn build(self) -> WordResolver {
        let sources = self.policy.order(&self.sources);
        log::info!(
            "Word resolver ready: {} mode, sources [{}]",
            self.policy.mode(),
            sources.iter().map(|s| s.id()).collect::<Vec<_>>().join(", ")
        );

        WordResolver {
            sources,
            policy: self.policy,
            config: self.config,
            cache: CacheWriter::new(self.store.clone()),
            telemetry: TelemetryRecorder::new(self.store.clone()),
            finalizer: Finalizer::new(self.store),
            suggestions: self.suggestions,
            stats: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}
