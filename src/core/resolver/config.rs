//! Resolver Configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How adapters are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionMode {
    /// Stop at the first usable source, in priority order
    #[default]
    FirstMatch,
    /// Query every source and return all usable results
    Aggregate,
}

impl std::fmt::Display for ResolutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionMode::FirstMatch => write!(f, "first-match"),
            ResolutionMode::Aggregate => write!(f, "aggregate"),
        }
    }
}

/// Configuration for the word resolver
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Upper bound on a single adapter call, local store included
    pub source_timeout: Duration,
    /// Write externally confirmed words back into the local store
    pub cache_fill: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            source_timeout: Duration::from_secs(4),
            cache_fill: true,
        }
    }
}
