pub mod logging;

// Query classification: Tamil script vs. everything else
pub mod script;

// Word-resolution waterfall: adapters, policy, orchestrator
pub mod resolver;
pub mod sources;

// Side channels of a resolution
pub mod cache;
pub mod telemetry;
pub mod finalize;

// English -> Tamil candidate spellings
pub mod suggest;

// HTTP surface
pub mod api;
