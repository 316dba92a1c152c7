/// Sollagarathi - Tamil Lexicon
///
/// Core library resolving Tamil (or transliterated English) words against the
/// curated lexicon store and a fixed waterfall of external dictionary sources.

pub mod config;
pub mod core;
pub mod database;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
