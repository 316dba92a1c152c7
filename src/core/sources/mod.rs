//! Source adapters
//!
//! The local lexicon plus the external dictionaries consulted after it.

mod local;
mod scraped;
mod wiktionary;

pub use local::{LocalStoreSource, LOCAL_STORE_ID};
pub use scraped::{has_content, ScrapedSource, ScrapedSourceConfig, QUERY_PLACEHOLDER};
pub use wiktionary::{WiktionarySource, WIKTIONARY_API_URL, WIKTIONARY_ID};
