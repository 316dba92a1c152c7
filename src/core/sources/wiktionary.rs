//! Wiktionary Source
//!
//! Plain-text extracts from the Tamil Wiktionary MediaWiki API.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::core::resolver::{Query, SourceAdapter, SourceFailure, SourceOutcome, SourceResult};

pub const WIKTIONARY_ID: &str = "Wiktionary";
pub const WIKTIONARY_API_URL: &str = "https://ta.wiktionary.org/w/api.php";

#[derive(Debug, Deserialize)]
struct ApiResponse {
    query: Option<ApiQuery>,
}

#[derive(Debug, Deserialize)]
struct ApiQuery {
    #[serde(default)]
    pages: HashMap<String, ApiPage>,
}

#[derive(Debug, Deserialize)]
struct ApiPage {
    title: Option<String>,
    extract: Option<String>,
}

pub struct WiktionarySource {
    client: Client,
    endpoint: String,
}

impl WiktionarySource {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Request URL for `query`, percent-encoding the title.
    pub fn request_url(&self, query: &Query) -> String {
        format!(
            "{}?action=query&format=json&origin=*&prop=extracts&explaintext=1&titles={}",
            self.endpoint,
            query.url_encoded()
        )
    }

    async fn fetch_extract(&self, query: &Query) -> Result<Option<String>, SourceFailure> {
        let resp = self.client.get(self.request_url(query)).send().await?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(SourceFailure::Unavailable(format!("HTTP {}", status.as_u16())));
        }

        let text = resp.text().await?;
        let parsed: ApiResponse =
            serde_json::from_str(&text).map_err(|e| SourceFailure::Malformed(e.to_string()))?;
        let pages = parsed
            .query
            .ok_or_else(|| SourceFailure::Malformed("missing query object".to_string()))?
            .pages;

        Ok(select_extract(query, pages))
    }
}

/// The extract for the requested title, or of the single page returned.
fn select_extract(query: &Query, mut pages: HashMap<String, ApiPage>) -> Option<String> {
    let page = if pages.len() == 1 {
        pages.drain().next().map(|(_, page)| page)
    } else {
        pages
            .into_values()
            .find(|page| page.title.as_deref() == Some(query.as_str()))
    }?;

    page.extract
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
}

#[async_trait]
impl SourceAdapter for WiktionarySource {
    fn id(&self) -> &str {
        WIKTIONARY_ID
    }

    fn name(&self) -> &str {
        "விக்சனரி (Wiktionary)"
    }

    async fn resolve(&self, query: &Query) -> SourceOutcome {
        match self.fetch_extract(query).await {
            Ok(Some(extract)) => SourceOutcome::Usable(SourceResult::inline_text(WIKTIONARY_ID, extract)),
            Ok(None) => SourceOutcome::Absent,
            Err(failure) => SourceOutcome::Failed(failure),
        }
    }
}
