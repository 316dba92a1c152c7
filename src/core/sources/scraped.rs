//! Scraped Dictionary Sources
//!
//! Web dictionaries without an API. A page is considered a hit when its body
//! is larger than the site's empty-result skeleton; the result is a link, the
//! page itself is never parsed.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::core::resolver::{Query, SourceAdapter, SourceFailure, SourceOutcome, SourceResult};

/// Placeholder replaced by the percent-encoded query in `url_template`.
pub const QUERY_PLACEHOLDER: &str = "{query}";

fn default_enabled() -> bool {
    true
}

/// One scraped dictionary site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedSourceConfig {
    /// Stable identifier reported as the originating source
    pub id: String,
    /// Display name
    pub name: String,
    /// Page URL containing `{query}`
    pub url_template: String,
    /// Bodies of this many bytes or fewer count as "not found"
    pub min_bytes: usize,
    /// Localized description attached to the link
    pub description: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl ScrapedSourceConfig {
    /// University of Madras Tamil Lexicon, hosted by DSAL.
    pub fn tamil_lexicon() -> Self {
        Self {
            id: "TamilLexicon".to_string(),
            name: "தமிழ்ப் பேரகராதி (Tamil Lexicon)".to_string(),
            url_template: "https://dsal.uchicago.edu/cgi-bin/app/tamil-lex_query.py?qs={query}&searchhws=yes".to_string(),
            min_bytes: 1000,
            description: "சென்னைப் பல்கலைக்கழகத் தமிழ்ப் பேரகராதியில் காண்க".to_string(),
            enabled: true,
        }
    }

    /// agarathi.com
    pub fn agarathi() -> Self {
        Self {
            id: "Agarathi".to_string(),
            name: "அகராதி (Agarathi)".to_string(),
            url_template: "https://agarathi.com/word/{query}".to_string(),
            min_bytes: 500,
            description: "அகராதி தளத்தில் காண்க".to_string(),
            enabled: true,
        }
    }

    /// Page URL for `query`.
    pub fn page_url(&self, query: &Query) -> String {
        self.url_template
            .replace(QUERY_PLACEHOLDER, &query.url_encoded())
    }
}

pub struct ScrapedSource {
    client: Client,
    config: ScrapedSourceConfig,
}

impl ScrapedSource {
    pub fn new(client: Client, config: ScrapedSourceConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ScrapedSourceConfig {
        &self.config
    }

    async fn fetch_page(&self, url: &str) -> Result<Option<String>, SourceFailure> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(SourceFailure::Unavailable(format!("HTTP {}", status.as_u16())));
        }

        Ok(Some(resp.text().await?))
    }
}

/// Whether a fetched document looks like a real entry page.
pub fn has_content(document: &str, min_bytes: usize) -> bool {
    document.len() > min_bytes
}

#[async_trait]
impl SourceAdapter for ScrapedSource {
    fn id(&self) -> &str {
        &self.config.id
    }

    fn name(&self) -> &str {
        &self.config.name
    }

    async fn resolve(&self, query: &Query) -> SourceOutcome {
        let url = self.config.page_url(query);
        match self.fetch_page(&url).await {
            Ok(Some(document)) if has_content(&document, self.config.min_bytes) => {
                SourceOutcome::Usable(SourceResult::external_link(
                    self.config.id.clone(),
                    url,
                    self.config.description.clone(),
                ))
            }
            Ok(Some(document)) => {
                log::debug!(
                    "{} page for {:?} is only {} bytes, treating as absent",
                    self.config.id,
                    query.as_str(),
                    document.len()
                );
                SourceOutcome::Absent
            }
            Ok(None) => SourceOutcome::Absent,
            Err(failure) => SourceOutcome::Failed(failure),
        }
    }
}
