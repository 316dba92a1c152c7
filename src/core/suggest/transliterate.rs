//! Transliteration capability
//!
//! Latin text in, ranked Tamil spellings out. Failures produce an empty list.

use async_trait::async_trait;
use reqwest::Client;

/// Default Input Tools endpoint.
pub const INPUT_TOOLS_URL: &str = "https://inputtools.google.com/request";

/// Input method code for Tamil transliteration.
const TAMIL_ITC: &str = "ta-t-i0-und";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transliterator: Send + Sync {
    /// Candidate Tamil spellings, best first. Empty on failure.
    async fn suggest(&self, text: &str) -> Vec<String>;
}

/// Client for an Input Tools compatible transliteration endpoint.
///
/// Response shape: `["SUCCESS", [["amma", ["அம்மா", "அம்மை"], [], {}]]]`.
pub struct InputToolsTransliterator {
    client: Client,
    endpoint: String,
    num_candidates: usize,
}

impl InputToolsTransliterator {
    pub fn new(client: Client, endpoint: impl Into<String>, num_candidates: usize) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            num_candidates,
        }
    }

    async fn fetch(&self, text: &str) -> Result<Vec<String>, reqwest::Error> {
        let num = self.num_candidates.to_string();
        let json: serde_json::Value = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("text", text),
                ("itc", TAMIL_ITC),
                ("num", num.as_str()),
                ("cp", "0"),
                ("cs", "1"),
                ("ie", "utf-8"),
                ("oe", "utf-8"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(parse_candidates(&json))
    }
}

/// Extract candidates from an Input Tools response; anything unexpected yields none.
pub(crate) fn parse_candidates(json: &serde_json::Value) -> Vec<String> {
    if json[0].as_str() != Some("SUCCESS") {
        return Vec::new();
    }

    json[1]
        .as_array()
        .map(|segments| {
            segments
                .iter()
                .filter_map(|segment| segment[1].as_array())
                .flatten()
                .filter_map(|c| c.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl Transliterator for InputToolsTransliterator {
    async fn suggest(&self, text: &str) -> Vec<String> {
        match self.fetch(text).await {
            Ok(candidates) => candidates,
            Err(e) => {
                log::warn!("Transliteration failed for {:?}: {}", text, e);
                Vec::new()
            }
        }
    }
}
