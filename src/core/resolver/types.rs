//! Resolution Types
//!
//! Queries, per-source results and the outcome shapes returned to callers.

use serde::{Deserialize, Serialize};

use super::error::SourceFailure;

// ============================================================================
// Query
// ============================================================================

/// The user's raw input, trimmed. Case and script are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Percent-encoded form for URLs.
    pub fn url_encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Source Results
// ============================================================================

/// Shape of what a source returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Definition text usable as an entry body
    InlineText,
    /// A pointer to a page that has the word
    ExternalLink,
    Absent,
}

/// Normalized value produced by one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceResult {
    /// Identifier of the adapter that produced it
    pub source: String,
    pub kind: SourceKind,
    /// Text for `inline-text`, URL for `external-link`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    /// Localized description accompanying an `external-link`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SourceResult {
    pub fn inline_text(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: SourceKind::InlineText,
            payload: Some(text.into()),
            description: None,
        }
    }

    pub fn external_link(
        source: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            kind: SourceKind::ExternalLink,
            payload: Some(url.into()),
            description: Some(description.into()),
        }
    }

    /// Body text to show or store for this result.
    ///
    /// Inline text is used as-is; a link becomes its description followed by the URL.
    pub fn body(&self) -> String {
        match (self.kind, &self.payload, &self.description) {
            (SourceKind::InlineText, Some(text), _) => text.clone(),
            (SourceKind::ExternalLink, Some(url), Some(desc)) => format!("{desc}\n{url}"),
            (SourceKind::ExternalLink, Some(url), None) => url.clone(),
            _ => String::new(),
        }
    }
}

/// What a single adapter call produced. Failures are values, not errors.
#[derive(Debug, Clone)]
pub enum SourceOutcome {
    Usable(SourceResult),
    Absent,
    Failed(SourceFailure),
}

impl SourceOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, SourceOutcome::Failed(_))
    }

    /// Short label for logs and statistics.
    pub fn label(&self) -> &'static str {
        match self {
            SourceOutcome::Usable(_) => "usable",
            SourceOutcome::Absent => "absent",
            SourceOutcome::Failed(SourceFailure::Timeout) => "timeout",
            SourceOutcome::Failed(_) => "failed",
        }
    }
}

// ============================================================================
// Outcomes
// ============================================================================

/// One entry of an aggregate outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateItem {
    pub source: String,
    pub kind: SourceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<SourceResult> for AggregateItem {
    fn from(result: SourceResult) -> Self {
        Self {
            source: result.source,
            kind: result.kind,
            payload: result.payload,
            description: result.description,
        }
    }
}

/// Result of one resolution call. Always well formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Outcome {
    #[serde(rename_all = "camelCase")]
    Resolved {
        lemma: String,
        body: String,
        originating_source: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        link: Option<String>,
    },
    Choose {
        candidates: Vec<String>,
    },
    Aggregate {
        lemma: String,
        results: Vec<AggregateItem>,
    },
    Error {
        message: String,
    },
}

impl Outcome {
    pub fn resolved(lemma: &Query, result: &SourceResult) -> Self {
        let link = match result.kind {
            SourceKind::ExternalLink => result.payload.clone(),
            _ => None,
        };
        let body = match result.kind {
            SourceKind::ExternalLink => result.description.clone().unwrap_or_default(),
            _ => result.payload.clone().unwrap_or_default(),
        };
        Outcome::Resolved {
            lemma: lemma.as_str().to_string(),
            body,
            originating_source: result.source.clone(),
            link,
        }
    }

    pub fn choose(candidates: Vec<String>) -> Self {
        Outcome::Choose { candidates }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error { .. })
    }
}
