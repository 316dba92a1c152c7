//! English -> Tamil suggestions
//!
//! Non-Tamil queries bypass the waterfall. Candidates come from the static
//! concept map first, then from the transliteration capability.

mod concepts;
mod transliterate;

pub use concepts::{build_default_concepts, ConceptMap, ConceptMapError};
pub use transliterate::{InputToolsTransliterator, Transliterator, INPUT_TOOLS_URL};

#[cfg(test)]
pub use transliterate::MockTransliterator;

use std::sync::Arc;

#[derive(Clone)]
pub struct SuggestionService {
    concepts: ConceptMap,
    transliterator: Option<Arc<dyn Transliterator>>,
    max_candidates: usize,
}

impl SuggestionService {
    pub fn new(
        concepts: ConceptMap,
        transliterator: Option<Arc<dyn Transliterator>>,
        max_candidates: usize,
    ) -> Self {
        Self {
            concepts,
            transliterator,
            max_candidates,
        }
    }

    /// Concept map only, no network.
    pub fn offline() -> Self {
        Self::new(build_default_concepts(), None, 5)
    }

    /// Ordered, de-duplicated candidate spellings for `text`.
    pub async fn suggest(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        let mut candidates: Vec<String> = self.concepts.lookup(text).to_vec();

        if let Some(transliterator) = &self.transliterator {
            for candidate in transliterator.suggest(text).await {
                if !candidates.contains(&candidate) {
                    candidates.push(candidate);
                }
            }
        }

        candidates.truncate(self.max_candidates);
        log::debug!("{} suggestion(s) for {:?}", candidates.len(), text);
        candidates
    }
}

impl Default for SuggestionService {
    fn default() -> Self {
        Self::offline()
    }
}
