//! English concept words mapped to Tamil lemmas.
//!
//! One-way map: "virtue" -> ["அறம்"], never the reverse. Keys are matched
//! case-insensitively.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

/// Errors loading a concept map file
#[derive(Debug, thiserror::Error)]
pub enum ConceptMapError {
    #[error("Failed to read concept map: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse concept map: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default)]
pub struct ConceptMap {
    concepts: HashMap<String, Vec<String>>,
}

impl ConceptMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a TOML file.
    ///
    /// Expected format:
    /// ```toml
    /// [concepts]
    /// virtue = ["அறம்"]
    /// love = ["அன்பு", "காதல்"]
    /// ```
    pub fn from_toml_file(path: &Path) -> Result<Self, ConceptMapError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConceptMapError> {
        #[derive(Deserialize)]
        struct TomlConcepts {
            #[serde(default)]
            concepts: HashMap<String, Vec<String>>,
        }

        let parsed: TomlConcepts = toml::from_str(content)?;
        let mut map = Self::new();
        for (word, lemmas) in parsed.concepts {
            let lemmas: Vec<&str> = lemmas.iter().map(String::as_str).collect();
            map.add(&word, &lemmas);
        }
        Ok(map)
    }

    /// Add Tamil lemmas for an English word, keeping earlier ones first.
    pub fn add(&mut self, word: &str, lemmas: &[&str]) {
        let entry = self.concepts.entry(word.trim().to_lowercase()).or_default();
        for lemma in lemmas {
            if !entry.iter().any(|l| l == lemma) {
                entry.push((*lemma).to_string());
            }
        }
    }

    /// Merge another map into this one.
    pub fn merge(&mut self, other: &ConceptMap) {
        for (word, lemmas) in &other.concepts {
            let lemmas: Vec<&str> = lemmas.iter().map(String::as_str).collect();
            self.add(word, &lemmas);
        }
    }

    pub fn lookup(&self, word: &str) -> &[String] {
        self.concepts
            .get(&word.trim().to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}

/// Built-in concepts covering common ethical and everyday words.
pub fn build_default_concepts() -> ConceptMap {
    let mut map = ConceptMap::new();

    map.add("virtue", &["அறம்"]);
    map.add("righteousness", &["அறம்"]);
    map.add("wealth", &["பொருள்", "செல்வம்"]);
    map.add("love", &["அன்பு", "காதல்"]);
    map.add("pleasure", &["இன்பம்"]);
    map.add("knowledge", &["அறிவு"]);
    map.add("education", &["கல்வி"]);
    map.add("truth", &["உண்மை", "வாய்மை"]);
    map.add("friendship", &["நட்பு"]);
    map.add("patience", &["பொறுமை"]);
    map.add("compassion", &["அருள்", "இரக்கம்"]);
    map.add("mother", &["அம்மா", "தாய்"]);
    map.add("father", &["அப்பா", "தந்தை"]);
    map.add("water", &["நீர்", "தண்ணீர்"]);
    map.add("rain", &["மழை"]);
    map.add("sun", &["சூரியன்", "ஞாயிறு"]);
    map.add("moon", &["நிலா", "திங்கள்"]);
    map.add("language", &["மொழி"]);
    map.add("word", &["சொல்"]);
    map.add("dictionary", &["அகராதி"]);
    map.add("book", &["நூல்", "புத்தகம்"]);
    map.add("house", &["வீடு"]);
    map.add("country", &["நாடு"]);
    map.add("village", &["ஊர்", "கிராமம்"]);
    map.add("king", &["அரசன்", "மன்னன்"]);

    map
}
