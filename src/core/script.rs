//! Script classification
//!
//! Tamil-script queries go through the resolution waterfall; anything else is
//! routed to the English -> Tamil suggestion path.

use serde::{Deserialize, Serialize};

/// Unicode block for Tamil (U+0B80..U+0BFF).
const TAMIL_BLOCK: std::ops::RangeInclusive<char> = '\u{0B80}'..='\u{0BFF}';

/// Script class of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptClass {
    Tamil,
    Other,
}

/// Tamil iff at least one character falls in the Tamil block.
pub fn classify(text: &str) -> ScriptClass {
    if text.chars().any(|c| TAMIL_BLOCK.contains(&c)) {
        ScriptClass::Tamil
    } else {
        ScriptClass::Other
    }
}

pub fn is_tamil(text: &str) -> bool {
    classify(text) == ScriptClass::Tamil
}
