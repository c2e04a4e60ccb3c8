//! Single-word lookup command
//!
//! Reports whether a word is in the active dictionary and which sources
//! back it.

use crate::dictionary::{Dictionary, DictionarySource, Provenance};

/// Result of looking up one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub word: String,
    pub sources: Vec<DictionarySource>,
}

impl CheckResult {
    /// Whether the word is in the active dictionary at all
    #[must_use]
    pub fn is_word(&self) -> bool {
        !self.sources.is_empty()
    }
}

/// Look up a word in the active dictionary
#[must_use]
pub fn check_word(word: &str, dictionary: &Dictionary) -> CheckResult {
    let word = word.trim().to_lowercase();
    let sources = dictionary
        .provenance(&word)
        .map(Provenance::sources)
        .unwrap_or_default();
    CheckResult { word, sources }
}
