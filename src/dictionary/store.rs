//! Merged dictionary store
//!
//! Loads one or more word-list sources into a single queryable set while
//! retaining, per word, which source(s) contained it. The store is read-only
//! after construction; a dictionary-selection change means building a fresh
//! store and swapping it in, never mutating in place.

use log::debug;
use rustc_hash::FxHashMap;
use std::fmt;

/// One underlying word-list source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionarySource {
    Twl06,
    Enable,
}

impl DictionarySource {
    /// Stable string form of the source name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Twl06 => "twl06",
            Self::Enable => "enable",
        }
    }
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which source dictionaries back the active dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DictionarySelection {
    Twl06,
    Enable,
    #[default]
    Both,
}

impl DictionarySelection {
    /// Create a selection from a name string
    ///
    /// Supported names: "twl06", "enable", "both". Defaults to both if the
    /// name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "twl06" => Self::Twl06,
            "enable" => Self::Enable,
            _ => Self::Both,
        }
    }

    /// Stable string form of the selection name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Twl06 => "twl06",
            Self::Enable => "enable",
            Self::Both => "both",
        }
    }

    /// The sources this selection merges, in load order
    #[must_use]
    pub fn sources(self) -> &'static [DictionarySource] {
        match self {
            Self::Twl06 => &[DictionarySource::Twl06],
            Self::Enable => &[DictionarySource::Enable],
            Self::Both => &[DictionarySource::Twl06, DictionarySource::Enable],
        }
    }
}

impl fmt::Display for DictionarySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-word source membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Provenance {
    twl06: bool,
    enable: bool,
}

impl Provenance {
    /// Record that the word appears in `source`
    pub const fn insert(&mut self, source: DictionarySource) {
        match source {
            DictionarySource::Twl06 => self.twl06 = true,
            DictionarySource::Enable => self.enable = true,
        }
    }

    /// Whether the word appears in `source`
    #[must_use]
    pub const fn contains(self, source: DictionarySource) -> bool {
        match source {
            DictionarySource::Twl06 => self.twl06,
            DictionarySource::Enable => self.enable,
        }
    }

    /// Whether every known source agrees on the word
    #[must_use]
    pub const fn is_consensus(self) -> bool {
        self.twl06 && self.enable
    }

    /// The sources containing the word, in canonical order
    #[must_use]
    pub fn sources(self) -> Vec<DictionarySource> {
        let mut out = Vec::with_capacity(2);
        if self.twl06 {
            out.push(DictionarySource::Twl06);
        }
        if self.enable {
            out.push(DictionarySource::Enable);
        }
        out
    }
}

/// Error type for dictionary construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// A selected source contributed no usable words
    EmptySource(DictionarySource),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySource(source) => {
                write!(f, "Dictionary source '{source}' is missing or empty")
            }
        }
    }
}

impl std::error::Error for DictionaryError {}

/// The active merged dictionary
///
/// Maps every distinct word of the selected sources to its provenance.
#[derive(Debug, Clone)]
pub struct Dictionary {
    selection: DictionarySelection,
    words: FxHashMap<String, Provenance>,
}

impl Dictionary {
    /// Build a dictionary from explicit word lists
    ///
    /// Only the lists named by `selection` are consulted. Entries are trimmed
    /// and lowercased; blank entries are rejected as malformed by making the
    /// source count as empty-equivalent only when nothing valid remains.
    ///
    /// # Errors
    /// Returns `DictionaryError::EmptySource` when a selected source
    /// contributes zero usable words.
    pub fn build<S: AsRef<str>>(
        selection: DictionarySelection,
        twl06_words: &[S],
        enable_words: &[S],
    ) -> Result<Self, DictionaryError> {
        let mut words: FxHashMap<String, Provenance> = FxHashMap::default();

        for &source in selection.sources() {
            let list: &[S] = match source {
                DictionarySource::Twl06 => twl06_words,
                DictionarySource::Enable => enable_words,
            };

            let mut loaded = 0usize;
            for raw in list {
                let word = raw.as_ref().trim().to_lowercase();
                if word.is_empty() {
                    continue;
                }
                words.entry(word).or_default().insert(source);
                loaded += 1;
            }

            if loaded == 0 {
                return Err(DictionaryError::EmptySource(source));
            }
            debug!("loaded {loaded} words from source '{source}'");
        }

        debug!(
            "dictionary '{selection}' holds {} distinct words",
            words.len()
        );
        Ok(Self { selection, words })
    }

    /// Build a dictionary from the word lists compiled into the binary
    ///
    /// # Errors
    /// Returns `DictionaryError::EmptySource` when a bundled list is empty.
    pub fn embedded(selection: DictionarySelection) -> Result<Self, DictionaryError> {
        use crate::wordlists::{ENABLE, TWL06};
        Self::build(selection, TWL06, ENABLE)
    }

    /// The selection this dictionary was built for
    #[inline]
    #[must_use]
    pub const fn selection(&self) -> DictionarySelection {
        self.selection
    }

    /// Whether `word` is a complete dictionary word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Source membership for `word`, if it is a dictionary word
    #[inline]
    #[must_use]
    pub fn provenance(&self, word: &str) -> Option<Provenance> {
        self.words.get(word).copied()
    }

    /// Number of distinct words in the merged set
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the merged set is empty (never true for a built dictionary)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the distinct words of the merged set
    ///
    /// Iteration order is unspecified; callers needing determinism must sort.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }
}
