//! Solve result types
//!
//! A solve produces `WordResult`s grouped by tile count into a `SolveResult`.

use std::fmt;

/// How many tiles a single word may consume
pub const MAX_TILES_PER_WORD: usize = 4;

/// Classification label attached to a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// The word is backed by only a strict subset of the merged sources
    Questionable,
}

impl Tag {
    /// Stable string form of the tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Questionable => "questionable",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single valid word found by the solver
///
/// Invariants (upheld by the classifier):
/// - `word` is the concatenation of `tiles` in order
/// - `tile_indices` and `tiles` have equal length (1 to 4)
/// - `tile_indices` contains no repeated position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordResult {
    /// Positions of the consumed tiles, in selection order
    pub tile_indices: Vec<usize>,
    /// Texts of the consumed tiles, in selection order
    pub tiles: Vec<String>,
    /// The concatenated word
    pub word: String,
    /// Classification labels
    pub tags: Vec<Tag>,
}

impl WordResult {
    /// Number of tiles consumed by this word
    #[inline]
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tile_indices.len()
    }

    /// Whether this match carries the questionable tag
    #[inline]
    #[must_use]
    pub fn is_questionable(&self) -> bool {
        self.tags.contains(&Tag::Questionable)
    }
}

/// The complete outcome of one solve invocation
///
/// Results are bucketed by tile count (1 to 4); each bucket is sorted
/// alphabetically by word, tie-broken by tile-index sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    buckets: [Vec<WordResult>; MAX_TILES_PER_WORD],
    total_found: usize,
    questionable_count: usize,
    dictionary_size: usize,
}

impl SolveResult {
    /// Build a result from pre-sorted buckets, deriving the summary counts
    #[must_use]
    pub fn new(buckets: [Vec<WordResult>; MAX_TILES_PER_WORD], dictionary_size: usize) -> Self {
        let total_found = buckets.iter().map(Vec::len).sum();
        let questionable_count = buckets
            .iter()
            .flatten()
            .filter(|r| r.is_questionable())
            .count();
        Self {
            buckets,
            total_found,
            questionable_count,
            dictionary_size,
        }
    }

    /// The empty result, used when there are no tiles to solve
    #[must_use]
    pub fn empty(dictionary_size: usize) -> Self {
        Self::new(Default::default(), dictionary_size)
    }

    /// Results that consume exactly `tile_count` tiles
    ///
    /// # Panics
    /// Panics if `tile_count` is not in `1..=4`.
    #[must_use]
    pub fn bucket(&self, tile_count: usize) -> &[WordResult] {
        assert!(
            (1..=MAX_TILES_PER_WORD).contains(&tile_count),
            "tile_count must be 1..=4, got {tile_count}"
        );
        &self.buckets[tile_count - 1]
    }

    /// Iterate all results, smallest tile count first, in bucket order
    pub fn results(&self) -> impl Iterator<Item = &WordResult> {
        self.buckets.iter().flatten()
    }

    /// Total number of words found across all buckets
    #[inline]
    #[must_use]
    pub const fn total_found(&self) -> usize {
        self.total_found
    }

    /// Number of words tagged questionable
    #[inline]
    #[must_use]
    pub const fn questionable_count(&self) -> usize {
        self.questionable_count
    }

    /// Distinct-word count of the dictionary used for the solve
    #[inline]
    #[must_use]
    pub const fn dictionary_size(&self) -> usize {
        self.dictionary_size
    }

    /// Whether no words were found
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_found == 0
    }
}
