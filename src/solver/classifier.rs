//! Match classification
//!
//! Turns a candidate into a `WordResult` when its concatenation is a complete
//! dictionary word of sufficient length. Tagging is isolated behind the
//! `TagPolicy` trait so the policy can be swapped without touching the
//! generator.

use crate::core::{Tag, Tile, WordResult};
use crate::dictionary::{Dictionary, DictionarySelection, Provenance};
use crate::solver::generator::Candidate;

/// A policy for deriving classification tags from a word's provenance
pub trait TagPolicy {
    /// Tags for a confirmed dictionary word
    fn tags(&self, selection: DictionarySelection, provenance: Provenance) -> Vec<Tag>;
}

/// Default policy: under a merged dictionary, a word backed by only one
/// source is questionable
///
/// Single-source membership is a weaker signal than full consensus, which is
/// what surfaces as a "review needed" marker to the player.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsensusTagging;

impl TagPolicy for ConsensusTagging {
    fn tags(&self, selection: DictionarySelection, provenance: Provenance) -> Vec<Tag> {
        if selection == DictionarySelection::Both && !provenance.is_consensus() {
            vec![Tag::Questionable]
        } else {
            Vec::new()
        }
    }
}

/// Classify a candidate with the default tag policy
///
/// Returns `None` when the candidate's word is shorter than `min_length` or
/// is not a complete dictionary word.
#[must_use]
pub fn classify(
    candidate: &Candidate,
    tiles: &[Tile],
    dictionary: &Dictionary,
    min_length: usize,
) -> Option<WordResult> {
    classify_with(&ConsensusTagging, candidate, tiles, dictionary, min_length)
}

/// Classify a candidate with an explicit tag policy
#[must_use]
pub fn classify_with<P: TagPolicy>(
    policy: &P,
    candidate: &Candidate,
    tiles: &[Tile],
    dictionary: &Dictionary,
    min_length: usize,
) -> Option<WordResult> {
    if candidate.word.len() < min_length {
        return None;
    }

    let provenance = dictionary.provenance(&candidate.word)?;
    let tags = policy.tags(dictionary.selection(), provenance);

    Some(WordResult {
        tile_indices: candidate.indices.clone(),
        tiles: candidate
            .indices
            .iter()
            .map(|&position| tiles[position].text().to_string())
            .collect(),
        word: candidate.word.clone(),
        tags,
    })
}
