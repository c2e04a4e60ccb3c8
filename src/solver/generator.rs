//! Ordered tile-combination generator
//!
//! Depth-first search over tile positions, at most four tiles deep, pruned
//! by the prefix index: a branch is cut the moment its accumulated string
//! cannot extend to any dictionary word. Tiles are tried in ascending
//! position order at every level, so the candidate stream is deterministic
//! and reproducible.

use crate::core::{MAX_TILES_PER_WORD, Tile};
use crate::dictionary::PrefixIndex;
use crate::solver::SolveError;
use log::debug;

/// Default cap on visited search nodes
///
/// A 20-tile puzzle visits at most ~124k nodes even without pruning, so the
/// default leaves ample headroom while still bounding untrusted input.
pub const DEFAULT_NODE_BUDGET: usize = 500_000;

/// An ordered, non-repeating tile-position sequence under consideration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Tile positions in selection order, all distinct
    pub indices: Vec<usize>,
    /// Concatenation of the selected tile texts
    pub word: String,
}

/// Enumerate candidates for the given tiles
///
/// Every visited node with a non-empty path is yielded, whether or not its
/// string is a complete word; downstream classification filters to real
/// matches. Each visited node counts against `budget`.
///
/// # Errors
/// Returns `SolveError::SearchBudgetExceeded` when more than `budget` nodes
/// are visited.
pub fn generate(
    tiles: &[Tile],
    index: &PrefixIndex,
    budget: usize,
) -> Result<Vec<Candidate>, SolveError> {
    let mut search = Search {
        tiles,
        index,
        budget,
        visited: 0,
        path: Vec::with_capacity(MAX_TILES_PER_WORD),
        prefix: String::new(),
        used: vec![false; tiles.len()],
        candidates: Vec::new(),
    };
    search.descend()?;
    debug!(
        "generated {} candidates from {} tiles ({} nodes visited)",
        search.candidates.len(),
        tiles.len(),
        search.visited
    );
    Ok(search.candidates)
}

struct Search<'a> {
    tiles: &'a [Tile],
    index: &'a PrefixIndex,
    budget: usize,
    visited: usize,
    path: Vec<usize>,
    prefix: String,
    used: Vec<bool>,
    candidates: Vec<Candidate>,
}

impl Search<'_> {
    fn descend(&mut self) -> Result<(), SolveError> {
        for position in 0..self.tiles.len() {
            if self.used[position] {
                continue;
            }

            self.visited += 1;
            if self.visited > self.budget {
                return Err(SolveError::SearchBudgetExceeded {
                    visited: self.visited,
                    budget: self.budget,
                });
            }

            let text = self.tiles[position].text();
            self.prefix.push_str(text);
            self.path.push(position);
            self.used[position] = true;

            self.candidates.push(Candidate {
                indices: self.path.clone(),
                word: self.prefix.clone(),
            });

            // Recurse only while the accumulated string can still reach a
            // dictionary word and the path has room for another tile.
            if self.path.len() < MAX_TILES_PER_WORD && self.index.is_prefix(&self.prefix) {
                self.descend()?;
            }

            self.used[position] = false;
            self.path.pop();
            self.prefix.truncate(self.prefix.len() - text.len());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tiles_from_strings;

    fn tiles(texts: &[&str]) -> Vec<Tile> {
        tiles_from_strings(texts).unwrap()
    }

    #[test]
    fn single_tile_yields_one_candidate() {
        let tiles = tiles(&["cat"]);
        let index = PrefixIndex::new(["cat"]);
        let candidates = generate(&tiles, &index, DEFAULT_NODE_BUDGET).unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].indices, vec![0]);
        assert_eq!(candidates[0].word, "cat");
    }

    #[test]
    fn candidates_cover_all_orderings_under_open_index() {
        // An index where everything is a prefix: no pruning, so a 3-tile
        // puzzle yields 3 + 6 + 6 = 15 ordered selections.
        let index = PrefixIndex::new([
            "abc", "acb", "bac", "bca", "cab", "cba", "ab", "ac", "ba", "bc", "ca", "cb",
        ]);
        let tiles = tiles(&["a", "b", "c"]);
        let candidates = generate(&tiles, &index, DEFAULT_NODE_BUDGET).unwrap();
        assert_eq!(candidates.len(), 15);
    }

    #[test]
    fn pruning_cuts_hopeless_branches() {
        // Only "cat..." prefixes exist, so any path not starting c,a is cut
        // right after its first yield.
        let index = PrefixIndex::new(["cat"]);
        let tiles = tiles(&["c", "a", "t"]);
        let candidates = generate(&tiles, &index, DEFAULT_NODE_BUDGET).unwrap();

        let words: Vec<&str> = candidates.iter().map(|c| c.word.as_str()).collect();
        // Depth-first, ascending position order: c, ca, cac?, cat, then the
        // cut roots a and t with their immediate children also cut.
        assert!(words.contains(&"cat"));
        assert!(!words.contains(&"cta"));
        assert!(!words.contains(&"act"));
        // "a" and "t" are visited (and yielded) before being cut
        assert!(words.contains(&"a"));
        assert!(words.contains(&"t"));
    }

    #[test]
    fn ordering_is_deterministic_depth_first() {
        let index = PrefixIndex::new(["ab", "abc", "ba"]);
        let tiles = tiles(&["a", "b", "c"]);
        let candidates = generate(&tiles, &index, DEFAULT_NODE_BUDGET).unwrap();

        let first: Vec<Vec<usize>> = candidates.iter().map(|c| c.indices.clone()).collect();
        let candidates2 = generate(&tiles, &index, DEFAULT_NODE_BUDGET).unwrap();
        let second: Vec<Vec<usize>> = candidates2.iter().map(|c| c.indices.clone()).collect();
        assert_eq!(first, second);

        // Position 0 subtree comes before position 1 subtree
        let pos_of = |indices: &[usize]| {
            first
                .iter()
                .position(|c| c.as_slice() == indices)
                .unwrap_or(usize::MAX)
        };
        assert!(pos_of(&[0]) < pos_of(&[0, 1]));
        assert!(pos_of(&[0, 1]) < pos_of(&[1]));
    }

    #[test]
    fn no_candidate_repeats_a_position() {
        let index = PrefixIndex::new(["aaaa", "aaa", "aa", "a"]);
        let tiles = tiles(&["a", "a", "a"]);
        let candidates = generate(&tiles, &index, DEFAULT_NODE_BUDGET).unwrap();

        for candidate in &candidates {
            let mut seen = vec![false; tiles.len()];
            for &position in &candidate.indices {
                assert!(!seen[position], "repeated position in {candidate:?}");
                seen[position] = true;
            }
        }
    }

    #[test]
    fn identical_tiles_at_distinct_positions_both_selectable() {
        let index = PrefixIndex::new(["aa"]);
        let tiles = tiles(&["a", "a"]);
        let candidates = generate(&tiles, &index, DEFAULT_NODE_BUDGET).unwrap();

        // Both orderings of the two positions appear, each spelling "aa"
        let pairs: Vec<&[usize]> = candidates
            .iter()
            .filter(|c| c.word == "aa")
            .map(|c| c.indices.as_slice())
            .collect();
        assert_eq!(pairs, vec![&[0, 1][..], &[1, 0][..]]);
    }

    #[test]
    fn depth_capped_at_four_tiles() {
        let index = PrefixIndex::new(["aaaaaaaa"]);
        let tiles = tiles(&["a", "a", "a", "a", "a", "a"]);
        let candidates = generate(&tiles, &index, DEFAULT_NODE_BUDGET).unwrap();

        assert!(
            candidates
                .iter()
                .all(|c| c.indices.len() <= MAX_TILES_PER_WORD)
        );
        assert!(
            candidates
                .iter()
                .any(|c| c.indices.len() == MAX_TILES_PER_WORD)
        );
    }

    #[test]
    fn empty_tile_list_yields_nothing() {
        let index = PrefixIndex::new(["cat"]);
        let candidates = generate(&[], &index, DEFAULT_NODE_BUDGET).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn budget_exhaustion_is_an_error() {
        let index = PrefixIndex::new(["aaaa", "aaa", "aa", "a"]);
        let tiles = tiles(&["a", "a", "a", "a"]);

        let err = generate(&tiles, &index, 3).unwrap_err();
        assert!(matches!(
            err,
            SolveError::SearchBudgetExceeded { visited: 4, budget: 3 }
        ));
    }

    #[test]
    fn budget_counts_pruned_nodes_too() {
        // Nothing is a prefix, but each root tile is still one visited node.
        let index = PrefixIndex::new(["zzz"]);
        let tiles = tiles(&["a", "b"]);
        assert!(generate(&tiles, &index, 2).is_ok());
        assert!(generate(&tiles, &index, 1).is_err());
    }
}
