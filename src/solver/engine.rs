//! Solve entry point
//!
//! Ties the pipeline together: prefix-pruned generation, parallel
//! classification, deterministic aggregation. A `Solver` is an immutable
//! snapshot over one dictionary; changing the dictionary selection means
//! building a fresh `Dictionary` and a fresh `Solver`, never mutating either.

use crate::core::{SolveResult, Tile};
use crate::dictionary::{Dictionary, PrefixIndex};
use crate::solver::aggregator::aggregate;
use crate::solver::classifier::classify;
use crate::solver::generator::{DEFAULT_NODE_BUDGET, generate};
use crate::solver::SolveError;
use log::debug;
use rayon::prelude::*;

/// Inclusive range of accepted minimum word lengths
pub const MIN_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 2..=10;

/// Quartiles solver over one dictionary snapshot
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    prefix_index: PrefixIndex,
    node_budget: usize,
}

impl<'a> Solver<'a> {
    /// Create a solver for the given dictionary, building its prefix index
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        let prefix_index = PrefixIndex::new(dictionary.words());
        debug!(
            "prefix index ready: {} nodes over {} words",
            prefix_index.node_count(),
            dictionary.len()
        );
        Self {
            dictionary,
            prefix_index,
            node_budget: DEFAULT_NODE_BUDGET,
        }
    }

    /// Override the search-node budget
    #[must_use]
    pub const fn with_node_budget(mut self, node_budget: usize) -> Self {
        self.node_budget = node_budget;
        self
    }

    /// Find every valid word obtainable from 1 to 4 of the given tiles
    ///
    /// Repeated solves on identical input produce identical results: the
    /// generator's depth-first order and the aggregator's sort are both
    /// fully specified.
    ///
    /// # Errors
    /// - `SolveError::InvalidInput` when `min_length` is outside `2..=10`
    /// - `SolveError::SearchBudgetExceeded` when the search exceeds the
    ///   node budget
    ///
    /// An empty tile list is not an error: it yields an empty result, so a
    /// caller can tell "nothing to solve" apart from a dictionary failure.
    pub fn solve(&self, tiles: &[Tile], min_length: usize) -> Result<SolveResult, SolveError> {
        if !MIN_LENGTH_RANGE.contains(&min_length) {
            return Err(SolveError::InvalidInput(format!(
                "minimum length {min_length} outside {}..={}",
                MIN_LENGTH_RANGE.start(),
                MIN_LENGTH_RANGE.end()
            )));
        }

        if tiles.is_empty() {
            return Ok(SolveResult::empty(self.dictionary.len()));
        }

        let candidates = generate(tiles, &self.prefix_index, self.node_budget)?;

        // Indexed parallel iteration preserves candidate order; the
        // aggregator re-sorts regardless, so ordering never depends on
        // worker scheduling.
        let matches: Vec<_> = candidates
            .par_iter()
            .filter_map(|candidate| classify(candidate, tiles, self.dictionary, min_length))
            .collect();

        debug!(
            "{} of {} candidates are dictionary words",
            matches.len(),
            candidates.len()
        );
        Ok(aggregate(matches, self.dictionary.len()))
    }
}
