//! Puzzle solving command
//!
//! Glue between raw host input (tile strings, selection, settings) and the
//! solving engine.

use crate::core::{SolveResult, tiles_from_strings};
use crate::dictionary::Dictionary;
use crate::solver::{SolveError, Solver};

/// Fallback puzzle used when the host supplies no tiles
pub const DEFAULT_TILES: &[&str] = &[
    "far", "ci", "ca", "lly", "rec", "ep", "tac", "les", "cap", "itu", "la", "te", "jou", "rn",
    "al", "ing", "aft", "er", "tho", "ught",
];

/// Solve a puzzle given raw tile strings
///
/// Tiles are validated and normalized before the search runs; a malformed
/// tile rejects the whole request.
///
/// # Errors
///
/// Returns an error if:
/// - Any tile string is empty or contains non-letter characters
/// - `min_length` is outside the accepted range
/// - The search exceeds `node_budget` (when supplied)
pub fn solve_puzzle<S: AsRef<str>>(
    raw_tiles: &[S],
    dictionary: &Dictionary,
    min_length: usize,
    node_budget: Option<usize>,
) -> Result<SolveResult, SolveError> {
    let tiles =
        tiles_from_strings(raw_tiles).map_err(|e| SolveError::InvalidInput(e.to_string()))?;

    let mut solver = Solver::new(dictionary);
    if let Some(budget) = node_budget {
        solver = solver.with_node_budget(budget);
    }

    solver.solve(&tiles, min_length)
}
