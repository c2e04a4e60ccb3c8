//! Core domain types for Quartiles
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear structural invariants.

mod result;
mod tile;

pub use result::{MAX_TILES_PER_WORD, SolveResult, Tag, WordResult};
pub use tile::{Tile, TileError, tiles_from_strings};
