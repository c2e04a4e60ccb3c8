//! Result aggregation
//!
//! Buckets classified matches by tile count and imposes the deterministic
//! ordering the solve contract promises: alphabetical by word within each
//! bucket, tie-broken by tile-index sequence for homographs built from
//! different positions. Distinct `(word, indices)` pairs are never merged.

use crate::core::{MAX_TILES_PER_WORD, SolveResult, WordResult};

/// Group, sort, and summarize classified matches
#[must_use]
pub fn aggregate(results: Vec<WordResult>, dictionary_size: usize) -> SolveResult {
    let mut buckets: [Vec<WordResult>; MAX_TILES_PER_WORD] = Default::default();

    for result in results {
        let tile_count = result.tile_count();
        debug_assert!((1..=MAX_TILES_PER_WORD).contains(&tile_count));
        buckets[tile_count - 1].push(result);
    }

    for bucket in &mut buckets {
        bucket.sort_by(|a, b| {
            a.word
                .cmp(&b.word)
                .then_with(|| a.tile_indices.cmp(&b.tile_indices))
        });
    }

    SolveResult::new(buckets, dictionary_size)
}
