//! Initialization and mutation operators.
//!
//! Both draw characters uniformly from a [`RangeInclusive<u8>`]; the
//! default configuration uses the full byte range.

use super::types::Individual;
use rand::Rng;
use std::ops::RangeInclusive;

/// Creates an individual of `len` characters drawn uniformly from `range`.
///
/// # Panics
/// Panics if `range` is empty.
pub fn random_individual<R: Rng>(
    len: usize,
    range: &RangeInclusive<u8>,
    rng: &mut R,
) -> Individual {
    let genes: Vec<u8> = (0..len).map(|_| rng.random_range(range.clone())).collect();
    Individual::from_bytes(genes)
}

/// Per-character point mutation.
///
/// Visits every position exactly once. Each position is replaced with
/// probability `chance` by a character drawn uniformly from `range`,
/// independently of every other position. The replacement may equal the
/// original character; it still counts as a mutation.
///
/// Returns the number of positions replaced.
///
/// # Complexity
/// O(n) time, O(1) space
///
/// # Panics
/// Panics if `chance` is outside `[0, 1]` or `range` is empty.
pub fn mutate<R: Rng>(
    individual: &mut Individual,
    chance: f64,
    range: &RangeInclusive<u8>,
    rng: &mut R,
) -> usize {
    let mut mutations = 0;
    for c in individual.bytes_mut() {
        if rng.random_bool(chance) {
            *c = rng.random_range(range.clone());
            mutations += 1;
        }
    }
    mutations
}
