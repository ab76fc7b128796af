//! Selection of the fittest individual.
//!
//! The loop keeps exactly one parent per generation, so selection is a
//! single linear scan rather than a sampling strategy.

use super::fitness::fitness;
use super::types::{Population, Target};

/// Finds the highest scoring individual in `population`.
///
/// Index 0 is the default best and the scan starts at index 1. A later
/// individual only takes over on a strictly greater score, so the lowest
/// index wins ties.
///
/// Returns `(index, score)`.
///
/// # Complexity
/// O(n · L) for n individuals of length L
pub fn highest_scoring(population: &Population, target: &Target) -> (usize, f64) {
    let mut best_idx = 0;
    let mut highest = fitness(&population[0], target);

    for (i, ind) in population.iter().enumerate().skip(1) {
        let score = fitness(ind, target);
        if score > highest {
            highest = score;
            best_idx = i;
        }
    }

    (best_idx, highest)
}
