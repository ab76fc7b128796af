//! Fitness evaluation.
//!
//! Fitness is the fraction of positions where an individual agrees with the
//! target. Higher is better; 1.0 means an exact match.

use super::types::{Individual, Target};

/// Counts the positions where `individual` and `target` hold the same byte.
///
/// Individuals are always created at target length. A shorter operand
/// limits the comparison to the common prefix.
pub fn matches(individual: &Individual, target: &Target) -> usize {
    debug_assert_eq!(individual.len(), target.len(), "length mismatch");
    individual
        .as_bytes()
        .iter()
        .zip(target.as_bytes())
        .filter(|(a, b)| a == b)
        .count()
}

/// Scores `individual` as `matches / length`, in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use weasel::evolve::{fitness, Individual, Target};
///
/// let target = Target::from("AB");
/// assert_eq!(fitness(&Individual::from_bytes("AB"), &target), 1.0);
/// assert_eq!(fitness(&Individual::from_bytes("AC"), &target), 0.5);
/// assert_eq!(fitness(&Individual::from_bytes("XY"), &target), 0.0);
/// ```
pub fn fitness(individual: &Individual, target: &Target) -> f64 {
    matches(individual, target) as f64 / target.len() as f64
}

/// Returns `true` when every position matches the target.
///
/// Compares integer counts so the check is exact for any length.
pub fn is_perfect(individual: &Individual, target: &Target) -> bool {
    individual.len() == target.len() && matches(individual, target) == target.len()
}
