//! Evolution configuration.
//!
//! [`EvolveConfig`] holds all parameters that control the generation loop.

use super::types::Target;
use crate::error::ConfigError;
use std::ops::RangeInclusive;

/// Target used when none is configured.
pub const DEFAULT_TARGET: &str = "Computer Science 1944 Cool Topics Project";

/// Configuration for a run.
///
/// # Defaults
///
/// ```
/// use weasel::evolve::EvolveConfig;
///
/// let config = EvolveConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.character_range, 0..=255);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use weasel::evolve::EvolveConfig;
///
/// let config = EvolveConfig::default()
///     .with_target("METHINKS IT IS LIKE A WEASEL")
///     .with_population_size(200)
///     .with_mutation_chance(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolveConfig {
    /// Number of mutated copies of the current best tried per generation.
    ///
    /// Larger populations reach the target in fewer generations at a
    /// higher cost per generation.
    pub population_size: usize,

    /// The string to evolve toward.
    pub target: Target,

    /// Independent per-character probability of replacement (0.0–1.0).
    pub mutation_chance: f64,

    /// Bytes that initialization and mutation draw from, uniformly.
    pub character_range: RangeInclusive<u8>,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from the wall clock.
    pub seed: Option<u64>,

    /// Optional cap on the number of generations.
    ///
    /// `None` runs until the target is reached (the default).
    pub max_generations: Option<usize>,
}

impl Default for EvolveConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            target: Target::from(DEFAULT_TARGET),
            mutation_chance: 0.01,
            character_range: u8::MIN..=u8::MAX,
            seed: None,
            max_generations: None,
        }
    }
}

impl EvolveConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the target string.
    pub fn with_target(mut self, target: impl Into<Target>) -> Self {
        self.target = target.into();
        self
    }

    /// Sets the per-character mutation chance.
    pub fn with_mutation_chance(mut self, chance: f64) -> Self {
        self.mutation_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Sets the drawable character range.
    pub fn with_character_range(mut self, range: RangeInclusive<u8>) -> Self {
        self.character_range = range;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Caps the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target.is_empty() {
            return Err(ConfigError::EmptyTarget);
        }
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if !(0.0..=1.0).contains(&self.mutation_chance) {
            return Err(ConfigError::InvalidMutationChance(self.mutation_chance));
        }
        if self.character_range.is_empty() {
            return Err(ConfigError::EmptyCharacterRange);
        }
        if let Some((position, &byte)) = self
            .target
            .as_bytes()
            .iter()
            .enumerate()
            .find(|(_, b)| !self.character_range.contains(b))
        {
            return Err(ConfigError::TargetOutsideRange { position, byte });
        }
        if self.max_generations == Some(0) {
            return Err(ConfigError::ZeroGenerationLimit);
        }
        Ok(())
    }
}
