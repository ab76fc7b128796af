//! Error types.

use thiserror::Error;

/// Reasons an [`EvolveConfig`](crate::evolve::EvolveConfig) cannot be run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// The target has no characters, so fitness is undefined.
    #[error("target must not be empty")]
    EmptyTarget,

    /// The population has no slots to mutate or select from.
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    /// Mutation chance is NaN or outside `[0, 1]`.
    #[error("mutation_chance must be within [0, 1], got {0}")]
    InvalidMutationChance(f64),

    /// The character range contains no bytes.
    #[error("character_range must not be empty")]
    EmptyCharacterRange,

    /// A target byte can never be produced by mutation.
    #[error("target byte {byte:#04x} at position {position} is outside the character range")]
    TargetOutsideRange { position: usize, byte: u8 },

    /// `max_generations` was set to zero.
    #[error("max_generations must be positive or None")]
    ZeroGenerationLimit,
}

/// Errors returned by [`EvolveRunner`](crate::evolve::EvolveRunner).
#[derive(Debug, Error)]
pub enum EvolveError {
    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A generation observer failed to write its output.
    #[error("observer failed: {0}")]
    Observer(#[from] std::io::Error),
}
