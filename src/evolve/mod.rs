//! Single-lineage string evolution.
//!
//! Every generation mutates many copies of one parent string, keeps the
//! copy closest to the target, and makes it the parent of the next
//! generation. There is no crossover; population size only sets how many
//! independent mutation trials each generation gets.
//!
//! # Key Types
//!
//! - [`EvolveConfig`]: Run parameters (population size, target, mutation chance)
//! - [`EvolveRunner`]: Executes the generation loop
//! - [`EvolveResult`]: Final individual with run statistics
//! - [`GenerationObserver`]: Per-generation progress hook
//!
//! # Operations
//!
//! - [`fitness`]: fraction of positions matching the target
//! - [`mutate`]: independent per-character replacement
//! - [`highest_scoring`]: first individual with the greatest fitness
//!
//! # References
//!
//! - Dawkins (1986), *The Blind Watchmaker*, ch. 3 ("weasel program")

mod config;
mod fitness;
mod operators;
mod runner;
mod selection;
mod types;

pub use config::{EvolveConfig, DEFAULT_TARGET};
pub use fitness::{fitness, is_perfect, matches};
pub use operators::{mutate, random_individual};
pub use runner::{EvolveResult, EvolveRunner, GenerationObserver, GenerationReport};
pub use selection::highest_scoring;
pub use types::{Individual, Population, Target};
