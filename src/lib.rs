//! Single-lineage string evolution toward a fixed target.
//!
//! A random string is replicated across a population, every copy is
//! mutated independently, and the copy that matches the target at the most
//! positions becomes the parent of the next generation. The loop stops when
//! a copy matches the target exactly.
//!
//! - [`evolve`]: fitness, mutation, selection and the generation loop
//! - [`report`]: console output for a run
//! - [`random`]: seeded generator construction
//! - [`error`]: configuration and run errors
//!
//! # Example
//!
//! ```
//! use weasel::evolve::{EvolveConfig, EvolveRunner};
//!
//! let config = EvolveConfig::default()
//!     .with_target("WEASEL")
//!     .with_character_range(b'A'..=b'Z')
//!     .with_mutation_chance(0.2)
//!     .with_seed(7);
//! let result = EvolveRunner::run(&config).unwrap();
//! assert_eq!(result.best.to_string(), "WEASEL");
//! ```

pub mod error;
pub mod evolve;
pub mod random;
pub mod report;
