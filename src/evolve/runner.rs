//! Generation loop execution.
//!
//! [`EvolveRunner`] drives the whole run:
//! initialize → (mutate → select → report → collapse) → repeat until the
//! best individual matches the target.

use super::config::EvolveConfig;
use super::fitness::{fitness, is_perfect};
use super::operators::{mutate, random_individual};
use super::selection::highest_scoring;
use super::types::{Individual, Population};
use crate::error::{ConfigError, EvolveError};
use crate::random::{clock_seed, create_rng};
use log::{debug, info, warn};
use std::io;
use std::time::{Duration, Instant};

/// Result of a run.
#[derive(Debug, Clone)]
pub struct EvolveResult {
    /// Best individual of the last generation executed.
    pub best: Individual,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether `best` equals the target.
    pub reached_target: bool,

    /// Seed the generator was created from.
    pub seed: u64,

    /// Wall-clock time from initialization to termination.
    pub elapsed: Duration,

    /// Character replacements summed over every individual and generation.
    pub total_mutations: usize,

    /// Best fitness of each generation, in order.
    ///
    /// Unbounded: one entry per generation, so a long uncapped run holds
    /// `generations` floats. Set `max_generations` to bound it.
    pub fitness_history: Vec<f64>,
}

/// What happened in one generation.
#[derive(Debug, Clone, Copy)]
pub struct GenerationReport<'a> {
    /// 1-based generation number.
    pub generation: usize,

    /// Slot of the best individual before collapse.
    pub best_index: usize,

    pub best: &'a Individual,

    pub fitness: f64,

    /// Character replacements across the population this generation.
    pub mutations: usize,
}

/// Receives progress from the generation loop.
///
/// All methods default to no-ops. `()` is a silent observer.
pub trait GenerationObserver {
    /// Called once, before the first generation.
    fn on_start(&mut self, _config: &EvolveConfig) -> io::Result<()> {
        Ok(())
    }

    /// Called after selection in every generation.
    fn on_generation(&mut self, _report: &GenerationReport<'_>) -> io::Result<()> {
        Ok(())
    }

    /// Called once with the final result.
    fn on_finish(&mut self, _result: &EvolveResult) -> io::Result<()> {
        Ok(())
    }
}

impl GenerationObserver for () {}

/// Executes the generation loop.
///
/// # Usage
///
/// ```
/// use weasel::evolve::{EvolveConfig, EvolveRunner};
///
/// let config = EvolveConfig::default()
///     .with_target("HI")
///     .with_character_range(b'A'..=b'Z')
///     .with_mutation_chance(0.5)
///     .with_seed(42);
/// let result = EvolveRunner::run(&config).unwrap();
/// assert!(result.reached_target);
/// assert_eq!(result.best.as_bytes(), b"HI");
/// ```
pub struct EvolveRunner;

impl EvolveRunner {
    /// Runs until the target is reached or the generation cap is hit.
    pub fn run(config: &EvolveConfig) -> Result<EvolveResult, EvolveError> {
        Self::run_with_observer(config, &mut ())
    }

    /// Runs, reporting every generation to `observer`.
    pub fn run_with_observer<O: GenerationObserver>(
        config: &EvolveConfig,
        observer: &mut O,
    ) -> Result<EvolveResult, EvolveError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(clock_seed);
        let mut rng = create_rng(seed);
        let target = &config.target;
        let range = &config.character_range;

        info!(
            "evolving toward {} characters: population={} mutation_chance={} seed={}",
            target.len(),
            config.population_size,
            config.mutation_chance,
            seed
        );

        let start = Instant::now();
        observer.on_start(config)?;

        // 1. One random individual, replicated into every slot
        let ancestor = random_individual(target.len(), range, &mut rng);
        let mut population = Population::replicate(&ancestor, config.population_size)
            .ok_or(ConfigError::EmptyPopulation)?;

        let mut generation = 0usize;
        let mut best_index = 0usize;
        let mut fitness_history = Vec::new();
        let mut total_mutations = 0usize;
        let mut reached_target = false;

        // 2. Generation loop
        loop {
            if config.max_generations.is_some_and(|max| generation >= max) {
                warn!("generation limit reached without matching the target");
                break;
            }

            generation += 1;

            // Every slot mutates against its own draws
            let mutations: usize = population
                .iter_mut()
                .map(|ind| mutate(ind, config.mutation_chance, range, &mut rng))
                .sum();
            total_mutations += mutations;

            let (idx, score) = highest_scoring(&population, target);
            best_index = idx;
            fitness_history.push(score);

            debug!("generation {generation}: best={idx} fitness={score} mutations={mutations}");

            observer.on_generation(&GenerationReport {
                generation,
                best_index: idx,
                best: &population[idx],
                fitness: score,
                mutations,
            })?;

            if is_perfect(&population[idx], target) {
                reached_target = true;
                break;
            }

            // Collapse: the best becomes every slot's starting point
            population.collapse_to(idx);
        }

        let best = population[best_index].clone();
        let result = EvolveResult {
            best_fitness: fitness(&best, target),
            best,
            generations: generation,
            reached_target,
            seed,
            elapsed: start.elapsed(),
            total_mutations,
            fitness_history,
        };

        info!(
            "finished after {} generations in {} ms (target reached: {})",
            result.generations,
            result.elapsed.as_millis(),
            result.reached_target
        );

        observer.on_finish(&result)?;
        Ok(result)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn printable(target: &str) -> EvolveConfig {
        EvolveConfig::default()
            .with_target(target)
            .with_character_range(b' '..=b'Z')
            .with_seed(42)
            .with_max_generations(100_000)
    }

    #[test]
    fn test_two_char_population_of_one() {
        // Every generation is a fresh random pair: ~65536 expected tries.
        let config = EvolveConfig::default()
            .with_target("AB")
            .with_population_size(1)
            .with_mutation_chance(1.0)
            .with_seed(42)
            .with_max_generations(5_000_000);

        let result = EvolveRunner::run(&config).unwrap();

        assert!(result.reached_target);
        assert_eq!(result.best.as_bytes(), b"AB");
        assert_eq!(result.best_fitness, 1.0);
        assert_eq!(result.total_mutations, 2 * result.generations);
    }

    #[test]
    fn test_converges_on_phrase() {
        let config = printable("HELLO WORLD").with_mutation_chance(0.05);

        let result = EvolveRunner::run(&config).unwrap();

        assert!(result.reached_target, "stopped at {}", result.best);
        assert_eq!(result.best.as_bytes(), b"HELLO WORLD");
        assert_eq!(result.best_fitness, 1.0);
        assert_eq!(result.fitness_history.last(), Some(&1.0));
    }

    #[test]
    fn test_history_length_matches_generations() {
        let config = printable("METHINKS IT IS LIKE A WEASEL");
        let result = EvolveRunner::run(&config).unwrap();
        assert_eq!(result.fitness_history.len(), result.generations);
    }

    #[test]
    fn test_history_never_regresses() {
        let config = printable("METHINKS IT IS LIKE A WEASEL").with_mutation_chance(0.01);

        let result = EvolveRunner::run(&config).unwrap();

        // With 100 copies, at least one survives unmutated in practice.
        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "best fitness regressed: {} -> {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn test_same_seed_same_run() {
        let config = printable("SEEDED RUN").with_mutation_chance(0.05);
        let a = EvolveRunner::run(&config).unwrap();
        let b = EvolveRunner::run(&config).unwrap();
        assert_eq!(a.generations, b.generations);
        assert_eq!(a.fitness_history, b.fitness_history);
        assert_eq!(a.seed, 42);
    }

    #[test]
    fn test_generation_limit() {
        let config = EvolveConfig::default()
            .with_mutation_chance(0.0)
            .with_seed(42)
            .with_max_generations(10);

        let result = EvolveRunner::run(&config).unwrap();

        assert!(!result.reached_target);
        assert_eq!(result.generations, 10);
        assert_eq!(result.total_mutations, 0);
        assert_eq!(result.best.len(), config.target.len());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EvolveConfig::default().with_target("");
        let err = EvolveRunner::run(&config).unwrap_err();
        assert!(matches!(err, EvolveError::Config(ConfigError::EmptyTarget)));
    }

    #[derive(Default)]
    struct Recorder {
        started: bool,
        reports: Vec<(usize, Vec<u8>, f64, usize)>,
        finished_generations: Option<usize>,
    }

    impl GenerationObserver for Recorder {
        fn on_start(&mut self, _config: &EvolveConfig) -> io::Result<()> {
            self.started = true;
            Ok(())
        }

        fn on_generation(&mut self, report: &GenerationReport<'_>) -> io::Result<()> {
            self.reports.push((
                report.generation,
                report.best.as_bytes().to_vec(),
                report.fitness,
                report.best_index,
            ));
            Ok(())
        }

        fn on_finish(&mut self, result: &EvolveResult) -> io::Result<()> {
            self.finished_generations = Some(result.generations);
            Ok(())
        }
    }

    #[test]
    fn test_observer_sees_every_generation() {
        let config = printable("OBSERVED").with_population_size(20).with_mutation_chance(0.1);
        let mut recorder = Recorder::default();

        let result = EvolveRunner::run_with_observer(&config, &mut recorder).unwrap();

        assert!(recorder.started);
        assert_eq!(recorder.reports.len(), result.generations);
        assert_eq!(recorder.finished_generations, Some(result.generations));
        for (i, (generation, best, _, idx)) in recorder.reports.iter().enumerate() {
            assert_eq!(*generation, i + 1);
            assert_eq!(best.len(), config.target.len());
            assert!(*idx < config.population_size);
        }
        let (_, last, score, _) = recorder.reports.last().unwrap();
        assert_eq!(last.as_slice(), b"OBSERVED");
        assert_eq!(*score, 1.0);
    }

    struct FailingObserver;

    impl GenerationObserver for FailingObserver {
        fn on_generation(&mut self, _report: &GenerationReport<'_>) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_observer_error_stops_run() {
        let config = printable("ABC");
        let err = EvolveRunner::run_with_observer(&config, &mut FailingObserver).unwrap_err();
        assert!(matches!(err, EvolveError::Observer(_)));
    }
}
