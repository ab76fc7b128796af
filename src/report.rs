//! Console output for a run.
//!
//! ```text
//! Population Size: 100
//! Mutation Chance: 1%
//! <best individual>  |  <fitness>
//! ...
//! Completed in <N> generations.
//! Elapsed: <ms> ms
//! ```

use crate::evolve::{EvolveConfig, EvolveResult, GenerationObserver, GenerationReport};
use std::io::{self, Write};

/// Writes the run header, one line per generation and a summary.
///
/// Individuals are written as raw bytes, exactly as evolved.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GenerationObserver for ConsoleReporter<W> {
    fn on_start(&mut self, config: &EvolveConfig) -> io::Result<()> {
        writeln!(self.out, "Population Size: {}", config.population_size)?;
        writeln!(
            self.out,
            "Mutation Chance: {}%",
            format_percent(config.mutation_chance)
        )
    }

    fn on_generation(&mut self, report: &GenerationReport<'_>) -> io::Result<()> {
        self.out.write_all(report.best.as_bytes())?;
        writeln!(self.out, "  |  {}", report.fitness)
    }

    fn on_finish(&mut self, result: &EvolveResult) -> io::Result<()> {
        writeln!(self.out, "Completed in {} generations.", result.generations)?;
        writeln!(self.out, "Elapsed: {} ms", result.elapsed.as_millis())?;
        self.out.flush()
    }
}

/// Formats a probability as a percentage without float noise (0.07 → "7").
fn format_percent(chance: f64) -> String {
    let s = format!("{:.4}", chance * 100.0);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
