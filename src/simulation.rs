//! Driver: run a seed through a fixed number of generations.

use std::io::{self, Write};

use thiserror::Error;
use tracing::{debug, info};

use crate::life106;
use crate::seed::DEFAULT_MAX_SEED_CELLS;
use crate::sparselife::{Engine, Generation};

/// Generations printed by default, after the seed.
pub const DEFAULT_GENERATIONS: u64 = 10;

/// Configuration for a simulation run.
///
/// Use `SimulationConfig::default()` for the classic console behaviour, or
/// adjust individual knobs via the builder methods.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Number of successor generations to compute and emit.
    pub generations: u64,
    /// Upper bound on seed population for prompted and file seeds.
    /// `None` means unbounded. Presets are never bounded.
    pub max_seed_cells: Option<usize>,
    /// Also emit the seed itself before the first successor.
    pub emit_seed: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generations: DEFAULT_GENERATIONS,
            max_seed_cells: Some(DEFAULT_MAX_SEED_CELLS),
            emit_seed: false,
        }
    }
}

impl SimulationConfig {
    pub fn generations(mut self, n: u64) -> Self {
        self.generations = n;
        self
    }

    pub fn max_seed_cells(mut self, n: usize) -> Self {
        self.max_seed_cells = Some(n.max(1));
        self
    }

    pub fn unbounded_seed(mut self) -> Self {
        self.max_seed_cells = None;
        self
    }

    pub fn emit_seed(mut self, emit: bool) -> Self {
        self.emit_seed = emit;
        self
    }
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("failed to emit generation {index}: {source}")]
    Sink { index: u64, source: io::Error },
}

/// Outcome of [`run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Successor generations computed.
    pub generations: u64,
    pub final_population: usize,
}

/// Successive generations of a seed, as an iterator.
///
/// Yields exactly `generations` items; the seed itself is not yielded.
pub struct Simulation {
    engine: Engine,
    current: Generation,
    remaining: u64,
}

impl Simulation {
    pub fn new(seed: Generation, generations: u64) -> Self {
        Self {
            engine: Engine::new(),
            current: seed,
            remaining: generations,
        }
    }

    /// The most recently produced generation, or the seed before the first step.
    pub fn current(&self) -> &Generation {
        &self.current
    }
}

impl Iterator for Simulation {
    type Item = Generation;

    fn next(&mut self) -> Option<Generation> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.current = self.engine.advance(&self.current);
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, usize::try_from(self.remaining).ok())
    }
}

/// Advance `seed` per `config`, handing each generation to `sink` with its
/// index (the seed is index 0, its successor index 1, and so on).
pub fn run<F>(
    seed: Generation,
    config: &SimulationConfig,
    mut sink: F,
) -> Result<RunSummary, SimulationError>
where
    F: FnMut(u64, &Generation) -> io::Result<()>,
{
    info!(
        population = seed.population(),
        generations = config.generations,
        "starting simulation"
    );

    if config.emit_seed {
        sink(0, &seed).map_err(|source| SimulationError::Sink { index: 0, source })?;
    }

    let mut final_population = seed.population();
    let mut index = 0u64;
    for generation in Simulation::new(seed, config.generations) {
        index += 1;
        debug!(
            index,
            population = generation.population(),
            bounds = ?generation.bounds(),
            "generation"
        );
        sink(index, &generation).map_err(|source| SimulationError::Sink { index, source })?;
        final_population = generation.population();
    }

    info!(generations = index, final_population, "simulation finished");
    Ok(RunSummary {
        generations: index,
        final_population,
    })
}

/// [`run`] with every generation written to `out` as Life 1.06 blocks.
pub fn write_life106<W: Write>(
    seed: Generation,
    config: &SimulationConfig,
    out: &mut W,
) -> Result<RunSummary, SimulationError> {
    run(seed, config, |_, generation| life106::write_generation(out, generation))
}

#[cfg(test)]
mod tests {
    use super::{RunSummary, Simulation, SimulationConfig, run, write_life106};
    use crate::sparselife::Generation;

    fn blinker() -> Generation {
        Generation::from_cells([(1, 0), (1, 1), (1, 2)])
    }

    #[test]
    fn default_config_matches_console_driver() {
        let config = SimulationConfig::default();
        assert_eq!(config.generations, 10);
        assert_eq!(config.max_seed_cells, Some(20));
        assert!(!config.emit_seed);
        assert_eq!(config.clone().unbounded_seed().max_seed_cells, None);
        assert_eq!(config.max_seed_cells(0).max_seed_cells, Some(1));
    }

    #[test]
    fn iterator_yields_exactly_n() {
        let mut sim = Simulation::new(blinker(), 4);
        assert_eq!(sim.current(), &blinker());
        assert_eq!(sim.size_hint(), (4, Some(4)));
        let first = sim.next().unwrap();
        assert_eq!(sim.current(), &first);

        let sim = Simulation::new(blinker(), 4);
        assert_eq!(sim.size_hint(), (4, Some(4)));
        let all: Vec<Generation> = sim.collect();
        assert_eq!(all.len(), 4);
        assert_eq!(all[1], blinker());
        assert_eq!(all[3], blinker());
    }

    #[test]
    fn emits_one_block_per_generation() {
        let mut out = Vec::new();
        let summary = write_life106(blinker(), &SimulationConfig::default(), &mut out).unwrap();
        assert_eq!(
            summary,
            RunSummary {
                generations: 10,
                final_population: 3
            }
        );
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("#Life 1.06\n").count(), 10);
        assert!(text.starts_with("#Life 1.06\n0 1\n1 1\n2 1\n\n#Life 1.06\n1 0\n1 1\n1 2\n\n"));
    }

    #[test]
    fn emit_seed_prepends_index_zero() {
        let mut seen = Vec::new();
        let config = SimulationConfig::default().generations(2).emit_seed(true);
        run(blinker(), &config, |index, g| {
            seen.push((index, g.population()));
            Ok(())
        })
        .unwrap();
        assert_eq!(seen, vec![(0, 3), (1, 3), (2, 3)]);
    }

    #[test]
    fn sink_failure_names_the_generation() {
        let config = SimulationConfig::default().generations(5);
        let err = run(blinker(), &config, |index, _| {
            if index == 3 {
                Err(std::io::Error::other("closed"))
            } else {
                Ok(())
            }
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "failed to emit generation 3: closed");
    }

    #[test]
    fn empty_seed_runs_to_completion() {
        let summary = run(Generation::empty(), &SimulationConfig::default(), |_, g| {
            assert!(g.is_empty());
            Ok(())
        })
        .unwrap();
        assert_eq!(summary.generations, 10);
        assert_eq!(summary.final_population, 0);
    }
}
