//! Run configuration for the evolution engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::genome::Genome;

/// The target string from the classic formulation of this search.
pub const CLASSIC_TARGET: &str = "1101101101";

/// Parameters of an evolution run.
///
/// [`EvolutionConfig::new`] starts from the classic parameter set
/// (population 10, mutation rate 0.01, top 10% selection, no generation
/// cap); `with_*` methods override individual fields. Call
/// [`validate`](EvolutionConfig::validate) before running, or let
/// [`EvolutionRunner::run`] do it.
///
/// ```
/// use bitevolve::EvolutionConfig;
///
/// let config = EvolutionConfig::new("10110".parse()?)
///     .with_population_size(40)
///     .with_mutation_rate(0.05)
///     .with_seed(7);
/// config.validate()?;
/// # Ok::<(), bitevolve::Error>(())
/// ```
///
/// [`EvolutionRunner::run`]: crate::EvolutionRunner::run
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvolutionConfig {
    /// Genome the search is steering toward. Fixes the genome length.
    pub target: Genome,
    /// Members per generation, constant across the run.
    pub population_size: usize,
    /// Per-symbol flip probability applied to every child.
    pub mutation_rate: f64,
    /// Fraction of the ranked population kept as parents, at least one.
    pub selection_fraction: f64,
    /// Stop after this many generations. `None` runs until the target is
    /// found.
    pub max_generations: Option<u64>,
    /// Stop after this many consecutive generations without improvement of
    /// the best score. `None` disables stall detection.
    pub stall_generations: Option<u64>,
    /// Seed for the run's random stream. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl EvolutionConfig {
    /// Classic parameters aimed at `target`.
    pub fn new(target: Genome) -> Self {
        Self {
            target,
            population_size: 10,
            mutation_rate: 0.01,
            selection_fraction: 0.1,
            max_generations: None,
            stall_generations: None,
            seed: None,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the per-symbol mutation probability.
    ///
    /// Out-of-range values are not clamped; [`validate`](Self::validate)
    /// rejects them.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Sets the fraction of the ranked population kept as parents.
    pub fn with_selection_fraction(mut self, selection_fraction: f64) -> Self {
        self.selection_fraction = selection_fraction;
        self
    }

    /// Caps the run at a number of generations.
    pub fn with_max_generations(mut self, max_generations: u64) -> Self {
        self.max_generations = Some(max_generations);
        self
    }

    /// Stops the run after this many generations without improvement.
    pub fn with_stall_generations(mut self, stall_generations: u64) -> Self {
        self.stall_generations = Some(stall_generations);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the parameters describe a runnable search.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] when the target is empty, the
    /// population size is zero, a rate lies outside `[0, 1]`, or a limit is
    /// set to zero.
    pub fn validate(&self) -> Result<()> {
        if self.target.is_empty() {
            return Err(Error::InvalidConfiguration(
                "target must not be empty".into(),
            ));
        }
        if self.population_size == 0 {
            return Err(Error::InvalidConfiguration(
                "population size must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::InvalidConfiguration(format!(
                "mutation rate {} is outside [0, 1]",
                self.mutation_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.selection_fraction) {
            return Err(Error::InvalidConfiguration(format!(
                "selection fraction {} is outside [0, 1]",
                self.selection_fraction
            )));
        }
        if self.max_generations == Some(0) {
            return Err(Error::InvalidConfiguration(
                "max generations must be at least 1 when set".into(),
            ));
        }
        if self.stall_generations == Some(0) {
            return Err(Error::InvalidConfiguration(
                "stall generations must be at least 1 when set".into(),
            ));
        }
        Ok(())
    }
}

impl Default for EvolutionConfig {
    /// The classic run: target `"1101101101"`, population 10, mutation rate
    /// 0.01, top 10% selection.
    fn default() -> Self {
        Self::new(CLASSIC_TARGET.parse().expect("classic target parses"))
    }
}
