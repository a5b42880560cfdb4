//! Evolutionary loop execution.
//!
//! [`EvolutionRunner`] orchestrates the complete generational cycle:
//! initialization → ranking → selection → crossover → mutation → repeat,
//! with the best member of each generation carried over unchanged.

use crate::config::EvolutionConfig;
use crate::error::Result;
use crate::fitness::FitnessScore;
use crate::genome::Genome;
use crate::operators::{crossover, mutate};
use crate::population::{random_population, rank_by_fitness, ScoredGenome};
use crate::random::create_rng;
use crate::selection::select_parents;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Termination {
    /// The best genome matched the target exactly.
    TargetReached,
    /// The configured generation cap was hit first.
    GenerationLimit,
    /// The best score went unimproved for the configured number of
    /// consecutive generations.
    Stalled,
}

/// Result of an evolution run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvolutionResult {
    /// The fittest genome in the final generation.
    pub best: Genome,

    /// Fitness of `best` against the target.
    pub best_score: FitnessScore,

    /// Number of generations executed, counting from 1.
    pub generations: u64,

    /// Why the run stopped.
    pub termination: Termination,

    /// Best-score improvements as `(generation, score)` pairs, starting
    /// with generation 1's initial best. Elitism keeps the best score
    /// non-decreasing and the score is capped by the target length, so at
    /// most `target length + 1` entries accumulate however long the run.
    pub fitness_history: Vec<(u64, FitnessScore)>,
}

/// Executes the generational loop.
///
/// ```
/// use bitevolve::{EvolutionConfig, EvolutionRunner};
///
/// let config = EvolutionConfig::default()
///     .with_max_generations(200)
///     .with_seed(42);
/// let result = EvolutionRunner::run(&config)?;
/// println!("best after {} generations: {}", result.generations, result.best);
/// # Ok::<(), bitevolve::Error>(())
/// ```
pub struct EvolutionRunner;

impl EvolutionRunner {
    /// Runs the search until the target is reached or a configured limit
    /// stops it.
    ///
    /// With no limits configured the loop runs until the target is found,
    /// which may be forever when the target is unreachable under the given
    /// mutation and selection dynamics.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] when the configuration fails
    /// [`EvolutionConfig::validate`].
    ///
    /// [`Error::InvalidConfiguration`]: crate::Error::InvalidConfiguration
    pub fn run(config: &EvolutionConfig) -> Result<EvolutionResult> {
        Self::run_with_observer(config, |_, _, _| {})
    }

    /// Runs the search, invoking `observer` once per generation with the
    /// generation number (starting at 1), the generation's best genome, and
    /// its score. The final generation is observed before the run returns.
    ///
    /// # Errors
    ///
    /// Same as [`EvolutionRunner::run`].
    pub fn run_with_observer<F>(
        config: &EvolutionConfig,
        mut observer: F,
    ) -> Result<EvolutionResult>
    where
        F: FnMut(u64, &Genome, FitnessScore),
    {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let target = &config.target;
        let mut population = random_population(config.population_size, target.len(), &mut rng);
        let mut fitness_history = Vec::new();
        let mut best_seen: Option<FitnessScore> = None;
        let mut stalled_for: u64 = 0;
        let mut generation: u64 = 1;

        loop {
            // 1. Rank the current population.
            let ranked = rank_by_fitness(&population, target)?;
            let best = &ranked[0];

            // 2. Track improvement. History entries are recorded only when
            //    the best score strictly improves, so retention is bounded
            //    by the target length rather than the run length.
            let improved = match best_seen {
                Some(previous) => best.score > previous,
                None => true,
            };
            if improved {
                best_seen = Some(best.score);
                stalled_for = 0;
                fitness_history.push((generation, best.score));
            } else {
                stalled_for += 1;
            }

            // 3. Report the generation's best.
            observer(generation, &best.genome, best.score);
            log::debug!(
                "generation {generation}: best {} scores {}/{}",
                best.genome,
                best.score,
                target.len()
            );

            // 4. Termination checks: exact match first, then the limits.
            if best.genome == *target {
                log::info!("target reached after {generation} generations");
                return Ok(finish(
                    ranked,
                    generation,
                    Termination::TargetReached,
                    fitness_history,
                ));
            }
            if let Some(cap) = config.max_generations {
                if generation >= cap {
                    log::info!("generation cap {cap} reached without a match");
                    return Ok(finish(
                        ranked,
                        generation,
                        Termination::GenerationLimit,
                        fitness_history,
                    ));
                }
            }
            if let Some(limit) = config.stall_generations {
                if stalled_for >= limit {
                    log::info!("search stalled after {generation} generations");
                    return Ok(finish(
                        ranked,
                        generation,
                        Termination::Stalled,
                        fitness_history,
                    ));
                }
            }

            // 5. Select parents from the ranked population.
            let parents = select_parents(&ranked, config.selection_fraction);

            // 6. Next generation: the best parent survives unchanged,
            //    every other slot is bred from two uniformly drawn parents.
            let mut next = Vec::with_capacity(config.population_size);
            next.push(parents[0].clone());
            while next.len() < config.population_size {
                let parent1 = &parents[rng.random_range(0..parents.len())];
                let parent2 = &parents[rng.random_range(0..parents.len())];
                let child = crossover(parent1, parent2, &mut rng);
                next.push(mutate(&child, config.mutation_rate, &mut rng));
            }

            // 7. Replace wholesale and advance the counter.
            population = next;
            generation += 1;
        }
    }
}

fn finish(
    mut ranked: Vec<ScoredGenome>,
    generations: u64,
    termination: Termination,
    fitness_history: Vec<(u64, FitnessScore)>,
) -> EvolutionResult {
    let best = ranked.swap_remove(0);
    EvolutionResult {
        best: best.genome,
        best_score: best.score,
        generations,
        termination,
        fitness_history,
    }
}
