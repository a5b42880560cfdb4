//! Population construction and fitness ranking.
//!
//! A population is a plain `Vec<Genome>` of fixed size, replaced wholesale
//! each generation. Ranking scores every member once, pairs each genome with
//! its score positionally, and stable-sorts the pairs, so duplicate genomes
//! keep independent entries and tied scores keep their input order.

use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fitness::{score, FitnessScore};
use crate::genome::Genome;

/// A genome paired with its fitness against the run's target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoredGenome {
    pub genome: Genome,
    pub score: FitnessScore,
}

/// Samples `size` genomes of `length` symbols each, independently and
/// uniformly.
pub fn random_population<R: Rng>(size: usize, length: usize, rng: &mut R) -> Vec<Genome> {
    (0..size).map(|_| Genome::random(length, rng)).collect()
}

/// Scores every member against `target` and returns the population in
/// descending fitness order.
///
/// The sort is stable: members with equal scores stay in their input order,
/// so ranking the same population twice yields the same order.
///
/// # Errors
///
/// [`Error::LengthMismatch`] when any member's length differs from the
/// target's.
///
/// [`Error::LengthMismatch`]: crate::Error::LengthMismatch
pub fn rank_by_fitness(population: &[Genome], target: &Genome) -> Result<Vec<ScoredGenome>> {
    #[cfg(feature = "parallel")]
    let scores = population
        .par_iter()
        .map(|genome| score(genome, target))
        .collect::<Result<Vec<FitnessScore>>>()?;
    #[cfg(not(feature = "parallel"))]
    let scores = population
        .iter()
        .map(|genome| score(genome, target))
        .collect::<Result<Vec<FitnessScore>>>()?;

    let mut ranked: Vec<ScoredGenome> = population
        .iter()
        .cloned()
        .zip(scores)
        .map(|(genome, score)| ScoredGenome { genome, score })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    Ok(ranked)
}
