//! Fitness scoring against a fixed target.

use crate::error::{Error, Result};
use crate::genome::Genome;

/// Number of positions at which a genome matches the target: an integer in
/// `[0, L]` for genomes of length `L`. Higher is better; `L` means an exact
/// match.
pub type FitnessScore = usize;

/// Counts the positions where `genome` and `target` carry the same symbol.
///
/// Pure, deterministic, and O(L). Symmetric in its arguments, since
/// positional equality is.
///
/// # Errors
///
/// [`Error::LengthMismatch`] when the two genomes differ in length.
pub fn score(genome: &Genome, target: &Genome) -> Result<FitnessScore> {
    if genome.len() != target.len() {
        return Err(Error::LengthMismatch {
            genome: genome.len(),
            target: target.len(),
        });
    }
    Ok(genome
        .bits()
        .iter()
        .zip(target.bits())
        .filter(|(a, b)| a == b)
        .count())
}
