//! Genome representation.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A candidate solution: a fixed-length string of binary symbols.
///
/// Genomes are cheap to clone and compare. The length is fixed at
/// construction and never changes; crossover and mutation build new genomes
/// rather than editing in place.
///
/// The 1:1 string form uses '0' and '1':
///
/// ```
/// use bitevolve::Genome;
///
/// let genome: Genome = "1101101101".parse()?;
/// assert_eq!(genome.len(), 10);
/// assert_eq!(genome.to_string(), "1101101101");
/// # Ok::<(), bitevolve::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Genome {
    bits: Vec<bool>,
}

impl Genome {
    /// Samples a genome of `length` symbols, each an independent fair coin
    /// flip.
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        Self {
            bits: (0..length).map(|_| rng.random_bool(0.5)).collect(),
        }
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when the genome has no symbols.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The symbols as a slice, `true` standing for '1'.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }
}

impl From<Vec<bool>> for Genome {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Genome {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        s.chars()
            .enumerate()
            .map(|(position, symbol)| match symbol {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(Error::InvalidSymbol { symbol, position }),
            })
            .collect::<Result<Vec<bool>, Error>>()
            .map(Self::from)
    }
}
