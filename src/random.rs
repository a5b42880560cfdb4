//! Seeded random number generator construction.
//!
//! Nothing in this crate reads global random state: every randomized
//! operation takes `&mut R where R: Rng`, which supplies the uniform floats,
//! ranged integers, and coin flips the engine needs. This module provides the
//! one constructor the driver uses to make such a generator.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a seed.
///
/// The same seed always yields the same stream, which is what makes seeded
/// runs reproducible end to end.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
