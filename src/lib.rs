//! Generational evolutionary search over fixed-length bit-strings.
//!
//! Evolves a population toward a target genome using truncation selection,
//! single-point crossover, and independent per-symbol mutation, with the
//! best member of each generation carried into the next unchanged.
//!
//! # Key Types
//!
//! - [`Genome`]: fixed-length binary candidate solution
//! - [`EvolutionConfig`]: run parameters (target, population size, rates, limits)
//! - [`EvolutionRunner`]: executes the generational loop
//! - [`EvolutionResult`]: final outcome with per-generation statistics
//!
//! # Example
//!
//! ```
//! use bitevolve::{EvolutionConfig, EvolutionRunner, Termination};
//!
//! let config = EvolutionConfig::new("1101101101".parse()?)
//!     .with_seed(42)
//!     .with_max_generations(10_000);
//! let result = EvolutionRunner::run_with_observer(&config, |generation, best, _score| {
//!     println!("Generation {generation}: {best}");
//! })?;
//! if result.termination == Termination::TargetReached {
//!     println!("Target reached!");
//! }
//! # Ok::<(), bitevolve::Error>(())
//! ```

mod config;
mod error;
mod fitness;
mod genome;
pub mod operators;
mod population;
pub mod random;
mod runner;
mod selection;

pub use config::{EvolutionConfig, CLASSIC_TARGET};
pub use error::{Error, Result};
pub use fitness::{score, FitnessScore};
pub use genome::Genome;
pub use population::{random_population, rank_by_fitness, ScoredGenome};
pub use runner::{EvolutionResult, EvolutionRunner, Termination};
pub use selection::{parent_count, select_parents};
