use bitevolve::{EvolutionConfig, EvolutionRunner, Termination};

// Compile-time configuration of the classic run.
const TARGET: &str = "1101101101";
const POPULATION_SIZE: usize = 10;
const MUTATION_RATE: f64 = 0.01;
const SELECTION_FRACTION: f64 = 0.1;

fn main() -> bitevolve::Result<()> {
    env_logger::init();

    let config = EvolutionConfig::new(TARGET.parse()?)
        .with_population_size(POPULATION_SIZE)
        .with_mutation_rate(MUTATION_RATE)
        .with_selection_fraction(SELECTION_FRACTION);

    let result = EvolutionRunner::run_with_observer(&config, |generation, best, _score| {
        println!("Generation {generation}: {best}");
    })?;

    if result.termination == Termination::TargetReached {
        println!("Target reached!");
    }
    Ok(())
}
