//! Variation operators: single-point crossover and per-symbol mutation.

use rand::Rng;

use crate::genome::Genome;

/// Single-point crossover at a uniformly random split index.
///
/// Draws `split` from `[0, length)` and returns the child taking the first
/// `split` symbols from `parent1` and the rest from `parent2`. A split of 0
/// clones `parent2`. Self-crossover is allowed and clones the parent.
///
/// # Panics
///
/// Panics when the parents' lengths differ or when they are empty.
pub fn crossover<R: Rng>(parent1: &Genome, parent2: &Genome, rng: &mut R) -> Genome {
    assert!(!parent1.is_empty(), "cannot cross over empty genomes");
    let split = rng.random_range(0..parent1.len());
    crossover_at(parent1, parent2, split)
}

/// Single-point crossover at a fixed split index in `[0, L]`.
///
/// A split of 0 clones `parent2`; a split of `L` clones `parent1`. The
/// randomized [`crossover`] only ever draws splits in `[0, L)`.
///
/// # Panics
///
/// Panics when the parents' lengths differ or when `split > L`.
pub fn crossover_at(parent1: &Genome, parent2: &Genome, split: usize) -> Genome {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    assert!(split <= parent1.len(), "split index out of range");
    let mut bits = Vec::with_capacity(parent1.len());
    bits.extend_from_slice(&parent1.bits()[..split]);
    bits.extend_from_slice(&parent2.bits()[split..]);
    Genome::from(bits)
}

/// Flips each symbol independently with probability `mutation_rate`.
///
/// A rate of 0.0 returns an exact copy; a rate of 1.0 returns the
/// complement.
pub fn mutate<R: Rng>(genome: &Genome, mutation_rate: f64, rng: &mut R) -> Genome {
    let bits: Vec<bool> = genome
        .bits()
        .iter()
        .map(|&bit| {
            if rng.random::<f64>() < mutation_rate {
                !bit
            } else {
                bit
            }
        })
        .collect();
    Genome::from(bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn g(s: &str) -> Genome {
        s.parse().expect("test genome")
    }

    #[test]
    fn test_crossover_at_splices_prefix_and_suffix() {
        assert_eq!(crossover_at(&g("0000"), &g("1111"), 0), g("1111"));
        assert_eq!(crossover_at(&g("0000"), &g("1111"), 2), g("0011"));
        assert_eq!(crossover_at(&g("0000"), &g("1111"), 3), g("0001"));
        assert_eq!(crossover_at(&g("0000"), &g("1111"), 4), g("0000"));
    }

    #[test]
    fn test_crossover_preserves_length() {
        let mut rng = create_rng(7);
        let child = crossover(&g("110010"), &g("001101"), &mut rng);
        assert_eq!(child.len(), 6);
    }

    #[test]
    fn test_crossover_child_is_a_splice_of_its_parents() {
        let mut rng = create_rng(11);
        let parent1 = g("0000000000");
        let parent2 = g("1111111111");
        for _ in 0..50 {
            let child = crossover(&parent1, &parent2, &mut rng);
            // The child must be 0^split ++ 1^(len - split) for some split,
            // and split == len is unreachable.
            let zeros = child.bits().iter().take_while(|&&bit| !bit).count();
            assert!(child.bits()[zeros..].iter().all(|&bit| bit));
            assert!(zeros < child.len());
        }
    }

    #[test]
    fn test_self_crossover_clones_parent() {
        let mut rng = create_rng(3);
        let parent = g("101101");
        assert_eq!(crossover(&parent, &parent, &mut rng), parent);
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn test_crossover_at_panics_on_length_mismatch() {
        crossover_at(&g("000"), &g("1111"), 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_crossover_at_panics_on_split_past_end() {
        crossover_at(&g("000"), &g("111"), 4);
    }

    #[test]
    #[should_panic(expected = "empty genomes")]
    fn test_crossover_panics_on_empty_parents() {
        let mut rng = create_rng(1);
        crossover(&g(""), &g(""), &mut rng);
    }

    #[test]
    fn test_mutate_rate_zero_is_identity() {
        let mut rng = create_rng(5);
        let genome = g("1101101101");
        assert_eq!(mutate(&genome, 0.0, &mut rng), genome);
    }

    #[test]
    fn test_mutate_rate_one_complements() {
        let mut rng = create_rng(5);
        assert_eq!(mutate(&g("1100"), 1.0, &mut rng), g("0011"));
    }

    #[test]
    fn test_mutate_preserves_length() {
        let mut rng = create_rng(9);
        let genome = Genome::random(64, &mut rng);
        assert_eq!(mutate(&genome, 0.5, &mut rng).len(), 64);
    }
}
