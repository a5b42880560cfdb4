//! Truncation selection over a ranked population.

use crate::genome::Genome;
use crate::population::ScoredGenome;

/// Number of parents kept by truncation: `floor(size * fraction)`, but at
/// least one so selection never empties the breeding pool.
pub fn parent_count(size: usize, fraction: f64) -> usize {
    ((size as f64 * fraction) as usize).max(1)
}

/// Keeps the top fraction of an already-ranked population as parents.
///
/// `ranked` must be sorted in descending fitness order, as produced by
/// [`rank_by_fitness`].
///
/// # Panics
///
/// Panics when `ranked` is empty.
///
/// [`rank_by_fitness`]: crate::population::rank_by_fitness
pub fn select_parents(ranked: &[ScoredGenome], fraction: f64) -> Vec<Genome> {
    assert!(
        !ranked.is_empty(),
        "cannot select parents from an empty population"
    );
    let count = parent_count(ranked.len(), fraction).min(ranked.len());
    ranked[..count]
        .iter()
        .map(|member| member.genome.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::FitnessScore;

    fn g(s: &str) -> Genome {
        s.parse().expect("test genome")
    }

    fn scored(pairs: &[(&str, FitnessScore)]) -> Vec<ScoredGenome> {
        pairs
            .iter()
            .map(|(s, score)| ScoredGenome {
                genome: g(s),
                score: *score,
            })
            .collect()
    }

    #[test]
    fn test_parent_count_floors() {
        assert_eq!(parent_count(10, 0.1), 1);
        assert_eq!(parent_count(19, 0.1), 1);
        assert_eq!(parent_count(20, 0.1), 2);
        assert_eq!(parent_count(100, 0.25), 25);
    }

    #[test]
    fn test_parent_count_never_zero() {
        assert_eq!(parent_count(1, 0.1), 1);
        assert_eq!(parent_count(5, 0.0), 1);
        assert_eq!(parent_count(9, 0.1), 1);
    }

    #[test]
    fn test_select_keeps_top_prefix() {
        let ranked = scored(&[("1111", 4), ("1110", 3), ("1100", 2), ("0000", 0)]);
        let parents = select_parents(&ranked, 0.5);
        assert_eq!(parents, vec![g("1111"), g("1110")]);
    }

    #[test]
    fn test_select_classic_tenth_keeps_single_parent() {
        let ranked = scored(&[
            ("1111", 4),
            ("1110", 3),
            ("1101", 3),
            ("1100", 2),
            ("1010", 2),
            ("1000", 1),
            ("0100", 1),
            ("0010", 1),
            ("0001", 1),
            ("0000", 0),
        ]);
        let parents = select_parents(&ranked, 0.1);
        assert_eq!(parents, vec![g("1111")]);
    }

    #[test]
    fn test_select_caps_at_population_size() {
        let ranked = scored(&[("11", 2), ("01", 1)]);
        let parents = select_parents(&ranked, 5.0);
        assert_eq!(parents.len(), 2);
    }

    #[test]
    #[should_panic(expected = "empty population")]
    fn test_select_panics_on_empty_input() {
        select_parents(&[], 0.1);
    }
}
