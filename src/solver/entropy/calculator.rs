//! Shannon entropy calculation for feedback distributions
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing feedback x.
///
/// # Examples
/// ```
/// use bulls_entropy::core::Code;
/// use bulls_entropy::solver::entropy::calculate_entropy;
///
/// let guess = Code::new("0123").unwrap();
/// let candidates = vec![
///     Code::new("0123").unwrap(),
///     Code::new("4567").unwrap(),
/// ];
/// let candidate_refs: Vec<&Code> = candidates.iter().collect();
///
/// // (4, 0) vs (0, 0): a perfect binary split is exactly one bit
/// let entropy = calculate_entropy(&guess, &candidate_refs);
/// assert!((entropy - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Code, candidates: &[&Code]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    // Group candidates by feedback
    let feedback_counts = group_by_feedback(guess, candidates);

    // Calculate Shannon entropy
    shannon_entropy(&feedback_counts)
}

/// Group candidates by the feedback they would produce for the guess
fn group_by_feedback(guess: &Code, candidates: &[&Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let feedback = Feedback::score(candidate, guess);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from a feedback distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one feedback with p=1)
/// - Maximized for a uniform distribution
/// - Always in range [0, log₂(n)] for n feedback classes
///
/// # Examples
/// ```
/// use bulls_entropy::core::Feedback;
/// use bulls_entropy::solver::entropy::shannon_entropy;
/// use rustc_hash::FxHashMap;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(Feedback::new(0, 0).unwrap(), 25);
/// uniform.insert(Feedback::new(0, 1).unwrap(), 25);
/// uniform.insert(Feedback::new(1, 0).unwrap(), 25);
/// uniform.insert(Feedback::new(2, 0).unwrap(), 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S>(feedback_counts: &std::collections::HashMap<Feedback, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = feedback_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    feedback_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
pub fn calculate_metrics(guess: &Code, candidates: &[&Code]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let feedback_counts = group_by_feedback(guess, candidates);
    let total = candidates.len() as f64;

    let entropy = shannon_entropy(&feedback_counts);

    // Expected remaining candidates: Σ p * |partition|
    let expected_remaining: f64 = feedback_counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * count as f64
        })
        .sum();

    // Worst-case partition size
    let max_partition = feedback_counts.values().max().copied().unwrap_or(0);

    GuessMetrics {
        entropy,
        expected_remaining,
        max_partition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::universe::{self, UNIVERSE_SIZE};

    #[test]
    fn shannon_entropy_uniform_distribution() {
        // 4 feedback classes, each appearing once = log2(4) = 2 bits
        let mut counts = FxHashMap::default();
        counts.insert(Feedback::new(0, 0).unwrap(), 1);
        counts.insert(Feedback::new(0, 1).unwrap(), 1);
        counts.insert(Feedback::new(1, 0).unwrap(), 1);
        counts.insert(Feedback::new(2, 0).unwrap(), 1);

        let entropy = shannon_entropy(&counts);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        // Only one feedback class = 0 bits (no uncertainty)
        let mut counts = FxHashMap::default();
        counts.insert(Feedback::new(1, 1).unwrap(), 10);

        let entropy = shannon_entropy(&counts);
        assert!(entropy.abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        // Skewed distribution has less entropy than uniform
        let mut uniform = FxHashMap::default();
        uniform.insert(Feedback::new(0, 0).unwrap(), 25);
        uniform.insert(Feedback::new(0, 1).unwrap(), 25);
        uniform.insert(Feedback::new(1, 0).unwrap(), 25);
        uniform.insert(Feedback::new(2, 0).unwrap(), 25);

        let mut skewed = FxHashMap::default();
        skewed.insert(Feedback::new(0, 0).unwrap(), 97);
        skewed.insert(Feedback::new(0, 1).unwrap(), 1);
        skewed.insert(Feedback::new(1, 0).unwrap(), 1);
        skewed.insert(Feedback::new(2, 0).unwrap(), 1);

        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Feedback, usize> = FxHashMap::default();
        let entropy = shannon_entropy(&counts);
        assert!((entropy - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn calculate_entropy_bounded_by_candidate_count() {
        let codes = universe::all_codes();
        let candidates: Vec<&Code> = codes.iter().take(40).collect();

        for guess in codes.iter().step_by(503) {
            let entropy = calculate_entropy(guess, &candidates);
            assert!(entropy >= 0.0);
            assert!(entropy <= (candidates.len() as f64).log2() + 1e-9);
        }
    }

    #[test]
    fn calculate_entropy_full_universe_guess() {
        // Against all 5040 codes, any guess gains real but bounded information
        let codes = universe::all_codes();
        let candidates: Vec<&Code> = codes.iter().collect();
        let guess = Code::new("0123").unwrap();

        let entropy = calculate_entropy(&guess, &candidates);

        assert!(entropy > 0.0);
        assert!(entropy < (UNIVERSE_SIZE as f64).log2());
    }

    #[test]
    fn calculate_entropy_all_same_feedback() {
        // Candidates indistinguishable by the guess = 0 bits
        let candidates_owned = [
            Code::new("4567").unwrap(),
            Code::new("4568").unwrap(),
        ];
        let candidates: Vec<&Code> = candidates_owned.iter().collect();
        let guess = Code::new("9123").unwrap();

        // Both candidates score (0, 0) against the guess
        let entropy = calculate_entropy(&guess, &candidates);
        assert!(entropy.abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_perfect_split() {
        let candidates_owned = [
            Code::new("0123").unwrap(), // (4, 0) against the guess
            Code::new("4567").unwrap(), // (0, 0) against the guess
        ];
        let candidates: Vec<&Code> = candidates_owned.iter().collect();
        let guess = Code::new("0123").unwrap();

        let entropy = calculate_entropy(&guess, &candidates);
        assert!((entropy - 1.0).abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_empty_candidates() {
        let guess = Code::new("0123").unwrap();
        let candidates: Vec<&Code> = vec![];

        let entropy = calculate_entropy(&guess, &candidates);
        assert!((entropy - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn group_by_feedback_covers_all_candidates() {
        let codes = universe::all_codes();
        let candidates: Vec<&Code> = codes.iter().take(100).collect();
        let guess = Code::new("0123").unwrap();

        let groups = group_by_feedback(&guess, &candidates);

        assert!(!groups.is_empty());
        assert_eq!(groups.values().sum::<usize>(), candidates.len());
    }

    #[test]
    fn metrics_consistent_with_entropy() {
        let codes = universe::all_codes();
        let candidates: Vec<&Code> = codes.iter().take(80).collect();
        let guess = Code::new("4567").unwrap();

        let metrics = calculate_metrics(&guess, &candidates);
        let entropy = calculate_entropy(&guess, &candidates);

        assert!((metrics.entropy - entropy).abs() < 1e-12);
        assert!(metrics.expected_remaining >= 1.0);
        assert!(metrics.expected_remaining <= candidates.len() as f64);
        assert!(metrics.max_partition >= 1);
        assert!(metrics.max_partition <= candidates.len());
    }

    #[test]
    fn metrics_empty_candidates() {
        let guess = Code::new("0123").unwrap();
        let metrics = calculate_metrics(&guess, &[]);

        assert!(metrics.entropy.abs() < f64::EPSILON);
        assert!(metrics.expected_remaining.abs() < f64::EPSILON);
        assert_eq!(metrics.max_partition, 0);
    }
}
