//! Entropy-maximizing guess selection
//!
//! Scans the guess space in its fixed enumeration order and keeps the first
//! guess achieving the highest expected information gain.

use super::calculator::calculate_entropy;
use crate::core::Code;

/// Slack for comparing the running maximum against the theoretical ceiling
/// `log2(n)`.
///
/// The ceiling is reached exactly when a guess splits the candidates into
/// singleton feedback classes, but the partition sum accumulates f64
/// rounding error, so an exact comparison could miss a provably optimal
/// guess. Anything within this tolerance of the ceiling cannot be improved
/// upon.
pub const CEILING_TOLERANCE: f64 = 1e-10;

/// Select the best guess by maximizing entropy
///
/// Scans `guess_pool` in order, computing the entropy of each guess against
/// `candidates`, and returns the first guess attaining the maximum together
/// with its entropy. Returns `None` if the guess pool is empty.
///
/// The scan stops early once the running maximum is within
/// [`CEILING_TOLERANCE`] of `log2(candidates.len())`: no guess can induce
/// more than `log2(n)` bits over n candidates, so the rest of the pool
/// cannot improve the result. Early exit changes cost, never optimality.
///
/// Callers must not pass an empty candidate set; every guess then carries
/// zero information and no best guess is defined.
///
/// # Examples
/// ```
/// use bulls_entropy::core::Code;
/// use bulls_entropy::solver::entropy::select_best_guess;
///
/// let pool = vec![Code::new("5678").unwrap(), Code::new("0123").unwrap()];
/// let candidates = vec![Code::new("0123").unwrap(), Code::new("0124").unwrap()];
///
/// let pool_refs: Vec<&Code> = pool.iter().collect();
/// let candidate_refs: Vec<&Code> = candidates.iter().collect();
///
/// let (best, entropy) = select_best_guess(&pool_refs, &candidate_refs).unwrap();
/// // "0123" tells the two candidates apart ((4,0) vs (3,0)); "5678" does not
/// assert_eq!(best.text(), "0123");
/// assert!((entropy - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [&'a Code],
    candidates: &[&Code],
) -> Option<(&'a Code, f64)> {
    let ceiling = (candidates.len() as f64).log2();
    let mut best: Option<(&'a Code, f64)> = None;

    for &guess in guess_pool {
        let entropy = calculate_entropy(guess, candidates);

        // Strict improvement only: on a tie the earlier guess stands
        if best.is_none_or(|(_, max)| entropy > max) {
            best = Some((guess, entropy));

            if entropy >= ceiling - CEILING_TOLERANCE {
                break;
            }
        }
    }

    best
}

/// Select the best guess without the early-exit optimization
///
/// Scans the entire pool unconditionally. Same maximum entropy as
/// [`select_best_guess`], same first-in-order tie-breaking; only the cost
/// differs. Useful for diagnostics and as the oracle in equivalence tests.
#[must_use]
pub fn select_best_guess_exhaustive<'a>(
    guess_pool: &'a [&'a Code],
    candidates: &[&Code],
) -> Option<(&'a Code, f64)> {
    let mut best: Option<(&'a Code, f64)> = None;

    for &guess in guess_pool {
        let entropy = calculate_entropy(guess, candidates);

        if best.is_none_or(|(_, max)| entropy > max) {
            best = Some((guess, entropy));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::universe;

    #[test]
    fn selects_highest_entropy_guess() {
        let pool = [
            Code::new("5678").unwrap(), // (0,0) for both candidates: no split
            Code::new("0123").unwrap(), // Splits the candidates
        ];
        let candidates = [Code::new("0123").unwrap(), Code::new("0124").unwrap()];

        let pool_refs: Vec<&Code> = pool.iter().collect();
        let candidate_refs: Vec<&Code> = candidates.iter().collect();

        let (best, entropy) = select_best_guess(&pool_refs, &candidate_refs).unwrap();

        assert_eq!(best.text(), "0123");
        assert!(entropy > 0.9);
    }

    #[test]
    fn ties_broken_by_enumeration_order() {
        // A single candidate makes every guess carry zero bits; the first
        // pool entry must win
        let pool = [
            Code::new("4567").unwrap(),
            Code::new("0123").unwrap(),
            Code::new("8912").unwrap(),
        ];
        let candidates = [Code::new("0123").unwrap()];

        let pool_refs: Vec<&Code> = pool.iter().collect();
        let candidate_refs: Vec<&Code> = candidates.iter().collect();

        let (best, entropy) = select_best_guess(&pool_refs, &candidate_refs).unwrap();

        assert_eq!(best.text(), "4567");
        assert!(entropy.abs() < 1e-12);
    }

    #[test]
    fn early_exit_stops_at_the_ceiling() {
        // "0123" splits the pair into singletons, reaching log2(2) = 1 bit;
        // "0124" would tie but comes later and must not displace it
        let pool = [
            Code::new("5678").unwrap(),
            Code::new("0123").unwrap(),
            Code::new("0124").unwrap(),
        ];
        let candidates = [Code::new("0123").unwrap(), Code::new("0124").unwrap()];

        let pool_refs: Vec<&Code> = pool.iter().collect();
        let candidate_refs: Vec<&Code> = candidates.iter().collect();

        let (best, entropy) = select_best_guess(&pool_refs, &candidate_refs).unwrap();

        assert_eq!(best.text(), "0123");
        assert!((entropy - 1.0).abs() < CEILING_TOLERANCE);
    }

    #[test]
    fn early_exit_matches_exhaustive_scan() {
        let codes = universe::all_codes();
        let pool: Vec<&Code> = codes.iter().take(300).collect();

        // Candidate sets of several shapes and sizes
        for (skip, take) in [(0, 2), (7, 5), (100, 12), (1000, 30)] {
            let candidates: Vec<&Code> = codes.iter().skip(skip).take(take).collect();

            let fast = select_best_guess(&pool, &candidates).unwrap();
            let full = select_best_guess_exhaustive(&pool, &candidates).unwrap();

            assert!(
                (fast.1 - full.1).abs() < CEILING_TOLERANCE,
                "entropy mismatch for skip={skip} take={take}: {} vs {}",
                fast.1,
                full.1
            );
        }
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates = [Code::new("0123").unwrap()];
        let candidate_refs: Vec<&Code> = candidates.iter().collect();

        assert!(select_best_guess(&[], &candidate_refs).is_none());
        assert!(select_best_guess_exhaustive(&[], &candidate_refs).is_none());
    }

    #[test]
    fn deterministic_across_runs() {
        let codes = universe::all_codes();
        let pool: Vec<&Code> = codes.iter().take(200).collect();
        let candidates: Vec<&Code> = codes.iter().skip(50).take(20).collect();

        let first = select_best_guess(&pool, &candidates).unwrap();
        let second = select_best_guess(&pool, &candidates).unwrap();

        assert_eq!(first.0.text(), second.0.text());
        assert!((first.1 - second.1).abs() < f64::EPSILON);
    }
}
