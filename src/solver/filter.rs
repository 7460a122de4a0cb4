//! Candidate filtering
//!
//! Narrows a candidate set to the codes consistent with one observed
//! (guess, feedback) pair.

use crate::core::{Code, Feedback};

/// Keep exactly the candidates that would have produced `feedback` for
/// `guess`, had they been the secret
///
/// Returns a new vector; the input is never mutated. An empty result means
/// the accumulated feedback contradicts every code in the original universe -
/// the engine reports that as [`SolverError::Contradiction`] rather than
/// handing callers an empty set to trip over.
///
/// [`SolverError::Contradiction`]: super::SolverError::Contradiction
///
/// # Examples
/// ```
/// use bulls_entropy::core::{Code, Feedback};
/// use bulls_entropy::solver::filter_consistent;
///
/// let candidates = vec![
///     Code::new("1234").unwrap(),
///     Code::new("1243").unwrap(),
///     Code::new("5678").unwrap(),
/// ];
/// let guess = Code::new("1234").unwrap();
///
/// let kept = filter_consistent(&candidates, &guess, Feedback::new(2, 2).unwrap());
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].text(), "1243");
/// ```
#[must_use]
pub fn filter_consistent(candidates: &[Code], guess: &Code, feedback: Feedback) -> Vec<Code> {
    candidates
        .iter()
        .filter(|candidate| Feedback::score(candidate, guess) == feedback)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::universe;

    fn small_candidates() -> Vec<Code> {
        universe::all_codes().into_iter().take(60).collect()
    }

    #[test]
    fn filter_keeps_only_matching_codes() {
        let candidates = small_candidates();
        let guess = Code::new("0123").unwrap();
        let feedback = Feedback::new(2, 1).unwrap();

        let kept = filter_consistent(&candidates, &guess, feedback);

        for code in &kept {
            assert_eq!(Feedback::score(code, &guess), feedback);
        }
        for code in &candidates {
            if !kept.contains(code) {
                assert_ne!(Feedback::score(code, &guess), feedback);
            }
        }
    }

    #[test]
    fn filter_partitions_candidates_exactly() {
        // Every candidate lands in exactly one feedback class
        let candidates = small_candidates();
        let guess = Code::new("0147").unwrap();

        let mut total = 0;
        for bulls in 0..=4u8 {
            for cows in 0..=4u8 {
                if let Ok(feedback) = Feedback::new(bulls, cows) {
                    total += filter_consistent(&candidates, &guess, feedback).len();
                }
            }
        }

        assert_eq!(total, candidates.len());
    }

    #[test]
    fn filter_is_idempotent() {
        let candidates = small_candidates();
        let guess = Code::new("0123").unwrap();
        let feedback = Feedback::new(1, 2).unwrap();

        let once = filter_consistent(&candidates, &guess, feedback);
        let twice = filter_consistent(&once, &guess, feedback);

        assert_eq!(once, twice);
    }

    #[test]
    fn filter_win_feedback_pins_the_guess() {
        let candidates = small_candidates();
        let guess = Code::new("0123").unwrap();

        let kept = filter_consistent(&candidates, &guess, Feedback::WIN);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0], guess);
    }

    #[test]
    fn filter_contradiction_yields_empty_set() {
        let candidates = vec![Code::new("0123").unwrap()];
        let guess = Code::new("0123").unwrap();

        // The only candidate scores (4, 0) against itself, never (0, 0)
        let kept = filter_consistent(&candidates, &guess, Feedback::new(0, 0).unwrap());
        assert!(kept.is_empty());
    }

    #[test]
    fn filter_does_not_mutate_input() {
        let candidates = small_candidates();
        let before = candidates.clone();
        let guess = Code::new("0123").unwrap();

        let _ = filter_consistent(&candidates, &guess, Feedback::new(0, 2).unwrap());

        assert_eq!(candidates, before);
    }
}
