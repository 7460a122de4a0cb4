//! Main solver interface

use super::strategy::Strategy;
use crate::core::{Code, Feedback};
use std::fmt;

/// Failure conditions surfaced by the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    /// The feedback history is inconsistent with every code in the universe.
    /// Some reported feedback must have been wrong; the game cannot continue.
    Contradiction,
    /// The solver was constructed over an empty universe.
    EmptyUniverse,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contradiction => {
                write!(f, "No possible codes remain - the feedback history is contradictory")
            }
            Self::EmptyUniverse => write!(f, "The code universe is empty"),
        }
    }
}

impl std::error::Error for SolverError {}

/// Main Bulls and Cows solver
///
/// Holds the immutable code universe and a guess-selection strategy. The
/// candidate set is re-derived from the explicit `(guess, feedback)` history
/// on every call; no state evolves between rounds.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    universe: &'a [Code],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver over the given universe
    ///
    /// # Parameters
    /// - `strategy`: The guess selection strategy to use
    /// - `universe`: All legal codes, in their fixed enumeration order
    pub const fn new(strategy: S, universe: &'a [Code]) -> Self {
        Self { strategy, universe }
    }

    /// Get the opening guess for a new game
    ///
    /// Returns the first code of the universe without searching: against the
    /// untouched universe every code induces the same feedback partition up
    /// to a relabeling of digits, so the entropy scan would return its first
    /// element anyway.
    ///
    /// # Errors
    /// Returns `SolverError::EmptyUniverse` if the universe has no codes.
    pub fn first_guess(&self) -> Result<&'a Code, SolverError> {
        self.universe.first().ok_or(SolverError::EmptyUniverse)
    }

    /// Get the next best guess given previous guesses and feedback
    ///
    /// If exactly one candidate survives the history, that candidate is the
    /// secret and is returned directly without a search.
    ///
    /// # Errors
    /// Returns `SolverError::Contradiction` when no candidate is consistent
    /// with the history, and `SolverError::EmptyUniverse` for a solver built
    /// over no codes.
    pub fn next_guess(&self, history: &[(Code, Feedback)]) -> Result<&'a Code, SolverError> {
        if history.is_empty() {
            return self.first_guess();
        }

        let candidates = self.filter_candidates(history);

        match candidates.as_slice() {
            &[] => Err(SolverError::Contradiction),
            &[only] => Ok(only),
            _ => {
                // Convert candidates to owned codes to avoid lifetime issues
                let candidate_codes: Vec<Code> = candidates.into_iter().cloned().collect();

                self.strategy
                    .select_guess(self.universe, &candidate_codes)
                    .ok_or(SolverError::EmptyUniverse)
            }
        }
    }

    /// Filter the universe to codes consistent with the guess history
    fn filter_candidates(&self, history: &[(Code, Feedback)]) -> Vec<&'a Code> {
        self.universe
            .iter()
            .filter(|&candidate| {
                history.iter().all(|(guess, observed)| {
                    Feedback::score(candidate, guess) == *observed
                })
            })
            .collect()
    }

    /// Count how many candidates remain given the history
    #[must_use]
    pub fn count_candidates(&self, history: &[(Code, Feedback)]) -> usize {
        self.filter_candidates(history).len()
    }

    /// Get the current candidates (public accessor)
    #[must_use]
    pub fn candidates(&self, history: &[(Code, Feedback)]) -> Vec<&'a Code> {
        self.filter_candidates(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::EntropyStrategy;
    use crate::universe;

    fn small_universe() -> Vec<Code> {
        universe::all_codes().into_iter().take(120).collect()
    }

    #[test]
    fn first_guess_is_first_universe_code() {
        let codes = small_universe();
        let solver = Solver::new(EntropyStrategy, &codes);

        assert_eq!(solver.first_guess().unwrap().text(), "0123");
    }

    #[test]
    fn first_guess_on_empty_universe_fails() {
        let codes: Vec<Code> = vec![];
        let solver = Solver::new(EntropyStrategy, &codes);

        assert_eq!(solver.first_guess(), Err(SolverError::EmptyUniverse));
    }

    #[test]
    fn next_guess_with_empty_history_is_first_guess() {
        let codes = small_universe();
        let solver = Solver::new(EntropyStrategy, &codes);

        assert_eq!(solver.next_guess(&[]).unwrap().text(), "0123");
    }

    #[test]
    fn next_guess_respects_history() {
        let codes = small_universe();
        let solver = Solver::new(EntropyStrategy, &codes);

        let secret = Code::new("0156").unwrap();
        let guess = Code::new("0123").unwrap();
        let feedback = Feedback::score(&secret, &guess);

        let history = vec![(guess, feedback)];
        let next = solver.next_guess(&history).unwrap();

        // The secret itself must still be a candidate
        assert!(solver.candidates(&history).contains(&&secret));
        // The suggested guess is drawn from the universe
        assert!(codes.contains(next));
    }

    #[test]
    fn next_guess_detects_contradiction() {
        let codes = small_universe();
        let solver = Solver::new(EntropyStrategy, &codes);

        // Claiming a win on a guess while also claiming (0,0) on the same
        // guess is satisfiable by no code
        let guess = Code::new("0123").unwrap();
        let history = vec![
            (guess.clone(), Feedback::WIN),
            (guess, Feedback::new(0, 0).unwrap()),
        ];

        assert_eq!(solver.next_guess(&history), Err(SolverError::Contradiction));
    }

    #[test]
    fn next_guess_returns_single_survivor_directly() {
        let codes = small_universe();
        let solver = Solver::new(EntropyStrategy, &codes);

        // Win feedback pins the candidate set to the guessed code itself
        let guess = Code::new("0123").unwrap();
        let history = vec![(guess.clone(), Feedback::WIN)];

        assert_eq!(solver.count_candidates(&history), 1);
        assert_eq!(solver.next_guess(&history).unwrap(), &guess);
    }

    #[test]
    fn candidate_count_shrinks_monotonically() {
        let codes = small_universe();
        let solver = Solver::new(EntropyStrategy, &codes);

        let secret = Code::new("0145").unwrap();

        let mut history: Vec<(Code, Feedback)> = Vec::new();
        let mut previous = solver.count_candidates(&history);

        for _ in 0..3 {
            let guess = solver.next_guess(&history).unwrap().clone();
            let feedback = Feedback::score(&secret, &guess);
            history.push((guess, feedback));

            let remaining = solver.count_candidates(&history);
            assert!(remaining <= previous);
            assert!(remaining >= 1, "the true secret must always survive");
            previous = remaining;

            if remaining == 1 {
                break;
            }
        }
    }

    #[test]
    fn candidates_all_consistent_with_history() {
        let codes = small_universe();
        let solver = Solver::new(EntropyStrategy, &codes);

        let secret = Code::new("0172").unwrap();
        let guess = Code::new("0123").unwrap();
        let feedback = Feedback::score(&secret, &guess);

        let history = vec![(guess.clone(), feedback)];

        for candidate in solver.candidates(&history) {
            assert_eq!(Feedback::score(candidate, &guess), feedback);
        }
    }
}
