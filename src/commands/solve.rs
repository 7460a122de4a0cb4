//! Code solving command
//!
//! Solves a specific secret code and returns the solution path.

use crate::core::{Code, Feedback};
use crate::solver::entropy::calculate_entropy;
use crate::solver::{Solver, Strategy};

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    /// Default cap of 10 guesses: a harness guard, not a game rule. The
    /// entropy solver needs far fewer.
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_guesses: 10,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub code: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve a specific secret using the given solver and strategy
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid code (wrong length, non-digits, repeats)
/// - The solver reports a contradiction (impossible with honest self-scoring)
pub fn solve_code<S: Strategy>(
    config: SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, String> {
    let secret = Code::new(&config.secret).map_err(|e| format!("Invalid secret code: {e}"))?;

    // Build history as we go
    let mut history: Vec<(Code, Feedback)> = Vec::new();
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = solver.count_candidates(&history);

        // Get next guess
        let guess = solver.next_guess(&history).map_err(|e| e.to_string())?;

        // Record the guess's information content while several candidates remain
        let (entropy, expected_remaining) = if candidates_before > 1 {
            let current_candidates = solver.candidates(&history);
            let ent = calculate_entropy(guess, &current_candidates);
            let exp_remaining = candidates_before as f64 / ent.exp2();
            (Some(ent), Some(exp_remaining))
        } else {
            (None, None)
        };

        // Score against the secret
        let feedback = Feedback::score(&secret, guess);

        // Add to history
        history.push((guess.clone(), feedback));

        let candidates_after = solver.count_candidates(&history);

        guesses.push(GuessStep {
            code: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after,
            entropy,
            expected_remaining,
        });

        // Check if solved
        if feedback.is_win() {
            return Ok(SolveResult {
                success: true,
                guesses,
                secret: config.secret,
            });
        }
    }

    // Failed to solve within the cap
    Ok(SolveResult {
        success: false,
        guesses,
        secret: config.secret,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::EntropyStrategy;
    use crate::universe;

    #[test]
    fn solve_first_universe_code_in_one_guess() {
        let codes = universe::all_codes();
        let solver = Solver::new(EntropyStrategy, &codes);

        let result = solve_code(SolveConfig::new("0123".to_string()), &solver).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.len(), 1);
        assert_eq!(result.guesses[0].code, "0123");
        assert!(result.guesses[0].feedback.is_win());
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let codes: Vec<Code> = universe::all_codes().into_iter().take(150).collect();
        let solver = Solver::new(EntropyStrategy, &codes);

        let result = solve_code(SolveConfig::new("0289".to_string()), &solver).unwrap();

        assert!(result.success);
        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
        assert!(result.guesses.last().unwrap().feedback.is_win());
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let codes: Vec<Code> = universe::all_codes().into_iter().take(50).collect();
        let solver = Solver::new(EntropyStrategy, &codes);

        assert!(solve_code(SolveConfig::new("1123".to_string()), &solver).is_err());
        assert!(solve_code(SolveConfig::new("12x4".to_string()), &solver).is_err());
        assert!(solve_code(SolveConfig::new("123".to_string()), &solver).is_err());
    }

    #[test]
    fn solve_respects_max_guesses() {
        let codes: Vec<Code> = universe::all_codes().into_iter().take(150).collect();
        let solver = Solver::new(EntropyStrategy, &codes);

        let mut config = SolveConfig::new("0298".to_string());
        config.max_guesses = 1;

        let result = solve_code(config, &solver).unwrap();

        assert!(result.guesses.len() <= 1);
    }
}
