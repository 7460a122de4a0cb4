//! Benchmark command
//!
//! Tests solver performance across multiple secrets. Games are independent
//! read-only computations, so they run in parallel; each game's own guess
//! search stays sequential to preserve deterministic tie-breaking.

use crate::core::{Code, Feedback};
use crate::solver::{Solver, Strategy};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Guess cap per game; a harness guard, never reached by honest self-play
pub(crate) const MAX_GUESSES: usize = 10;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play one game to completion
///
/// Returns the number of guesses used and whether the secret was found
/// within the cap.
pub(crate) fn play_out<S: Strategy>(solver: &Solver<S>, secret: &Code) -> (usize, bool) {
    let mut history: Vec<(Code, Feedback)> = Vec::new();

    for attempt in 1..=MAX_GUESSES {
        let guess = match solver.next_guess(&history) {
            Ok(g) => g,
            // Unreachable with self-generated feedback
            Err(_) => return (attempt, false),
        };

        let feedback = Feedback::score(secret, guess);
        if feedback.is_win() {
            return (attempt, true);
        }

        history.push((guess.clone(), feedback));
    }

    (MAX_GUESSES, false)
}

/// Run the benchmark on a set of secrets
pub fn run_benchmark<S: Strategy + Sync>(
    solver: &Solver<S>,
    secrets: &[Code],
) -> BenchmarkResult {
    let start = Instant::now();

    let guess_counts: Vec<usize> = secrets
        .par_iter()
        .map(|secret| play_out(solver, secret).0)
        .collect();

    let duration = start.elapsed();
    let total_games = secrets.len();
    let total_guesses: usize = guess_counts.iter().sum();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for &count in &guess_counts {
        *distribution.entry(count).or_insert(0) += 1;
    }

    BenchmarkResult {
        total_games,
        total_guesses,
        average_guesses: total_guesses as f64 / total_games as f64,
        min_guesses: guess_counts.iter().min().copied().unwrap_or(0),
        max_guesses: guess_counts.iter().max().copied().unwrap_or(0),
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64(),
    }
}
