//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every code in the universe and generates
//! statistics.

use super::benchmark::play_out;
use crate::core::Code;
use crate::solver::{Solver, Strategy};
use crate::universe::UNIVERSE_SIZE;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub hardest_codes: Vec<(String, usize)>,
}

/// Run the solver on every secret (or a limited subset)
///
/// Games run in parallel; each game's guess search is sequential, so results
/// are identical to a serial run.
pub fn run_test_all<S: Strategy + Sync>(
    solver: &Solver<S>,
    secrets: &[Code],
    limit: Option<usize>,
) -> TestAllStatistics {
    let count = limit.unwrap_or(secrets.len()).min(secrets.len());
    let targets = &secrets[..count];

    println!("🎯 Testing {} secrets...", targets.len());

    // Progress bar
    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    let results: Vec<(String, usize, bool)> = targets
        .par_iter()
        .map(|secret| {
            let (guesses, solved) = play_out(solver, secret);
            pb.inc(1);
            (secret.text().to_string(), guesses, solved)
        })
        .collect();

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();

    // Calculate statistics
    let solved: Vec<(&str, usize)> = results
        .iter()
        .filter(|(_, _, solved)| *solved)
        .map(|(code, guesses, _)| (code.as_str(), *guesses))
        .collect();
    let solved_count = solved.len();
    let failed_count = results.len() - solved_count;

    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    for (_, guesses) in &solved {
        *guess_distribution.entry(*guesses).or_insert(0) += 1;
    }

    let total_guesses: usize = solved.iter().map(|(_, guesses)| guesses).sum();
    let average_guesses = if solved_count > 0 {
        total_guesses as f64 / solved_count as f64
    } else {
        0.0
    };

    let max_guesses = solved.iter().map(|(_, g)| *g).max().unwrap_or(0);
    let min_guesses = solved.iter().map(|(_, g)| *g).min().unwrap_or(0);

    let mut hardest_codes: Vec<(String, usize)> = results
        .iter()
        .filter(|(_, guesses, _)| *guesses >= 7)
        .map(|(code, guesses, _)| (code.clone(), *guesses))
        .collect();
    hardest_codes.sort_by_key(|(_, guesses)| std::cmp::Reverse(*guesses));
    hardest_codes.truncate(10);

    TestAllStatistics {
        total_games: results.len(),
        solved: solved_count,
        failed: failed_count,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        hardest_codes,
    }
}

/// Print test-all statistics
#[allow(clippy::too_many_lines)] // Comprehensive output formatting
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    // Overall performance
    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_games);
    println!(
        "  Successfully solved:  {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_games as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:      {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_games as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:      {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:           {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per secret:      {:.1}ms",
        stats.total_time.as_millis() as f64 / stats.total_games as f64
    );

    // Guess distribution
    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = *stats.guess_distribution.values().max().unwrap_or(&1);
    for guesses in 1..=stats.max_guesses.max(1) {
        let count = stats.guess_distribution.get(&guesses).unwrap_or(&0);
        if stats.solved > 0 {
            let percentage = *count as f64 / stats.solved as f64 * 100.0;
            let bar_len = if max_count > 0 {
                (*count * 40 / max_count).max(usize::from(*count > 0))
            } else {
                0
            };
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );

            println!("  {guesses} guesses: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    // Information theory metrics
    println!("\n🧮 Information Theory Metrics");
    let total_bits = (UNIVERSE_SIZE as f64).log2();
    let bits_per_guess = if stats.average_guesses > 0.0 {
        total_bits / stats.average_guesses
    } else {
        0.0
    };
    // 14 reachable feedback classes for unique-digit codes bound one round
    let per_round_ceiling = 14f64.log2();
    let efficiency = (bits_per_guess / per_round_ceiling) * 100.0;
    println!("  Universe information: {total_bits:.2} bits");
    println!("  Bits per guess:       {bits_per_guess:.2} bits");
    println!(
        "  Efficiency:           {efficiency:.1}% (vs per-round ceiling {per_round_ceiling:.2} bits)"
    );

    // Hardest secrets
    if !stats.hardest_codes.is_empty() {
        println!("\n😰 {}", "Hardest Secrets (7+ guesses)".yellow().bold());
        for (code, guesses) in stats.hardest_codes.iter().take(5) {
            println!("  {} ({} guesses)", code.yellow(), guesses);
        }
    }
}
