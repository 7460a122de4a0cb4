//! Challenge mode - the user guesses the computer's secret
//!
//! The computer picks a random code; the user guesses and gets bulls/cows
//! feedback each turn, along with the uncertainty still remaining. The
//! uncertainty shown is the posterior `log2(|consistent candidates|)`, the
//! same quantity the solver reasons about.

use crate::core::{Code, Feedback};
use crate::solver::filter_consistent;
use colored::Colorize;
use std::io::{self, Write};

/// Attempt cap before the secret is revealed
const MAX_ATTEMPTS: usize = 20;

/// Run the challenge game over the given universe
///
/// # Errors
///
/// Returns an error if the universe is empty or reading user input fails.
pub fn run_challenge(universe: &[Code]) -> Result<(), String> {
    use rand::prelude::IndexedRandom;

    let secret = universe
        .choose(&mut rand::rng())
        .ok_or("The code universe is empty")?;

    let initial_bits = (universe.len() as f64).log2();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Bulls & Cows - Challenge Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I've thought of a 4-digit number with unique digits.");
    println!("Try to guess it! After each guess, I'll tell you:");
    println!("  - Bulls: correct digit in correct position");
    println!("  - Cows:  correct digit in wrong position");
    println!("\nInitial uncertainty: {initial_bits:.2} bits ({} codes)", universe.len());
    println!("\nEnter 'quit' to give up.\n");

    // Codes still consistent with the feedback handed out so far; drives
    // the uncertainty display
    let mut consistent: Vec<Code> = universe.to_vec();
    let mut attempts = 0;

    loop {
        attempts += 1;

        // Input validation loop: `Code::new` is the validator, re-prompt on error
        let guess = loop {
            let input =
                get_user_input(&format!("Attempt {attempts}. Enter your guess (4 unique digits)"))?;

            if input == "quit" {
                println!("\nGame over! The secret number was: {}", secret.text().bold());
                return Ok(());
            }

            match Code::new(&input) {
                Ok(code) => break code,
                Err(e) => println!("Invalid guess: {e}."),
            }
        };

        // Score and narrow the consistent set
        let feedback = Feedback::score(secret, &guess);
        consistent = filter_consistent(&consistent, &guess, feedback);

        let remaining_bits = (consistent.len() as f64).log2();

        println!("\nFeedback for {guess}:");
        println!("  Bulls: {}", feedback.bulls().to_string().green().bold());
        println!("  Cows:  {}", feedback.cows().to_string().yellow().bold());
        println!(
            "  Uncertainty remaining: {remaining_bits:.2} bits ({} codes consistent)\n",
            consistent.len()
        );

        // Check win condition
        if feedback.is_win() {
            println!(
                "{}",
                format!(
                    "🎉 Congratulations! You found {} in {attempts} attempts!",
                    secret.text()
                )
                .bright_green()
                .bold()
            );
            return Ok(());
        }

        // Check maximum attempts
        if attempts >= MAX_ATTEMPTS {
            println!(
                "{}",
                format!(
                    "Too many attempts! The secret number was: {}",
                    secret.text()
                )
                .red()
            );
            return Ok(());
        }
    }
}

/// Get user input with a prompt, trimmed and lowercased
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_lowercase())
}
