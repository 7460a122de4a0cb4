//! Simple interactive CLI mode
//!
//! Text-based interactive solver without TUI: the user thinks of a code, the
//! solver guesses it from the bulls/cows feedback the user reports.

use crate::core::{Code, Feedback};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Solver, Strategy};
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// solver cannot provide a valid guess.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<S: Strategy>(solver: &Solver<S>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║           Bulls & Cows Solver - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Think of a 4-digit number with unique digits.");
    println!("I'll deduce it using information theory. After each guess, enter");
    println!("the feedback as bulls and cows:\n");
    println!("  - Bulls: correct digit in correct position");
    println!("  - Cows:  correct digit in wrong position");
    println!("  - Example: '2 1' means 2 bulls and 1 cow");
    println!("  - Or type 'win' if the guess is your number!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    let mut history: Vec<(Code, Feedback)> = Vec::new();
    let mut turn = 1;

    loop {
        // Get current candidates count
        let candidates_count = solver.count_candidates(&history);

        if candidates_count == 0 {
            println!("\n❌ No possible codes remain! Your feedback may be incorrect.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");

            match get_user_input("Command")?.as_str() {
                "undo" => {
                    if history.pop().is_some() {
                        turn -= 1;
                        println!("✓ Undone! Back to turn {turn}\n");
                    } else {
                        println!("Nothing to undo!\n");
                    }
                }
                "new" => {
                    history.clear();
                    turn = 1;
                    println!("\n🔄 New game started!\n");
                }
                _ => {}
            }
            continue;
        }

        // Get next guess suggestion
        let guess = solver.next_guess(&history).map_err(|e| e.to_string())?;

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {turn}: {candidates_count} candidates remaining ({:.2} bits of uncertainty)",
            (candidates_count as f64).log2()
        );
        println!("────────────────────────────────────────────────────────────");

        // Calculate and display metrics
        let candidates = solver.candidates(&history);
        let metrics = calculate_metrics(guess, &candidates);

        println!("\n📊 My guess: {guess}");
        println!("   Expected info:    {:.3} bits", metrics.entropy);
        println!(
            "   Expected remain:  {:.1} candidates",
            metrics.expected_remaining
        );
        println!(
            "   Worst case:       {} candidates\n",
            metrics.max_partition
        );

        // Show remaining candidates if count is small
        if candidates_count <= 10 {
            println!("Remaining candidates:");
            for candidate in candidates.iter().take(10) {
                println!("  • {candidate}");
            }
            println!();
        }

        // Get feedback
        let feedback = loop {
            let input = get_user_input("Enter feedback as 'bulls cows' (or 'win', or command)")?;

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    history.clear();
                    turn = 0; // Will be incremented to 1
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                "undo" | "u" => {
                    if history.pop().is_some() {
                        turn -= 1;
                        println!("✓ Undone! Back to turn {turn}\n");
                        break None;
                    }
                    println!("Nothing to undo!\n");
                }
                "win" | "correct" | "yes" | "solved" => {
                    break Some(Feedback::WIN);
                }
                _ => {
                    if let Some(feedback) = Feedback::parse(&input) {
                        break Some(feedback);
                    }
                    println!(
                        "❌ Invalid feedback! Bulls and cows must each be 0-4 and sum to at most 4.\n"
                    );
                }
            }
        };

        if let Some(feedback) = feedback {
            // Add to history
            history.push((guess.clone(), feedback));

            // Check if solved
            if feedback.is_win() {
                use colored::Colorize;

                println!("\n{}", "═".repeat(70).bright_cyan());
                println!(
                    "{}",
                    "    🎉 ✨  C O D E   C R A C K E D !  ✨ 🎉    "
                        .bright_green()
                        .bold()
                );
                println!("{}", "═".repeat(70).bright_cyan());

                println!(
                    "\n  Found {} in {} {}",
                    guess.text().bright_yellow().bold(),
                    turn.to_string().bright_cyan().bold(),
                    if turn == 1 { "guess" } else { "guesses" }
                );

                // Show guess history with feedback tags
                println!("\n  Guess history:");
                for (i, (code, fb)) in history.iter().enumerate() {
                    println!(
                        "    {}. {} {}",
                        (i + 1).to_string().bright_black(),
                        code.text().bright_white().bold(),
                        fb.to_string().bright_black()
                    );
                }

                println!("\n{}", "═".repeat(70).bright_cyan());
                println!();

                match get_user_input("Play again? (yes/no)")?.as_str() {
                    "yes" | "y" => {
                        history.clear();
                        turn = 0;
                        println!("\n🔄 New game started!\n");
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            } else if solver.count_candidates(&history) == 1 {
                // Fully determined: the next suggestion is the secret itself
                println!("\n💡 Only one possibility remains - that must be your number!");
            }

            turn += 1;
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
