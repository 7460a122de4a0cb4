//! Bulls and Cows Solver - CLI
//!
//! Entropy-maximizing Bulls and Cows solver with TUI and CLI modes.

use anyhow::Result;
use bulls_entropy::{
    commands::{
        SolveConfig, analyze_code, print_test_all_statistics, run_benchmark, run_challenge,
        run_simple, run_test_all, solve_code,
    },
    core::Code,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{Solver, StrategyType},
    universe,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bulls_entropy",
    about = "Bulls and Cows solver using entropy-maximizing guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: entropy (default), random
    #[arg(short, long, global = true, default_value = "entropy")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Challenge mode: you guess the computer's secret code
    Challenge,

    /// Solve a specific secret code
    Solve {
        /// The secret code to solve
        code: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze the entropy of a specific guess
    Analyze {
        /// Code to analyze
        code: String,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Test solver on every possible secret
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The guess space is fixed for the process lifetime
    let universe = universe::all_codes();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&universe),
        Commands::Simple => run_simple_command(&cli.strategy, &universe),
        Commands::Challenge => run_challenge(&universe).map_err(anyhow::Error::msg),
        Commands::Solve { code, verbose } => {
            run_solve_command(&cli.strategy, &code, verbose, &universe)
        }
        Commands::Analyze { code } => run_analyze_command(&code, &universe),
        Commands::Benchmark { count } => {
            run_benchmark_command(&cli.strategy, count, &universe);
            Ok(())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(&cli.strategy, limit, &universe);
            Ok(())
        }
    }
}

fn run_solve_command(
    strategy_name: &str,
    code: &str,
    verbose: bool,
    universe: &[Code],
) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name);
    let solver = Solver::new(strategy, universe);

    let config = SolveConfig::new(code.to_string());
    let result = solve_code(config, &solver).map_err(anyhow::Error::msg)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(code: &str, universe: &[Code]) -> Result<()> {
    let result = analyze_code(code, universe).map_err(anyhow::Error::msg)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(strategy_name: &str, count: usize, universe: &[Code]) {
    use rand::prelude::IndexedRandom;

    println!("Running benchmark on {count} random secrets...");

    let secrets: Vec<Code> = universe
        .choose_multiple(&mut rand::rng(), count)
        .cloned()
        .collect();

    let strategy = StrategyType::from_name(strategy_name);
    let solver = Solver::new(strategy, universe);

    let result = run_benchmark(&solver, &secrets);
    print_benchmark_result(&result);
}

fn run_test_all_command(strategy_name: &str, limit: Option<usize>, universe: &[Code]) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Bulls & Cows Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nTesting against {} possible secrets", universe.len());
    println!("Strategy: {strategy_name}");
    println!();

    let strategy = StrategyType::from_name(strategy_name);
    let solver = Solver::new(strategy, universe);

    let stats = run_test_all(&solver, universe, limit);
    print_test_all_statistics(&stats);
}

fn run_simple_command(strategy_name: &str, universe: &[Code]) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name);
    let solver = Solver::new(strategy, universe);
    run_simple(&solver).map_err(anyhow::Error::msg)
}

fn run_play_command(universe: &[Code]) -> Result<()> {
    use bulls_entropy::interactive::{App, run_tui};

    let app = App::new(universe);
    run_tui(app)
}
