//! Terminal output formatting
//!
//! Pretty-printers for command results and small formatting helpers.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_benchmark_result, print_solve_result};
pub use formatters::feedback_phrase;
