//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod challenge;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_code};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use challenge::run_challenge;
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_code};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
