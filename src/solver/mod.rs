//! Bulls and Cows solving algorithms
//!
//! Candidate filtering, entropy estimation, and entropy-maximizing guess
//! selection over the code universe.

mod engine;
pub mod entropy;
pub mod filter;
pub mod strategy;

pub use engine::{Solver, SolverError};
pub use filter::filter_consistent;
pub use strategy::{EntropyStrategy, RandomStrategy, Strategy, StrategyType};
