//! Bulls and Cows Solver
//!
//! Deduces an unknown 4-digit code with unique digits by choosing, at every
//! round, the guess that maximizes expected information gain (Shannon
//! entropy) over the codes still consistent with past feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_entropy::core::{Code, Feedback};
//!
//! // Score a guess against a secret
//! let secret = Code::new("1234").unwrap();
//! let guess = Code::new("1432").unwrap();
//!
//! let feedback = Feedback::score(&secret, &guess);
//! assert_eq!((feedback.bulls(), feedback.cows()), (2, 2));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// The fixed code universe
pub mod universe;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
