//! Core domain types for Bulls and Cows
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod feedback;

pub use code::{CODE_LEN, Code, CodeError};
pub use feedback::{Feedback, FeedbackError};
