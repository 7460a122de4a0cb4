//! Formatting utilities for terminal output

use crate::core::Feedback;

/// Format feedback as a friendly phrase, e.g. "2 bulls, 1 cow"
#[must_use]
pub fn feedback_phrase(feedback: Feedback) -> String {
    format!(
        "{} bull{}, {} cow{}",
        feedback.bulls(),
        if feedback.bulls() == 1 { "" } else { "s" },
        feedback.cows(),
        if feedback.cows() == 1 { "" } else { "s" },
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the per-round ceiling
///
/// One round distinguishes at most 14 feedback classes for unique-digit
/// codes, so log2(14) ≈ 3.81 bits is the most a guess can carry.
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = 14f64.log2();
    create_progress_bar(entropy, max_entropy, width)
}
