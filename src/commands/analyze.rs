//! Guess analysis command
//!
//! Analyzes the entropy and information content of a specific guess.

use crate::core::Code;
use crate::solver::entropy::calculate_entropy;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub code: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub total_candidates: usize,
}

/// Analyze the entropy of a guess against a set of candidates
///
/// Every valid code is a legal guess; validity is membership in the universe.
///
/// # Errors
///
/// Returns an error if the guess is not a valid code (wrong length,
/// non-digits, repeated digits).
pub fn analyze_code(code: &str, candidates: &[Code]) -> Result<AnalysisResult, String> {
    let code_obj = Code::new(code).map_err(|e| format!("Invalid code: {e}"))?;

    let candidate_refs: Vec<&Code> = candidates.iter().collect();
    let entropy = calculate_entropy(&code_obj, &candidate_refs);

    let total_candidates = candidates.len();
    let expected_reduction = entropy.exp2();
    let expected_remaining = total_candidates as f64 / expected_reduction;

    Ok(AnalysisResult {
        code: code.to_string(),
        entropy,
        expected_reduction,
        expected_remaining,
        total_candidates,
    })
}
