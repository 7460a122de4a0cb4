//! The code universe
//!
//! Generates the fixed guess space: every 4-digit code with all digits
//! distinct. Constructed once at startup and never mutated.

use crate::core::Code;

/// Number of legal codes: 10 × 9 × 8 × 7
pub const UNIVERSE_SIZE: usize = 5040;

/// Generate every legal code in lexicographic order
///
/// The order is part of the solver's contract: guess selection breaks
/// entropy ties by taking the first maximal guess in enumeration order, so
/// the universe must enumerate identically on every run.
///
/// # Panics
/// Will not panic - every generated string is four distinct ASCII digits.
#[must_use]
pub fn all_codes() -> Vec<Code> {
    let mut codes = Vec::with_capacity(UNIVERSE_SIZE);

    for a in b'0'..=b'9' {
        for b in b'0'..=b'9' {
            if b == a {
                continue;
            }
            for c in b'0'..=b'9' {
                if c == a || c == b {
                    continue;
                }
                for d in b'0'..=b'9' {
                    if d == a || d == b || d == c {
                        continue;
                    }
                    let text = String::from_utf8(vec![a, b, c, d])
                        .expect("digits are ASCII");
                    codes.push(Code::new(text).expect("generated code is legal"));
                }
            }
        }
    }

    codes
}
