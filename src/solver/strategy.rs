//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::Code;

/// A strategy for selecting the best guess from the guess pool
pub trait Strategy {
    /// Select the best guess from the guess pool given the current candidates
    ///
    /// Returns the best guess, or `None` if the guess pool is empty.
    fn select_guess<'a>(&self, guess_pool: &'a [Code], candidates: &[Code]) -> Option<&'a Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Entropy maximization (default)
    Entropy(EntropyStrategy),
    /// Random selection from candidates (baseline)
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, guess_pool: &'a [Code], candidates: &[Code]) -> Option<&'a Code> {
        match self {
            Self::Entropy(s) => s.select_guess(guess_pool, candidates),
            Self::Random(s) => s.select_guess(guess_pool, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "entropy", "random". Defaults to entropy if the name
    /// is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Entropy(EntropyStrategy),
        }
    }
}

/// Entropy maximization strategy
///
/// Always selects the first guess with the highest Shannon entropy over the
/// candidate set, scanning the pool in enumeration order.
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_guess<'a>(&self, guess_pool: &'a [Code], candidates: &[Code]) -> Option<&'a Code> {
        let guess_refs: Vec<&Code> = guess_pool.iter().collect();
        let candidate_refs: Vec<&Code> = candidates.iter().collect();

        super::entropy::select_best_guess(&guess_refs, &candidate_refs)
            .and_then(|(best, _)| guess_pool.iter().find(|c| c.text() == best.text()))
    }
}

/// Random baseline strategy
///
/// Picks uniformly among the remaining candidates. Useful as the comparison
/// baseline in benchmarks.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(&self, guess_pool: &'a [Code], candidates: &[Code]) -> Option<&'a Code> {
        use rand::prelude::IndexedRandom;

        candidates
            .choose(&mut rand::rng())
            .and_then(|candidate| guess_pool.iter().find(|c| c.text() == candidate.text()))
            .or_else(|| guess_pool.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::universe;

    fn setup_test_data() -> (Vec<Code>, Vec<Code>) {
        let pool: Vec<Code> = universe::all_codes().into_iter().take(80).collect();
        let candidates = vec![
            Code::new("0145").unwrap(),
            Code::new("0146").unwrap(),
            Code::new("0147").unwrap(),
        ];
        (pool, candidates)
    }

    #[test]
    fn entropy_strategy_selects_from_pool() {
        let (pool, candidates) = setup_test_data();

        let strategy = EntropyStrategy;
        let guess = strategy.select_guess(&pool, &candidates).unwrap();

        assert!(pool.contains(guess));
    }

    #[test]
    fn entropy_strategy_is_deterministic() {
        let (pool, candidates) = setup_test_data();

        let strategy = EntropyStrategy;
        let first = strategy.select_guess(&pool, &candidates).unwrap();
        let second = strategy.select_guess(&pool, &candidates).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn random_strategy_selects_a_candidate() {
        let (pool, candidates) = setup_test_data();

        let strategy = RandomStrategy;
        let guess = strategy.select_guess(&pool, &candidates).unwrap();

        assert!(candidates.contains(guess));
    }

    #[test]
    fn strategies_return_none_on_empty_pool() {
        let (_, candidates) = setup_test_data();

        assert!(EntropyStrategy.select_guess(&[], &candidates).is_none());
        assert!(RandomStrategy.select_guess(&[], &candidates).is_none());
    }

    #[test]
    fn from_name_dispatches() {
        assert!(matches!(
            StrategyType::from_name("random"),
            StrategyType::Random(_)
        ));
        assert!(matches!(
            StrategyType::from_name("entropy"),
            StrategyType::Entropy(_)
        ));
        assert!(matches!(
            StrategyType::from_name("anything-else"),
            StrategyType::Entropy(_)
        ));
    }
}
