//! Guess selection strategies
//!
//! Defines the Strategy trait and the positional-frequency implementation.

use super::heuristic;
use crate::core::Word;

/// A strategy for selecting the next guess from the live candidate pool
pub trait Strategy {
    /// Select the next guess from `pool`
    ///
    /// Returns `None` only if the pool is empty.
    fn select_guess<'a>(&self, pool: &[&'a Word]) -> Option<&'a Word>;
}

/// Positional-frequency strategy
///
/// Guesses the pool word agreeing with the per-position most common letters
/// in the most positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalStrategy;

impl Strategy for PositionalStrategy {
    fn select_guess<'a>(&self, pool: &[&'a Word]) -> Option<&'a Word> {
        heuristic::best_guess(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Corpus;

    #[test]
    fn positional_strategy_selects_from_pool() {
        let corpus = Corpus::from_strs(&["biker", "baker", "caper"]);
        let pool: Vec<&Word> = corpus.iter().collect();

        let guess = PositionalStrategy.select_guess(&pool);
        assert_eq!(guess.map(Word::text), Some("baker"));
    }

    #[test]
    fn positional_strategy_single_candidate() {
        let corpus = Corpus::from_strs(&["czars"]);
        let pool: Vec<&Word> = corpus.iter().collect();

        assert_eq!(PositionalStrategy.select_guess(&pool).map(Word::text), Some("czars"));
    }

    #[test]
    fn positional_strategy_empty_pool() {
        assert!(PositionalStrategy.select_guess(&[]).is_none());
    }
}
