//! Word solving command
//!
//! Solves a specific secret word and returns the solution path.

use crate::core::{ConstraintSet, Corpus, Word, WordError};
use crate::solver::{Mark, Session, SessionError};
use log::warn;
use thiserror::Error;

/// Default round budget per secret
pub const DEFAULT_MAX_ROUNDS: usize = 6;

/// Errors from solving a single word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("invalid target word: {0}")]
    InvalidTarget(#[from] WordError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_rounds: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
    /// Whether the target is one of the corpus words
    pub in_corpus: bool,
    pub final_pool_size: usize,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub marks: Vec<Mark>,
    pub candidates: usize,
    pub fell_back: bool,
    pub constraints: ConstraintSet,
}

/// Solve a specific word against the corpus
///
/// The target does not have to be a corpus word; if it is not, the solve
/// simply cannot succeed.
///
/// # Errors
///
/// Returns an error if the target word is invalid or its length differs
/// from the corpus word length.
pub fn solve_word(config: SolveConfig, corpus: &Corpus) -> Result<SolveResult, SolveError> {
    let secret = Word::with_length(&config.target, corpus.word_length())?;
    let in_corpus = corpus.find(secret.text()).is_some();
    if !in_corpus {
        warn!("'{secret}' is not in the corpus and cannot be guessed");
    }
    let mut session = Session::new(secret, corpus)?;

    let outcome = session.solve_in_place(config.max_rounds);

    let guesses = session
        .history()
        .iter()
        .map(|turn| GuessStep {
            word: turn.guess.text().to_string(),
            marks: turn.marks.clone(),
            candidates: turn.pool_size,
            fell_back: turn.fell_back,
            constraints: turn.constraints.clone(),
        })
        .collect();

    Ok(SolveResult {
        success: outcome.solved,
        guesses,
        target: session.secret().text().to_string(),
        in_corpus,
        final_pool_size: outcome.pool_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::sample_corpus;

    #[test]
    fn solve_word_succeeds() {
        let corpus = sample_corpus();
        let result = solve_word(SolveConfig::new("solve".to_string()), &corpus).unwrap();

        assert!(result.success);
        assert!(result.in_corpus);
        assert_eq!(result.guesses.len(), 2);
        assert_eq!(result.guesses[0].word, "agave");
        assert_eq!(result.guesses[1].word, "solve");
        assert_eq!(result.final_pool_size, 1);
    }

    #[test]
    fn solve_records_history() {
        let corpus = sample_corpus();
        let result = solve_word(SolveConfig::new("tests".to_string()), &corpus).unwrap();

        let candidates: Vec<usize> = result.guesses.iter().map(|s| s.candidates).collect();
        assert_eq!(candidates, [9, 2, 1]);
        assert!(result.guesses.iter().all(|s| !s.fell_back));
        assert_eq!(result.guesses[2].marks, vec![Mark::Correct; 5]);
    }

    #[test]
    fn solve_target_is_normalized() {
        let corpus = sample_corpus();
        let result = solve_word(SolveConfig::new("SOLVE".to_string()), &corpus).unwrap();
        assert_eq!(result.target, "solve");
        assert!(result.success);
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let corpus = sample_corpus();
        let result = solve_word(SolveConfig::new("zz".to_string()), &corpus);

        assert!(matches!(result, Err(SolveError::InvalidTarget(_))));
    }

    #[test]
    fn solve_with_max_rounds_limit() {
        let corpus = sample_corpus();
        let config = SolveConfig::new("tests".to_string()).with_max_rounds(2);

        let result = solve_word(config, &corpus).unwrap();

        assert!(!result.success);
        assert_eq!(result.guesses.len(), 2);
        assert_eq!(result.final_pool_size, 2);
    }

    #[test]
    fn solve_target_outside_corpus_fails() {
        let corpus = sample_corpus();
        let result = solve_word(SolveConfig::new("mound".to_string()), &corpus).unwrap();

        assert!(!result.success);
        assert!(!result.in_corpus);
        assert_eq!(result.guesses.len(), DEFAULT_MAX_ROUNDS);
    }
}
