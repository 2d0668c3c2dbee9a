//! Solve sessions
//!
//! A `Session` pits the solver against one secret word. It owns the live
//! candidate pool, the current constraint snapshot and the round counter;
//! the corpus is only borrowed, so many sessions can share it.

use super::feedback::{Mark, evaluate};
use super::filter::{Narrowing, narrow};
use super::strategy::{PositionalStrategy, Strategy};
use crate::core::{ConstraintSet, Corpus, Word};
use log::{debug, warn};
use thiserror::Error;

/// Errors raised when driving a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("secret '{secret}' has {actual} letters but the corpus uses {expected}")]
    SecretLength {
        secret: String,
        expected: usize,
        actual: usize,
    },
    #[error("guess '{guess}' has {actual} letters but the secret has {expected}")]
    GuessLength {
        guess: String,
        expected: usize,
        actual: usize,
    },
}

/// Solve loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Still guessing; carries the rounds played so far
    Running(usize),
    /// Secret found in the given round
    Solved(usize),
    /// Round budget used up (or nothing left to guess) after the given round
    Exhausted(usize),
}

impl SessionState {
    /// Rounds played when this state was reached
    #[must_use]
    pub const fn round(self) -> usize {
        match self {
            Self::Running(r) | Self::Solved(r) | Self::Exhausted(r) => r,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Running(_))
    }
}

/// One guess-and-feedback round
#[derive(Debug, Clone)]
pub struct Turn<'a> {
    pub guess: &'a Word,
    pub marks: Vec<Mark>,
    /// Size of the pool the guess was drawn from
    pub pool_size: usize,
    /// The filter found no consistent word and the stale pool was kept
    pub fell_back: bool,
    pub solved: bool,
    /// Constraint snapshot after this round's feedback
    pub constraints: ConstraintSet,
}

/// Summary emitted when a session terminates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOutcome {
    pub rounds: usize,
    pub pool_size: usize,
    pub solved: bool,
}

/// Solver state for a single secret word
pub struct Session<'a, S: Strategy = PositionalStrategy> {
    strategy: S,
    secret: Word,
    pool: Vec<&'a Word>,
    constraints: ConstraintSet,
    round: usize,
    history: Vec<Turn<'a>>,
}

impl<'a> Session<'a> {
    /// Create a session using the positional-frequency strategy
    ///
    /// # Errors
    /// Returns `SessionError::SecretLength` if the secret's length differs
    /// from the corpus word length.
    ///
    /// # Examples
    /// ```
    /// use wordle_positional::core::{Corpus, Word};
    /// use wordle_positional::solver::Session;
    ///
    /// let corpus = Corpus::from_strs(&["agave", "abate", "biker", "solve"]);
    /// let session = Session::new(Word::new("solve").unwrap(), &corpus).unwrap();
    ///
    /// let outcome = session.solve(6);
    /// assert!(outcome.solved);
    /// assert_eq!(outcome.rounds, 2);
    /// ```
    pub fn new(secret: Word, corpus: &'a Corpus) -> Result<Self, SessionError> {
        Self::with_strategy(PositionalStrategy, secret, corpus)
    }
}

impl<'a, S: Strategy> Session<'a, S> {
    /// Create a session with an explicit guess selection strategy
    ///
    /// # Errors
    /// Returns `SessionError::SecretLength` on a secret/corpus length mismatch.
    pub fn with_strategy(
        strategy: S,
        secret: Word,
        corpus: &'a Corpus,
    ) -> Result<Self, SessionError> {
        if secret.length() != corpus.word_length() {
            return Err(SessionError::SecretLength {
                secret: secret.text().to_string(),
                expected: corpus.word_length(),
                actual: secret.length(),
            });
        }

        Ok(Self {
            strategy,
            secret,
            pool: corpus.iter().collect(),
            constraints: ConstraintSet::new(),
            round: 0,
            history: Vec::new(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Current candidate pool
    #[inline]
    #[must_use]
    pub fn pool(&self) -> &[&'a Word] {
        &self.pool
    }

    /// Current constraint snapshot
    #[inline]
    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Number of guesses submitted so far
    #[inline]
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    /// Every round played by [`Session::step`]
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Turn<'a>] {
        &self.history
    }

    /// Narrow the pool with the current constraints
    ///
    /// Returns `true` if nothing was consistent and the previous pool was
    /// kept as is.
    pub fn narrow_pool(&mut self) -> bool {
        match narrow(&self.pool, &self.constraints) {
            Narrowing::Narrowed(pool) => {
                self.pool = pool;
                false
            }
            Narrowing::Unsatisfiable => {
                // pool stays as it was
                debug!(
                    "no candidate matches the constraints, keeping {} stale candidates",
                    self.pool.len()
                );
                true
            }
        }
    }

    /// Submit a guess, replacing the constraint snapshot with the extended one
    ///
    /// Returns whether the guess is the secret. The round counter advances on
    /// every call.
    ///
    /// # Errors
    /// Returns `SessionError::GuessLength` if the guess length differs from
    /// the secret's. The round counter is not advanced in that case.
    pub fn submit(&mut self, guess: &Word) -> Result<bool, SessionError> {
        if guess.length() != self.secret.length() {
            return Err(SessionError::GuessLength {
                guess: guess.text().to_string(),
                expected: self.secret.length(),
                actual: guess.length(),
            });
        }

        Ok(self.apply(guess).0)
    }

    fn apply(&mut self, guess: &Word) -> (bool, Vec<Mark>) {
        self.round += 1;
        let evaluation = evaluate(guess, &self.secret, &self.constraints);

        let contradictions = evaluation.constraints.contradictions();
        if !contradictions.is_empty() {
            warn!(
                "contradictory constraints for letters '{}'",
                String::from_utf8_lossy(&contradictions)
            );
        }

        self.constraints = evaluation.constraints;
        (evaluation.solved, evaluation.marks)
    }

    /// Play one round: filter, pick a guess, evaluate it
    ///
    /// Returns `None` without advancing the round if there is nothing to
    /// guess (empty corpus).
    pub fn step(&mut self) -> Option<&Turn<'a>> {
        let fell_back = self.narrow_pool();
        let guess = self.strategy.select_guess(&self.pool)?;
        let pool_size = self.pool.len();

        let (solved, marks) = self.apply(guess);
        debug!(
            "round {}: guessed {guess} from {pool_size} candidates{}{}",
            self.round,
            if fell_back { " (stale pool)" } else { "" },
            if solved { ", solved" } else { "" }
        );

        self.history.push(Turn {
            guess,
            marks,
            pool_size,
            fell_back,
            solved,
            constraints: self.constraints.clone(),
        });
        self.history.last()
    }

    /// Advance the state machine by one round
    ///
    /// `Running(r)` becomes `Solved(r + 1)` on a correct guess, otherwise
    /// `Exhausted(r + 1)` once `max_rounds` is reached, otherwise
    /// `Running(r + 1)`. Terminal states are returned unchanged.
    pub fn advance(&mut self, state: SessionState, max_rounds: usize) -> SessionState {
        let SessionState::Running(round) = state else {
            return state;
        };

        if round >= max_rounds {
            return SessionState::Exhausted(round);
        }

        match self.step().map(|turn| turn.solved) {
            None => SessionState::Exhausted(round),
            Some(true) => SessionState::Solved(round + 1),
            Some(false) if round + 1 == max_rounds => SessionState::Exhausted(round + 1),
            Some(false) => SessionState::Running(round + 1),
        }
    }

    /// Run rounds until solved or `max_rounds` guesses have been made
    pub fn solve_in_place(&mut self, max_rounds: usize) -> SolveOutcome {
        let mut state = SessionState::Running(self.round);
        while !state.is_terminal() {
            state = self.advance(state, max_rounds);
        }

        SolveOutcome {
            rounds: state.round(),
            pool_size: self.pool.len(),
            solved: matches!(state, SessionState::Solved(_)),
        }
    }

    /// Run a bounded solve, consuming the session
    #[must_use]
    pub fn solve(mut self, max_rounds: usize) -> SolveOutcome {
        self.solve_in_place(max_rounds)
    }
}
