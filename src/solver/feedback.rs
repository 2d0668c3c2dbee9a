//! Guess feedback evaluation
//!
//! Compares a guess against the secret and derives the next constraint
//! snapshot. Feedback is tracked per position with set semantics: a letter
//! guessed more often than it occurs in the secret is still reported as
//! present at every misplaced position, so repeated letters are not
//! occurrence-counted the way standard Wordle colours them.

use crate::core::{ConstraintSet, Word};

/// Feedback for a single position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter is at this exact position in the secret
    Correct,
    /// Letter is in the secret, but not at this position
    Present,
    /// Letter does not occur in the secret
    Absent,
}

impl Mark {
    /// Classify the guess letter at `position`
    #[must_use]
    pub fn classify(guess: &Word, secret: &Word, position: usize) -> Self {
        let letter = guess.char_at(position);
        if !secret.has_letter(letter) {
            Self::Absent
        } else if secret.chars().get(position) == Some(&letter) {
            Self::Correct
        } else {
            Self::Present
        }
    }
}

/// Result of evaluating one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The guess equals the secret
    pub solved: bool,
    /// Constraint snapshot after this guess
    pub constraints: ConstraintSet,
    /// Per-position feedback
    pub marks: Vec<Mark>,
}

/// Per-position marks for `guess` against `secret`
#[must_use]
pub fn marks(guess: &Word, secret: &Word) -> Vec<Mark> {
    (0..guess.length())
        .map(|position| Mark::classify(guess, secret, position))
        .collect()
}

/// Evaluate `guess` against `secret`, extending `constraints`
///
/// An exact match returns the snapshot unchanged. Otherwise every absent
/// letter becomes a miss, every correctly placed letter a direct hit, and
/// every misplaced letter a hit at its guessed position.
///
/// # Examples
/// ```
/// use wordle_positional::core::{ConstraintSet, Word};
/// use wordle_positional::solver::feedback::evaluate;
///
/// let secret = Word::new("solve").unwrap();
/// let guess = Word::new("agave").unwrap();
///
/// let evaluation = evaluate(&guess, &secret, &ConstraintSet::new());
/// assert!(!evaluation.solved);
/// assert!(evaluation.constraints.misses().contains(&b'a'));
/// assert!(evaluation.constraints.direct_hits().contains(&(b'v', 3)));
/// ```
#[must_use]
pub fn evaluate(guess: &Word, secret: &Word, constraints: &ConstraintSet) -> Evaluation {
    let marks = marks(guess, secret);

    if guess == secret {
        return Evaluation {
            solved: true,
            constraints: constraints.clone(),
            marks,
        };
    }

    let constraints = marks.iter().enumerate().fold(
        constraints.clone(),
        |constraints, (position, mark)| {
            let letter = guess.char_at(position);
            match mark {
                Mark::Absent => constraints.with_miss(letter),
                Mark::Correct => constraints.with_direct_hit(letter, position),
                Mark::Present => constraints.with_hit(letter, position),
            }
        },
    );

    Evaluation {
        solved: false,
        constraints,
        marks,
    }
}
