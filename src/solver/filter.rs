//! Candidate filtering
//!
//! Narrows a candidate pool to the words consistent with a constraint set.

use crate::core::{ConstraintSet, Word};

/// Outcome of narrowing a pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Narrowing<'a> {
    /// At least one word survived; this is the new pool
    Narrowed(Vec<&'a Word>),
    /// No word in the pool satisfies the constraints
    Unsatisfiable,
}

/// Check whether `word` is consistent with every recorded constraint
///
/// A word is consistent when it contains no missed letter, carries every
/// direct hit at its position, and contains every hit letter but not at any
/// of the positions recorded for it.
#[must_use]
pub fn is_consistent(word: &Word, constraints: &ConstraintSet) -> bool {
    if constraints.misses().iter().any(|&m| word.has_letter(m)) {
        return false;
    }

    if constraints
        .direct_hits()
        .iter()
        .any(|&(letter, position)| word.chars().get(position) != Some(&letter))
    {
        return false;
    }

    constraints.hits().iter().all(|(&letter, positions)| {
        word.has_letter(letter)
            && positions
                .iter()
                .all(|&position| word.chars().get(position) != Some(&letter))
    })
}

/// Narrow `pool` without applying any fallback
///
/// Input order is preserved in the narrowed pool.
#[must_use]
pub fn narrow<'a>(pool: &[&'a Word], constraints: &ConstraintSet) -> Narrowing<'a> {
    let consistent: Vec<&'a Word> = pool
        .iter()
        .copied()
        .filter(|word| is_consistent(word, constraints))
        .collect();

    if consistent.is_empty() {
        Narrowing::Unsatisfiable
    } else {
        Narrowing::Narrowed(consistent)
    }
}

/// Narrow `pool`, falling back to the previous pool when nothing survives
///
/// The result is never empty unless `pool` itself is. When the constraints
/// rule out every word the solver keeps guessing from the stale pool instead
/// of reporting that no candidates remain.
///
/// # Examples
/// ```
/// use wordle_positional::core::{ConstraintSet, Corpus};
/// use wordle_positional::solver::filter;
///
/// let corpus = Corpus::from_strs(&["agave", "biker", "solve"]);
/// let pool: Vec<_> = corpus.iter().collect();
///
/// let constraints = ConstraintSet::new().with_miss(b'a');
/// assert_eq!(filter(&pool, &constraints).len(), 2);
///
/// // Every word contains an `e`, so the pool is kept as it was
/// let impossible = ConstraintSet::new().with_miss(b'e');
/// assert_eq!(filter(&pool, &impossible), pool);
/// ```
#[must_use]
pub fn filter<'a>(pool: &[&'a Word], constraints: &ConstraintSet) -> Vec<&'a Word> {
    match narrow(pool, constraints) {
        Narrowing::Narrowed(narrowed) => narrowed,
        Narrowing::Unsatisfiable => pool.to_vec(),
    }
}
