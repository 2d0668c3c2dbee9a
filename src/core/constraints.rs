//! Knowledge accumulated from guess feedback
//!
//! A `ConstraintSet` is a value, not a shared accumulator: every round of a
//! session produces a new, extended snapshot and the previous one is left
//! untouched. Entries are never retracted.

use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;

/// Constraints derived from feedback so far
///
/// - `direct_hits`: letter confirmed at an exact position
/// - `hits`: letter confirmed in the word but not at any listed position
/// - `misses`: letter confirmed absent from the word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    direct_hits: FxHashSet<(u8, usize)>,
    hits: FxHashMap<u8, FxHashSet<usize>>,
    misses: FxHashSet<u8>,
}

impl ConstraintSet {
    /// An empty constraint set: every word is consistent with it
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend with a letter confirmed at `position`
    #[must_use]
    pub fn with_direct_hit(mut self, letter: u8, position: usize) -> Self {
        self.direct_hits.insert((letter, position));
        self
    }

    /// Extend with a letter present in the word but not at `position`
    #[must_use]
    pub fn with_hit(mut self, letter: u8, position: usize) -> Self {
        self.hits.entry(letter).or_default().insert(position);
        self
    }

    /// Extend with a letter absent from the word
    #[must_use]
    pub fn with_miss(mut self, letter: u8) -> Self {
        self.misses.insert(letter);
        self
    }

    #[inline]
    #[must_use]
    pub const fn direct_hits(&self) -> &FxHashSet<(u8, usize)> {
        &self.direct_hits
    }

    #[inline]
    #[must_use]
    pub const fn hits(&self) -> &FxHashMap<u8, FxHashSet<usize>> {
        &self.hits
    }

    #[inline]
    #[must_use]
    pub const fn misses(&self) -> &FxHashSet<u8> {
        &self.misses
    }

    /// True when no feedback has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.direct_hits.is_empty() && self.hits.is_empty() && self.misses.is_empty()
    }

    /// Letters recorded as a miss and also as a hit or direct hit, in sorted order
    ///
    /// Such a set cannot come from consistent feedback. Nothing guards
    /// against it; the filter simply rejects every word it touches.
    #[must_use]
    pub fn contradictions(&self) -> Vec<u8> {
        self.misses
            .iter()
            .copied()
            .filter(|letter| {
                self.hits.contains_key(letter)
                    || self.direct_hits.iter().any(|(l, _)| l == letter)
            })
            .collect::<BTreeSet<u8>>()
            .into_iter()
            .collect()
    }

    /// Direct hits sorted by position, for stable display
    #[must_use]
    pub fn sorted_direct_hits(&self) -> Vec<(u8, usize)> {
        let mut sorted: Vec<(u8, usize)> = self.direct_hits.iter().copied().collect();
        sorted.sort_unstable_by_key(|&(letter, position)| (position, letter));
        sorted
    }

    /// Hits sorted by letter with sorted positions, for stable display
    #[must_use]
    pub fn sorted_hits(&self) -> Vec<(u8, Vec<usize>)> {
        let mut sorted: Vec<(u8, Vec<usize>)> = self
            .hits
            .iter()
            .map(|(&letter, positions)| {
                let mut positions: Vec<usize> = positions.iter().copied().collect();
                positions.sort_unstable();
                (letter, positions)
            })
            .collect();
        sorted.sort_unstable_by_key(|(letter, _)| *letter);
        sorted
    }

    /// Misses sorted alphabetically, for stable display
    #[must_use]
    pub fn sorted_misses(&self) -> Vec<u8> {
        let mut sorted: Vec<u8> = self.misses.iter().copied().collect();
        sorted.sort_unstable();
        sorted
    }
}
