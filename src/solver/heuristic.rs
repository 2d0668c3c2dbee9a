//! Positional-frequency heuristic
//!
//! Builds an "ideal" word from the most common letter at each position of
//! the pool, then picks the pool word that agrees with it in the most
//! positions.
//!
//! Ties are always resolved by pool order: the letter seen first wins a
//! per-position tie, and the earliest word wins a score tie. Identical pools
//! (order included) therefore always produce the identical guess.

use crate::core::Word;
use log::trace;
use rustc_hash::FxHashMap;

/// Most frequent letter at `position` across the pool
///
/// Words too short to have a letter at `position` are not counted. Returns
/// `None` if no pool word has one.
#[must_use]
pub fn positional_mode(pool: &[&Word], position: usize) -> Option<u8> {
    let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
    let mut first_seen: Vec<u8> = Vec::new();

    for &letter in pool.iter().filter_map(|word| word.chars().get(position)) {
        *counts.entry(letter).or_insert_with(|| {
            first_seen.push(letter);
            0
        }) += 1;
    }

    let mut best: Option<(u8, usize)> = None;
    for letter in first_seen {
        let count = counts[&letter];
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((letter, count));
        }
    }

    best.map(|(letter, _)| letter)
}

/// The per-position mode of the whole pool
///
/// The result need not be a word of the corpus. Returns `None` for an empty
/// pool.
///
/// # Examples
/// ```
/// use wordle_positional::core::Corpus;
/// use wordle_positional::solver::heuristic::ideal_word;
///
/// let corpus = Corpus::from_strs(&["biker", "baker", "caper"]);
/// let pool: Vec<_> = corpus.iter().collect();
///
/// assert_eq!(ideal_word(&pool).as_deref(), Some(&b"baker"[..]));
/// ```
#[must_use]
pub fn ideal_word(pool: &[&Word]) -> Option<Vec<u8>> {
    let length = pool.first()?.length();
    (0..length)
        .map(|position| positional_mode(pool, position))
        .collect()
}

/// Number of positions where `word` agrees with `ideal`
#[must_use]
pub fn score(word: &Word, ideal: &[u8]) -> usize {
    word.chars()
        .iter()
        .zip(ideal)
        .filter(|(letter, ideal_letter)| letter == ideal_letter)
        .count()
}

/// Select the next guess from the pool
///
/// Returns the first word with the highest [`score`] against the
/// [`ideal_word`], or `None` if the pool is empty.
#[must_use]
pub fn best_guess<'a>(pool: &[&'a Word]) -> Option<&'a Word> {
    let ideal = ideal_word(pool)?;
    trace!("ideal word: {}", String::from_utf8_lossy(&ideal));

    let mut best: Option<(&'a Word, usize)> = None;
    for &word in pool {
        let word_score = score(word, &ideal);
        trace!("score {word} = {word_score}");
        if best.is_none_or(|(_, best_score)| word_score > best_score) {
            best = Some((word, word_score));
        }
    }

    best.map(|(word, _)| word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConstraintSet, Corpus};
    use crate::solver::filter::filter;
    use crate::wordlists::sample_corpus;

    fn fixture() -> Corpus {
        sample_corpus()
    }

    #[test]
    fn ideal_word_over_fixture() {
        let corpus = fixture();
        let pool: Vec<&Word> = corpus.iter().collect();

        assert_eq!(ideal_word(&pool), Some(b"aaaee".to_vec()));
    }

    #[test]
    fn mode_ties_go_to_first_seen_letter() {
        let corpus = Corpus::from_strs(&["biker", "tests"]);
        let pool: Vec<&Word> = corpus.iter().collect();
        assert_eq!(ideal_word(&pool), Some(b"biker".to_vec()));

        let reversed: Vec<&Word> = pool.iter().rev().copied().collect();
        assert_eq!(ideal_word(&reversed), Some(b"tests".to_vec()));
    }

    #[test]
    fn mode_prefers_strict_majority_over_first_seen() {
        let corpus = Corpus::from_strs(&["caper", "biker", "baker"]);
        let pool: Vec<&Word> = corpus.iter().collect();
        assert_eq!(positional_mode(&pool, 0), Some(b'b'));
        assert_eq!(positional_mode(&pool, 1), Some(b'a'));
    }

    #[test]
    fn mixed_length_pool_does_not_panic() {
        let agave = Word::new("agave").unwrap();
        let cat = Word::with_length("cat", 3).unwrap();
        let pool = [&agave, &cat];

        assert_eq!(positional_mode(&pool, 3), Some(b'v'));
        assert_eq!(positional_mode(&pool, 5), None);
        assert_eq!(best_guess(&pool), Some(&agave));
    }

    #[test]
    fn empty_pool_has_no_guess() {
        let pool: Vec<&Word> = Vec::new();
        assert_eq!(positional_mode(&pool, 0), None);
        assert_eq!(ideal_word(&pool), None);
        assert_eq!(best_guess(&pool), None);
    }

    #[test]
    fn score_counts_matching_positions() {
        let word = Word::new("agave").unwrap();
        assert_eq!(score(&word, b"aaaee"), 3);
        assert_eq!(score(&Word::new("tests").unwrap(), b"aaaee"), 0);
    }

    #[test]
    fn first_guess_over_fixture_is_agave() {
        let corpus = fixture();
        let pool: Vec<&Word> = corpus.iter().collect();

        // agave and abate both score 3; agave comes first
        assert_eq!(best_guess(&pool).map(Word::text), Some("agave"));
    }

    #[test]
    fn best_guess_after_constraints_is_biker() {
        let corpus = fixture();
        let pool: Vec<&Word> = corpus.iter().collect();

        let constraints = ConstraintSet::new()
            .with_direct_hit(b'e', 3)
            .with_hit(b'k', 1)
            .with_hit(b'k', 4)
            .with_miss(b'a');
        let pool = filter(&pool, &constraints);

        assert_eq!(best_guess(&pool).map(Word::text), Some("biker"));
    }

    #[test]
    fn best_guess_is_deterministic() {
        let corpus = fixture();
        let pool: Vec<&Word> = corpus.iter().collect();

        let first = best_guess(&pool);
        for _ in 0..10 {
            assert_eq!(best_guess(&pool), first);
        }
    }
}
