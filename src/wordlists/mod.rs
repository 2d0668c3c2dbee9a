//! Word lists for solving
//!
//! Corpus files are loaded at runtime; a small sample corpus is compiled in
//! for demos and tests.

pub mod loader;

pub use loader::{LoadError, load_from_file, parse_rows};

use crate::core::{Corpus, DEFAULT_WORD_LENGTH};

/// Nine-word sample corpus
pub const SAMPLE: &[&str] = &[
    "agave", "abate", "argue", "biker", "baker", "caper", "czars", "tests", "solve",
];

/// The embedded sample as a corpus
#[must_use]
pub fn sample_corpus() -> Corpus {
    Corpus::from_strs(SAMPLE)
}

/// The embedded sample, if `word_length` is the length of its words
#[must_use]
pub fn sample_corpus_with_length(word_length: usize) -> Option<Corpus> {
    (word_length == DEFAULT_WORD_LENGTH).then(sample_corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_words_are_valid() {
        for &word in SAMPLE {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn sample_corpus_keeps_every_word() {
        assert_eq!(sample_corpus().len(), SAMPLE.len());
    }

    #[test]
    fn sample_only_offered_for_its_word_length() {
        assert_eq!(sample_corpus_with_length(5), Some(sample_corpus()));
        assert_eq!(sample_corpus_with_length(6), None);
        assert_eq!(sample_corpus_with_length(3), None);
    }
}
