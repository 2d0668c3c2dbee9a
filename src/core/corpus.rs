//! Read-only word corpus shared by solve sessions

use super::{DEFAULT_WORD_LENGTH, Word};

/// All candidate words of one fixed length
///
/// Built once and only read afterwards, so a single corpus can back any
/// number of sessions, including sessions running on other threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    word_length: usize,
    words: Vec<Word>,
}

impl Corpus {
    /// Build a corpus, silently dropping words whose length is not `word_length`
    #[must_use]
    pub fn new(word_length: usize, words: impl IntoIterator<Item = Word>) -> Self {
        let words = words
            .into_iter()
            .filter(|w| w.length() == word_length)
            .collect();

        Self { word_length, words }
    }

    /// Convert string slices into a default-length corpus, skipping invalid entries
    ///
    /// # Examples
    /// ```
    /// use wordle_positional::core::Corpus;
    ///
    /// let corpus = Corpus::from_strs(&["agave", "toolong", "solve"]);
    /// assert_eq!(corpus.len(), 2);
    /// ```
    #[must_use]
    pub fn from_strs(words: &[&str]) -> Self {
        Self::from_strs_with_length(words, DEFAULT_WORD_LENGTH)
    }

    /// Like [`Corpus::from_strs`] for an arbitrary word length
    #[must_use]
    pub fn from_strs_with_length(words: &[&str], word_length: usize) -> Self {
        let words = words
            .iter()
            .filter_map(|&s| Word::with_length(s, word_length).ok());
        Self::new(word_length, words)
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Find a corpus word by its text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.text() == text)
    }
}
