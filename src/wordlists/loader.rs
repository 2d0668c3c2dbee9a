//! Corpus loading
//!
//! Reads delimited word files. Each non-blank row is split on commas, with
//! optional double quotes around a field, and is accepted as a word when it
//! has either one field per letter (`a,g,a,v,e`) or a single field of the
//! whole word (`agave`). Rows of any other shape are skipped.

use crate::core::{Corpus, Word, WordError};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a corpus file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("file {}, line {line}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        #[source]
        source: WordError,
    },
}

/// Load a corpus of `word_length`-letter words from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and
/// `LoadError::Malformed` (with the 1-based line number) for a row of the
/// right shape that holds anything other than letters.
///
/// # Examples
/// ```no_run
/// use wordle_positional::wordlists::loader::load_from_file;
///
/// let corpus = load_from_file("5_letters.csv", 5).unwrap();
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> Result<Corpus, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_rows(&content, word_length).map_err(|(line, source)| LoadError::Malformed {
        path: path.to_path_buf(),
        line,
        source,
    })
}

/// Parse delimited rows into a corpus
///
/// # Errors
///
/// Returns the 1-based line number and the word error of the first
/// malformed row.
///
/// # Examples
/// ```
/// use wordle_positional::wordlists::loader::parse_rows;
///
/// let corpus = parse_rows("a,g,a,v,e\nsolve\nab,c\n", 5).unwrap();
/// assert_eq!(corpus.len(), 2);
/// ```
pub fn parse_rows(content: &str, word_length: usize) -> Result<Corpus, (usize, WordError)> {
    let mut words = Vec::new();

    for (index, row) in content.lines().enumerate() {
        let line = index + 1;
        if row.trim().is_empty() {
            continue;
        }

        let Some(text) = row_text(row, word_length) else {
            debug!("skipping line {line}: not a {word_length}-letter row");
            continue;
        };

        let word = Word::with_length(text, word_length).map_err(|e| (line, e))?;
        words.push(word);
    }

    Ok(Corpus::new(word_length, words))
}

/// Join a row into word text if it has an accepted shape
fn row_text(row: &str, word_length: usize) -> Option<String> {
    let fields: Vec<&str> = row.split(',').map(unquote).collect();

    match fields.as_slice() {
        [whole] if whole.chars().count() == word_length => Some((*whole).to_string()),
        per_letter
            if per_letter.len() == word_length
                && per_letter.iter().all(|f| f.chars().count() == 1) =>
        {
            Some(per_letter.concat())
        }
        _ => None,
    }
}

/// Trim a field and strip one pair of surrounding double quotes
fn unquote(field: &str) -> &str {
    let field = field.trim();
    field
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .map_or(field, str::trim)
}
