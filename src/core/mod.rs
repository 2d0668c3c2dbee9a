//! Core domain types
//!
//! Words, the corpus they come from, and the constraint snapshots built from
//! feedback. Everything here is plain data with no solving logic.

mod constraints;
mod corpus;
mod word;

pub use constraints::ConstraintSet;
pub use corpus::Corpus;
pub use word::{DEFAULT_WORD_LENGTH, Word, WordError};
