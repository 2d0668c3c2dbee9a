//! Positional Wordle Solver
//!
//! Solves fixed-length word puzzles by accumulating feedback constraints,
//! narrowing the candidate pool, and guessing the candidate that best matches
//! the most common letter at each position.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_positional::core::Word;
//! use wordle_positional::solver::Session;
//! use wordle_positional::wordlists::sample_corpus;
//!
//! let corpus = sample_corpus();
//! let secret = Word::new("tests").unwrap();
//!
//! let outcome = Session::new(secret, &corpus).unwrap().solve(6);
//! assert!(outcome.solved);
//! println!("solved in {} rounds", outcome.rounds);
//! ```

// Core domain types
pub mod core;

// Solving engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
