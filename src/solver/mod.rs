//! Solving engine
//!
//! Candidate filtering, the positional-frequency heuristic, feedback
//! evaluation and the round-by-round session that ties them together.

mod engine;
pub mod feedback;
pub mod filter;
pub mod heuristic;
pub mod strategy;

pub use engine::{Session, SessionError, SessionState, SolveOutcome, Turn};
pub use feedback::{Evaluation, Mark, evaluate};
pub use filter::{Narrowing, filter, narrow};
pub use strategy::{PositionalStrategy, Strategy};
