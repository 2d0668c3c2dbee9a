//! Command implementations

pub mod benchmark;
pub mod solve;
pub mod test_all;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_secrets};
pub use solve::{DEFAULT_MAX_ROUNDS, SolveConfig, SolveError, SolveResult, solve_word};
pub use test_all::{
    TestAllConfig, TestAllStatistics, print_test_all_statistics, run_test_all, solve_secret,
};
