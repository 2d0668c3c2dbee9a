//! Benchmark command
//!
//! Times the solver over a random sample of secrets.

use crate::commands::test_all::solve_secret;
use crate::core::{Corpus, Word};
use crate::solver::SessionError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct corpus positions at random
///
/// The same seed always yields the same sample.
#[must_use]
pub fn sample_secrets(corpus: &Corpus, count: usize, seed: u64) -> Vec<&Word> {
    let mut rng = StdRng::seed_from_u64(seed);
    corpus
        .words()
        .choose_multiple(&mut rng, count)
        .collect()
}

/// Run benchmark on a set of secrets
///
/// # Errors
///
/// Returns `SessionError` if a secret's length differs from the corpus'.
pub fn run_benchmark(
    corpus: &Corpus,
    secrets: &[&Word],
    max_rounds: usize,
) -> Result<BenchmarkResult, SessionError> {
    let start = Instant::now();
    let mut solved = 0;
    let mut total_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_seen = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for &secret in secrets {
        let outcome = solve_secret(secret, corpus, max_rounds)?.outcome;

        if outcome.solved {
            solved += 1;
        }
        total_rounds += outcome.rounds;
        min_rounds = min_rounds.min(outcome.rounds);
        max_seen = max_seen.max(outcome.rounds);
        *distribution.entry(outcome.rounds).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_words = secrets.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        total_rounds,
        average_rounds: if total_words == 0 {
            0.0
        } else {
            total_rounds as f64 / total_words as f64
        },
        min_rounds: if total_words == 0 { 0 } else { min_rounds },
        max_rounds: max_seen,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::sample_corpus;

    #[test]
    fn benchmark_runs() {
        let corpus = sample_corpus();
        let secrets: Vec<&Word> = corpus.iter().collect();
        let result = run_benchmark(&corpus, &secrets, 6).unwrap();

        assert_eq!(result.total_words, 9);
        assert_eq!(result.solved, 9);
        assert_eq!(result.min_rounds, 1);
        assert_eq!(result.max_rounds, 3);
        assert_eq!(result.total_rounds, 19);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let corpus = sample_corpus();
        let secrets: Vec<&Word> = corpus.iter().collect();
        let result = run_benchmark(&corpus, &secrets, 6).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_words);
        assert_eq!(result.distribution.get(&2), Some(&6));
    }

    #[test]
    fn benchmark_empty_secret_list() {
        let corpus = sample_corpus();
        let result = run_benchmark(&corpus, &[], 6).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_rounds, 0);
        assert_eq!(result.min_rounds, 0);
    }

    #[test]
    fn sampling_is_reproducible() {
        let corpus = sample_corpus();
        let first = sample_secrets(&corpus, 4, 7);
        let second = sample_secrets(&corpus, 4, 7);

        assert_eq!(first.len(), 4);
        assert_eq!(first, second);
    }

    #[test]
    fn sampling_caps_at_corpus_size() {
        let corpus = sample_corpus();
        assert_eq!(sample_secrets(&corpus, 50, 1).len(), corpus.len());
    }
}
