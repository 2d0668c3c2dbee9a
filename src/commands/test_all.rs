//! Test all words - whole-corpus solver evaluation
//!
//! Runs one session per corpus word, using that word as the secret, and
//! aggregates the outcomes. Sessions share the corpus read-only, so they run
//! in parallel.

use crate::commands::solve::DEFAULT_MAX_ROUNDS;
use crate::core::{Corpus, Word};
use crate::output::formatters::progress_style;
use crate::solver::{Session, SessionError, SolveOutcome};
use colored::Colorize;
use indicatif::ProgressBar;
use log::info;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Settings for a whole-corpus run
#[derive(Debug, Clone, Copy)]
pub struct TestAllConfig {
    pub limit: Option<usize>,
    pub max_rounds: usize,
    pub parallel: bool,
    pub show_progress: bool,
}

impl Default for TestAllConfig {
    fn default() -> Self {
        Self {
            limit: None,
            max_rounds: DEFAULT_MAX_ROUNDS,
            parallel: true,
            show_progress: true,
        }
    }
}

/// Result from solving a single secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTestResult {
    pub word: String,
    pub outcome: SolveOutcome,
}

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Mean rounds over every secret, solved or not
    pub average_rounds: f64,
    /// Mean size of the final candidate pool
    pub average_remaining: f64,
    /// Fraction of secrets solved, in `[0, 1]`
    pub solved_ratio: f64,
    /// Solved secrets by the round they were solved in
    pub round_distribution: HashMap<usize, usize>,
    pub unsolved_words: Vec<String>,
    pub max_rounds: usize,
    pub total_time: Duration,
}

/// Solve one secret with a fresh session
///
/// # Errors
///
/// Returns `SessionError` if the secret's length differs from the corpus'.
pub fn solve_secret(
    secret: &Word,
    corpus: &Corpus,
    max_rounds: usize,
) -> Result<WordTestResult, SessionError> {
    let outcome = Session::new(secret.clone(), corpus)?.solve(max_rounds);
    Ok(WordTestResult {
        word: secret.text().to_string(),
        outcome,
    })
}

/// Run the solver with every corpus word (or the first `limit`) as the secret
///
/// # Errors
///
/// Propagates `SessionError`; cannot happen for secrets taken from the
/// corpus itself.
pub fn run_test_all(
    corpus: &Corpus,
    config: TestAllConfig,
) -> Result<TestAllStatistics, SessionError> {
    let secrets: Vec<&Word> = corpus
        .iter()
        .take(config.limit.unwrap_or(corpus.len()))
        .collect();

    info!(
        "testing {} secrets against {} words ({})",
        secrets.len(),
        corpus.len(),
        if config.parallel { "parallel" } else { "sequential" }
    );

    let pb = if config.show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        pb.set_style(progress_style());
        pb
    } else {
        ProgressBar::hidden()
    };

    let total_start = Instant::now();

    let run = |secret: &&Word| {
        let result = solve_secret(secret, corpus, config.max_rounds);
        pb.inc(1);
        result
    };

    let results: Vec<WordTestResult> = if config.parallel {
        secrets.par_iter().map(run).collect::<Result<_, _>>()?
    } else {
        secrets.iter().map(run).collect::<Result<_, _>>()?
    };

    pb.finish_with_message("Complete!");

    Ok(summarize(&results, config.max_rounds, total_start.elapsed()))
}

/// Aggregate per-secret results into statistics
#[must_use]
pub fn summarize(
    results: &[WordTestResult],
    max_rounds: usize,
    total_time: Duration,
) -> TestAllStatistics {
    let total_words = results.len();
    let solved = results.iter().filter(|r| r.outcome.solved).count();

    let mean = |sum: usize| {
        if total_words == 0 {
            0.0
        } else {
            sum as f64 / total_words as f64
        }
    };

    let mut round_distribution: HashMap<usize, usize> = HashMap::new();
    for result in results.iter().filter(|r| r.outcome.solved) {
        *round_distribution.entry(result.outcome.rounds).or_insert(0) += 1;
    }

    TestAllStatistics {
        total_words,
        solved,
        failed: total_words - solved,
        average_rounds: mean(results.iter().map(|r| r.outcome.rounds).sum()),
        average_remaining: mean(results.iter().map(|r| r.outcome.pool_size).sum()),
        solved_ratio: mean(solved),
        round_distribution,
        unsolved_words: results
            .iter()
            .filter(|r| !r.outcome.solved)
            .map(|r| r.word.clone())
            .collect(),
        max_rounds,
        total_time,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Words tested:    {}", stats.total_words);
    println!(
        "  Average Tries:   {}",
        format!("{:.2}", stats.average_rounds).bright_yellow().bold()
    );
    println!("  Average Words:   {:.2}", stats.average_remaining);
    let percent = format!("{:.2}%", stats.solved_ratio * 100.0);
    println!(
        "  Percent Solved:  {}",
        if stats.failed == 0 {
            percent.green()
        } else {
            percent.yellow()
        }
    );
    println!("  Total time:      {:.2}s", stats.total_time.as_secs_f64());

    println!("\n📈 {}", "Round Distribution".bright_cyan().bold());
    let max_count = stats.round_distribution.values().copied().max().unwrap_or(1);
    for rounds in 1..=stats.max_rounds {
        let count = stats.round_distribution.get(&rounds).copied().unwrap_or(0);
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {rounds} rounds: {bar} {count:5}");
    }

    if !stats.unsolved_words.is_empty() {
        println!(
            "\n😰 {} ({})",
            "Unsolved Words".yellow().bold(),
            stats.unsolved_words.len()
        );
        println!("  {}", stats.unsolved_words.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::sample_corpus;

    fn quiet(parallel: bool) -> TestAllConfig {
        TestAllConfig {
            parallel,
            show_progress: false,
            ..TestAllConfig::default()
        }
    }

    fn result(word: &str, rounds: usize, pool_size: usize, solved: bool) -> WordTestResult {
        WordTestResult {
            word: word.to_string(),
            outcome: SolveOutcome {
                rounds,
                pool_size,
                solved,
            },
        }
    }

    #[test]
    fn solves_every_sample_word() {
        let corpus = sample_corpus();
        let stats = run_test_all(&corpus, quiet(true)).unwrap();

        assert_eq!(stats.total_words, 9);
        assert_eq!(stats.solved, 9);
        assert!(stats.unsolved_words.is_empty());
        assert!((stats.solved_ratio - 1.0).abs() < f64::EPSILON);
        assert!(stats.average_rounds >= 1.0);
    }

    #[test]
    fn parallel_matches_sequential() {
        let corpus = sample_corpus();
        let parallel = run_test_all(&corpus, quiet(true)).unwrap();
        let sequential = run_test_all(&corpus, quiet(false)).unwrap();

        assert_eq!(parallel.solved, sequential.solved);
        assert_eq!(parallel.round_distribution, sequential.round_distribution);
        assert!((parallel.average_rounds - sequential.average_rounds).abs() < f64::EPSILON);
        assert!(
            (parallel.average_remaining - sequential.average_remaining).abs() < f64::EPSILON
        );
    }

    #[test]
    fn limit_restricts_secrets() {
        let corpus = sample_corpus();
        let config = TestAllConfig {
            limit: Some(3),
            ..quiet(true)
        };
        let stats = run_test_all(&corpus, config).unwrap();
        assert_eq!(stats.total_words, 3);
    }

    #[test]
    fn single_round_budget_solves_only_first_guess() {
        let corpus = sample_corpus();
        let config = TestAllConfig {
            max_rounds: 1,
            ..quiet(true)
        };
        let stats = run_test_all(&corpus, config).unwrap();

        // every session opens with "agave"
        assert_eq!(stats.solved, 1);
        assert_eq!(stats.round_distribution.get(&1), Some(&1));
        assert_eq!(stats.unsolved_words.len(), 8);
        assert!(!stats.unsolved_words.contains(&"agave".to_string()));
    }

    #[test]
    fn solve_secret_reports_outcome() {
        let corpus = sample_corpus();
        let secret = Word::new("solve").unwrap();
        let result = solve_secret(&secret, &corpus, 6).unwrap();

        assert_eq!(result.word, "solve");
        assert_eq!(
            result.outcome,
            SolveOutcome {
                rounds: 2,
                pool_size: 1,
                solved: true
            }
        );
    }

    #[test]
    fn summarize_averages() {
        let results = vec![
            result("agave", 1, 9, true),
            result("tests", 3, 1, true),
            result("mound", 6, 8, false),
        ];
        let stats = summarize(&results, 6, Duration::ZERO);

        assert_eq!(stats.total_words, 3);
        assert_eq!(stats.solved, 2);
        assert_eq!(stats.failed, 1);
        assert!((stats.average_rounds - 10.0 / 3.0).abs() < 1e-9);
        assert!((stats.average_remaining - 6.0).abs() < 1e-9);
        assert!((stats.solved_ratio - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.round_distribution.get(&1), Some(&1));
        assert_eq!(stats.round_distribution.get(&3), Some(&1));
        assert_eq!(stats.round_distribution.get(&6), None);
        assert_eq!(stats.unsolved_words, vec!["mound".to_string()]);
    }

    #[test]
    fn summarize_empty() {
        let stats = summarize(&[], 6, Duration::ZERO);
        assert_eq!(stats.total_words, 0);
        assert!(stats.average_rounds.abs() < f64::EPSILON);
        assert!(stats.solved_ratio.abs() < f64::EPSILON);
    }
}
