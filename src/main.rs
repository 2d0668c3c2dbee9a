//! Positional Wordle Solver - CLI
//!
//! Solves one secret word verbosely, every corpus word in turn, or a random
//! benchmark sample.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use env_logger::Env;
use wordle_positional::{
    commands::{
        DEFAULT_MAX_ROUNDS, SolveConfig, TestAllConfig, print_test_all_statistics, run_benchmark,
        run_test_all, sample_secrets, solve_word,
    },
    core::{Corpus, DEFAULT_WORD_LENGTH},
    output::{print_benchmark_result, print_solve_result},
    wordlists::{load_from_file, sample_corpus_with_length},
};

#[derive(Parser)]
#[command(
    name = "wordle_positional",
    about = "Wordle solver narrowing candidates by positional letter frequency",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Corpus: path to a delimited word file, or 'sample' for the built-in nine words
    #[arg(short, long, global = true, default_value = "5_letters.csv")]
    corpus: String,

    /// Maximum guesses per secret
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ROUNDS)]
    tries: usize,

    /// Word length; rows of any other length are skipped
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific secret word
    Solve {
        /// The secret word to solve
        word: String,

        /// Show candidate counts and constraints for every round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Solve every corpus word and print aggregate statistics (default)
    TestAll {
        /// Limit number of words to test
        #[arg(long)]
        limit: Option<usize>,

        /// Run sessions one after another instead of in parallel
        #[arg(long)]
        sequential: bool,
    },

    /// Benchmark solver speed on a random sample of secrets
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for the random sample
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

/// Load the corpus selected by the --corpus flag
fn load_corpus(corpus: &str, length: usize) -> Result<Corpus> {
    if corpus == "sample" {
        return sample_corpus_with_length(length).ok_or_else(|| {
            anyhow!("the sample corpus only has {DEFAULT_WORD_LENGTH}-letter words, not {length}")
        });
    }

    load_from_file(corpus, length).with_context(|| format!("could not load corpus '{corpus}'"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let corpus = load_corpus(&cli.corpus, cli.length)?;
    log::info!("loaded {} words from {}", corpus.len(), cli.corpus);

    let command = cli.command.unwrap_or(Commands::TestAll {
        limit: None,
        sequential: false,
    });

    match command {
        Commands::Solve { word, verbose } => {
            let config = SolveConfig::new(word).with_max_rounds(cli.tries);
            let result = solve_word(config, &corpus)?;
            print_solve_result(&result, verbose);
        }
        Commands::TestAll { limit, sequential } => {
            println!("\n{}", "═".repeat(70));
            println!(" Positional Solver Test ");
            println!("{}", "═".repeat(70));
            println!("\nTesting against {} corpus words", corpus.len());
            println!("Round budget: {}\n", cli.tries);

            let config = TestAllConfig {
                limit,
                max_rounds: cli.tries,
                parallel: !sequential,
                show_progress: true,
            };
            let stats = run_test_all(&corpus, config)?;
            print_test_all_statistics(&stats);
        }
        Commands::Benchmark { count, seed } => {
            println!("Running benchmark on {count} random words (seed {seed})...");
            let secrets = sample_secrets(&corpus, count, seed);
            let result = run_benchmark(&corpus, &secrets, cli.tries)?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
