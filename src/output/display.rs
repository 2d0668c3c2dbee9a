//! Display functions for command results

use super::formatters::{constraints_summary, marks_to_emoji};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    if !result.in_corpus {
        println!(
            "{}",
            "⚠️  Target is not a corpus word and can never be guessed".yellow()
        );
    }

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nRound {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            marks_to_emoji(&step.marks)
        );

        if verbose {
            let stale = if step.fell_back {
                " (no consistent word, kept previous pool)".yellow().to_string()
            } else {
                String::new()
            };
            println!("  Candidates:  {}{stale}", step.candidates);
            println!("  Constraints: {}", constraints_summary(&step.constraints));
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} rounds!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Failed to solve in {} rounds ({} candidates left)",
                result.guesses.len(),
                result.final_pool_size
            )
            .red()
            .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut rounds: Vec<usize> = result.distribution.keys().copied().collect();
    rounds.sort_unstable();
    for round_count in rounds {
        let count = result.distribution[&round_count];
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {round_count}: {bar} {count:4} ({pct:5.1}%)");
    }
}
