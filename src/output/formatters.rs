//! Formatting utilities for terminal output

use crate::core::ConstraintSet;
use crate::solver::Mark;
use indicatif::ProgressStyle;

/// Format per-position marks as an emoji string
#[must_use]
pub fn marks_to_emoji(marks: &[Mark]) -> String {
    marks
        .iter()
        .map(|mark| match mark {
            Mark::Absent => '⬜',
            Mark::Present => '🟨',
            Mark::Correct => '🟩',
        })
        .collect()
}

/// Summarize a constraint snapshot on one line
///
/// Direct hits read `letter@position`, hits `letter!positions`, misses are
/// listed after `-`.
#[must_use]
pub fn constraints_summary(constraints: &ConstraintSet) -> String {
    let direct: Vec<String> = constraints
        .sorted_direct_hits()
        .into_iter()
        .map(|(letter, position)| format!("{}@{position}", char::from(letter)))
        .collect();

    let hits: Vec<String> = constraints
        .sorted_hits()
        .into_iter()
        .map(|(letter, positions)| {
            let positions: Vec<String> = positions.iter().map(ToString::to_string).collect();
            format!("{}!{}", char::from(letter), positions.join(","))
        })
        .collect();

    let misses = String::from_utf8_lossy(&constraints.sorted_misses()).into_owned();

    format!(
        "direct [{}] hits [{}] misses [{}]",
        direct.join(" "),
        hits.join(" "),
        misses
    )
}

/// Progress bar style shared by long-running commands
#[must_use]
pub fn progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░"))
}
