//! Command modules for the leetcode binary
//!
//! Each submodule handles a specific CLI subcommand.

pub mod config;
pub mod list;
pub mod pick;
pub mod run;
pub mod show;

use anyhow::{Result, bail};
use colored::{ColoredString, Colorize};

use crate::problem::{DifficultyLevel, Problem};

/// Parse an optional `--difficulty` filter
pub fn parse_difficulty(difficulty: Option<&str>) -> Result<Option<DifficultyLevel>> {
    match difficulty {
        Some(d) => match DifficultyLevel::from_str(d) {
            Some(level) => Ok(Some(level)),
            None => bail!("unknown difficulty: {d} (expected easy, medium or hard)"),
        },
        None => Ok(None),
    }
}

/// Difficulty label colored the way LeetCode shows it
pub fn colored_difficulty(difficulty: DifficultyLevel) -> ColoredString {
    let label = difficulty.to_string();
    match difficulty {
        DifficultyLevel::Easy => label.green(),
        DifficultyLevel::Medium => label.yellow(),
        DifficultyLevel::Hard => label.red(),
    }
}

/// Print a summary of a problem
pub fn print_problem_summary(problem: &Problem) {
    println!("\n{}", "═".repeat(80).cyan());
    println!(
        "{} {}. {}",
        "✓ Found Problem".bold().green(),
        problem.id,
        problem.title.bold()
    );
    println!("{}", "═".repeat(80).cyan());

    println!(
        "{} {}",
        "Difficulty:".bold(),
        colored_difficulty(problem.difficulty)
    );
    println!("{} {}", "Topics:".bold(), problem.topics.join(", "));
    println!("{} {}", "Link:".bold(), problem.url());
}
