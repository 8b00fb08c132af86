//! List command - List the problems solved in this workspace

use anyhow::Result;
use colored::Colorize;

use crate::{
    commands::{colored_difficulty, parse_difficulty},
    problem::Problem,
};

/// List all problems, optionally filtered by difficulty
pub fn execute(difficulty: Option<String>) -> Result<()> {
    let filter = parse_difficulty(difficulty.as_deref())?;

    println!(
        "\n{:<6} {:<50} {:<10}",
        "ID".bold(),
        "Title".bold(),
        "Difficulty".bold()
    );
    println!("{}", "-".repeat(68));

    for problem in Problem::all()
        .iter()
        .filter(|p| filter.map_or(true, |level| p.difficulty == level))
    {
        println!(
            "{:<6} {:<50} {:<10}",
            problem.id,
            problem.title.chars().take(48).collect::<String>(),
            colored_difficulty(problem.difficulty)
        );
    }

    Ok(())
}
