//! Show command - Display problem details

use std::path::Path;

use anyhow::{Result, anyhow};
use colored::Colorize;

use crate::{commands::colored_difficulty, problem::Problem};

/// Show problem details
pub fn execute(id: u32, workspace: &Path) -> Result<()> {
    let problem = Problem::by_id(id).ok_or_else(|| anyhow!("problem not found: ID {id}"))?;

    println!("\n{}", "═".repeat(80).cyan());
    println!("{} {}. {}", "Problem".bold(), problem.id, problem.title.bold());
    println!("{}", "═".repeat(80).cyan());

    println!(
        "{} {}",
        "Difficulty:".bold(),
        colored_difficulty(problem.difficulty)
    );
    println!("{} {}", "Topics:".bold(), problem.topics.join(", "));
    println!("{} {}", "Link:".bold(), problem.url());
    println!("{}", "─".repeat(80).cyan());

    let problem_dir = workspace.join(problem.dir_name());
    if problem_dir.is_dir() {
        println!("  - Solution: {}", problem_dir.join("src/lib.rs").display());
        println!(
            "  - Test cases: {}",
            problem_dir.join("test_cases.json").display()
        );
    } else {
        println!(
            "{}",
            format!("Problem directory not found: {}", problem_dir.display()).yellow()
        );
    }

    Ok(())
}
