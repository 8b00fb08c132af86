//! Pick command - Select a random problem to revisit

use anyhow::Result;
use colored::Colorize;
use rand::seq::IndexedRandom;

use crate::{
    commands::{parse_difficulty, print_problem_summary},
    problem::Problem,
};

/// Pick a random problem, optionally restricted to one difficulty
pub fn execute(difficulty: Option<String>) -> Result<()> {
    let filter = parse_difficulty(difficulty.as_deref())?;

    let candidates: Vec<&Problem> = Problem::all()
        .iter()
        .filter(|p| filter.map_or(true, |level| p.difficulty == level))
        .collect();

    match candidates.choose(&mut rand::rng()) {
        Some(problem) => {
            print_problem_summary(problem);
            println!(
                "\n{}",
                format!("Run its tests with: leetcode test {}", problem.id).cyan()
            );
        }
        None => println!("{}", "No problem found matching the criteria.".red()),
    }

    Ok(())
}
