//! Run command - Evaluate a solution on ad hoc input

use anyhow::{Context, Result};
use colored::Colorize;

use crate::solver;

/// Run the solution for `id` on `input` and print its answer
pub fn execute(id: u32, input: &str) -> Result<()> {
    let answer =
        solver::solve(id, input).with_context(|| format!("failed to run problem {id}"))?;

    println!("{} {}", "Input:".bold(), input.replace('\n', ", "));
    println!("{} {}", "Output:".bold(), answer.to_string().green());

    Ok(())
}
