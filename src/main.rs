use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use log::debug;

mod commands;
mod config;
mod problem;
mod solver;
mod test_runner;

use config::Config;

#[derive(Parser)]
#[command(name = "leetcode")]
#[command(about = "Run and test the LeetCode solutions in this workspace")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List solved problems
    List {
        /// Filter by difficulty (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<String>,
    },
    /// Show problem details
    Show {
        /// Problem ID
        id: u32,
    },
    /// Pick a random problem
    Pick {
        /// Difficulty filter (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<String>,
    },
    /// Run a solution on custom input
    Run {
        /// Problem ID
        id: u32,
        /// One JSON value per argument, separated by newlines or `;`
        /// (e.g. "[2,7,11,15]; 9")
        #[arg(short, long)]
        input: String,
    },
    /// Run the test cases of one problem, or of all problems
    Test {
        /// Problem ID (all problems if not specified)
        id: Option<u32>,
        /// Test case file
        #[arg(short, long)]
        test_file: Option<PathBuf>,
    },
    /// Show or update the configuration
    Config {
        /// Directory containing the problem directories
        #[arg(short, long)]
        workspace: Option<PathBuf>,
        /// Enable or disable colored output
        #[arg(long, action = ArgAction::Set)]
        color: Option<bool>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = Config::load()?;
    config.apply_color();
    let workspace = config.get_workspace();
    debug!("workspace: {}", workspace.display());

    match cli.command {
        Commands::List { difficulty } => commands::list::execute(difficulty)?,
        Commands::Show { id } => commands::show::execute(id, &workspace)?,
        Commands::Pick { difficulty } => commands::pick::execute(difficulty)?,
        Commands::Run { id, input } => commands::run::execute(id, &input)?,
        Commands::Test { id, test_file } => commands::test::execute(id, test_file, &workspace)?,
        Commands::Config { workspace, color } => {
            commands::config::execute(config, workspace, color)?;
        }
    }

    Ok(())
}
