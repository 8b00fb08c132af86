//! Config command - Show or update the persisted configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::{Config, get_config_path};

/// Update the given settings, then print the configuration
pub fn execute(
    mut config: Config,
    workspace: Option<PathBuf>,
    color: Option<bool>,
) -> Result<()> {
    let changed = workspace.is_some() || color.is_some();

    if let Some(path) = workspace {
        let path = path
            .canonicalize()
            .with_context(|| format!("invalid workspace path: {}", path.display()))?;
        config.set_workspace(path);
    }
    if let Some(color) = color {
        config.color = color;
    }

    if changed {
        config.save()?;
        println!("{}", "✓ Configuration saved".green());
    }

    println!("{} {}", "Config file:".bold(), get_config_path()?.display());
    println!("{} {}", "Workspace:".bold(), config.get_workspace().display());
    println!("{} {}", "Color:".bold(), config.color);

    Ok(())
}
