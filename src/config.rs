use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "leetcode-solutions";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing the `NNNN_slug` problem directories.
    pub workspace_path: Option<PathBuf>,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace_path: None,
            color: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config: Config = confy::load(APP_NAME, None)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        confy::store(APP_NAME, None, self)?;
        Ok(())
    }

    pub fn get_workspace(&self) -> PathBuf {
        self.workspace_path
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    pub fn set_workspace(&mut self, path: PathBuf) {
        self.workspace_path = Some(path);
    }

    /// Apply the color preference to all `colored` output.
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let config_path = confy::get_configuration_file_path(APP_NAME, None)?;
    Ok(config_path)
}
