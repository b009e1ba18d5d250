use anyhow::{Context, Result};
use dirs_next::config_dir;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const WORKSPACE_CONFIG_FILE: &str = ".chatclip.toml";

/// Tool configuration: an ordered list of ignore substrings.
///
/// Absent configuration is not an error; it resolves to an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ToolConfig {
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl ToolConfig {
    /// Loads configuration for a project root: the workspace `.chatclip.toml`
    /// when present, otherwise the user-level config, otherwise defaults.
    pub fn load(project_root: &Path) -> Result<Self> {
        let workspace = project_root.join(WORKSPACE_CONFIG_FILE);
        if workspace.exists() {
            return Self::from_file(&workspace);
        }

        if let Some(global) = global_config_path()
            && global.exists()
        {
            return Self::from_file(&global);
        }

        debug!("No configuration found, using empty ignore set");
        Ok(Self::default())
    }

    fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

fn global_config_path() -> Option<PathBuf> {
    config_dir().map(|base| base.join("chatclip/config.toml"))
}
