//! Configuration file support

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default output format when --output is not given
    pub default_output: Option<String>,

    /// Base directory for relative manifest and audio paths
    pub corpus_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_output: Some("text".to_string()),
            corpus_root: None,
        }
    }
}

impl Config {
    /// Resolve a user-supplied path against `corpus_root` when it is relative
    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match (&self.corpus_root, path.is_relative()) {
            (Some(root), true) => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// Load configuration from file or defaults
pub fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config_path = if let Some(p) = path {
        p.clone()
    } else {
        // Try default locations
        if let Some(home) = dirs::home_dir() {
            let dot_config = home.join(".corpus-cli").join("config.toml");
            if dot_config.exists() {
                dot_config
            } else {
                let xdg_config = home.join(".config").join("corpus-cli").join("config.toml");
                if xdg_config.exists() {
                    xdg_config
                } else {
                    // Return default config if no file found
                    return Ok(Config::default());
                }
            }
        } else {
            return Ok(Config::default());
        }
    };

    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    } else {
        Ok(Config::default())
    }
}

/// Save configuration to file
#[allow(dead_code)]
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config)?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, contents)?;
    Ok(())
}
