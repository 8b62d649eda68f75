use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tok_core::EncodingName;

/// Simple configuration for tiktoken
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Encoding used when neither `--model` nor `--encoding` is given
    #[serde(default = "default_encoding")]
    pub encoding: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encoding: default_encoding(),
        }
    }
}

fn default_encoding() -> String {
    EncodingName::default().to_string()
}

impl Config {
    /// Load config from default location, falling back to defaults if not found
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))?;
        config.encoding.parse::<EncodingName>()?;
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "tiktoken", "tiktoken") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.tiktoken/config.toml")
        }
    }
}
