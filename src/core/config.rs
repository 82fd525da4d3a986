use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the location of the client settings file
pub const CONFIG_ENV: &str = "TALKA_CONFIG";

/// Session settings stored by `talka login` and read by the auth commands
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    #[serde(default)]
    pub controller: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl ClientSettings {
    /// Load settings from `path`; a missing or empty file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read client settings from {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse client settings in {:?}", path))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self)
            .with_context(|| "Failed to serialize client settings")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write client settings to {:?}", path))?;

        Ok(())
    }

    /// Remove the settings file at `path`.
    ///
    /// Returns whether a file was removed.
    pub fn clear(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(path)
            .with_context(|| format!("Failed to remove client settings at {:?}", path))?;
        Ok(true)
    }

    /// `$TALKA_CONFIG`, or `~/.talka/client.json`
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }

        let home = dirs::home_dir().with_context(|| "Could not determine home directory")?;
        Ok(home.join(".talka").join("client.json"))
    }

    /// Whether a session (controller and user) is stored
    pub fn is_logged_in(&self) -> bool {
        self.controller.is_some() && self.username.is_some()
    }
}
