use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

fn default_log_level() -> String {
    "info".to_string()
}

/// Settings consumed by the scorer test suites.
///
/// An explicit value passed to whoever needs it, not a process-wide
/// singleton; tests get their own copy under their own path.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    pub ceramic_cache_api_key: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub registry_api_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ceramic_cache_api_key: None,
            log_level: default_log_level(),
            registry_api_url: None,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file, falling back to defaults when the
    /// file does not exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path).context("Failed to read settings file")?;
            let settings: Settings =
                serde_json::from_str(&contents).context("Failed to parse settings file")?;
            Ok(settings)
        } else {
            warn!("Settings file not found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let dir = path.parent().context("Failed to get settings directory")?;
        fs::create_dir_all(dir).context("Failed to create settings directory")?;

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, contents).context("Failed to write settings file")?;

        info!("Settings saved to: {:?}", path);
        Ok(())
    }

    /// Removes the settings file from the system
    pub fn clear(path: &Path) -> Result<()> {
        if path.exists() {
            fs::remove_file(path).context("Failed to delete settings file")?;
            info!("Deleted settings file at {:?}", path);
        } else {
            warn!("No settings file found at {:?}", path);
        }
        Ok(())
    }

    /// Default location outside of test sessions
    pub fn default_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Failed to get config directory")?;
        Ok(config_dir.join("scorer").join("settings.json"))
    }
}
