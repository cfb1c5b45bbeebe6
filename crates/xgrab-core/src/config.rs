//! User settings.
//!
//! Loaded from `~/.config/xgrab/config.toml`; a default file is written on
//! first run (the install hook for the settings key).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Settings persisted alongside the download counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Download immediately on hover instead of waiting for the button.
    pub auto_download: bool,
    /// Subfolder under the user's download directory.
    pub save_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_download: false,
            save_path: "X-Twitter-Downloads/".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("xgrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load settings from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<Settings> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<Settings> {
    if !path.exists() {
        let defaults = Settings::default();
        let toml = toml::to_string_pretty(&defaults)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default settings at {}", path.display());
        return Ok(defaults);
    }

    let data = fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&data)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_values() {
        let settings = Settings::default();
        assert!(!settings.auto_download);
        assert_eq!(settings.save_path, "X-Twitter-Downloads/");
    }

    #[test]
    fn first_run_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let settings = load_or_init_at(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
        // Second load reads the file it just wrote.
        assert_eq!(load_or_init_at(&path).unwrap(), settings);
    }

    #[test]
    fn custom_settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "auto_download = true\nsave_path = \"media/x/\"\n",
        )
        .unwrap();
        let settings = load_or_init_at(&path).unwrap();
        assert!(settings.auto_download);
        assert_eq!(settings.save_path, "media/x/");
    }
}
