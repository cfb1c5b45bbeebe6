//! Persistent download counter.
//!
//! One non-negative integer under the XDG state dir, updated with a plain
//! read-modify-write per completed download (single writer in practice).
//! Missing or corrupt state reads as zero rather than failing.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StatsFile {
    #[serde(default)]
    download_stats: u64,
}

/// Store for the download counter.
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    /// Default location: `~/.local/state/xgrab/stats.toml`.
    pub fn open_default() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("xgrab")?;
        Ok(Self {
            path: xdg_dirs.place_state_file("stats.toml")?,
        })
    }

    /// Store backed by an explicit path (tests, alternate profiles).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current count. Missing or unreadable state reads as 0.
    pub fn get(&self) -> u64 {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(_) => return 0,
        };
        match toml::from_str::<StatsFile>(&data) {
            Ok(stats) => stats.download_stats,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "corrupt stats file, reading as 0");
                0
            }
        }
    }

    /// Increment and persist; returns the new count.
    pub fn increment(&self) -> Result<u64> {
        let count = self.get() + 1;
        self.write(count)?;
        Ok(count)
    }

    /// Zero the counter.
    pub fn reset(&self) -> Result<()> {
        self.write(0)
    }

    /// Write an initial 0 only if no state exists yet (install hook).
    pub fn init_if_missing(&self) -> Result<()> {
        if !self.path.exists() {
            self.write(0)?;
        }
        Ok(())
    }

    fn write(&self, download_stats: u64) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml = toml::to_string_pretty(&StatsFile { download_stats })?;
        fs::write(&self.path, toml)?;
        Ok(())
    }
}
