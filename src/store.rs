//! Persistence store - high score and daily-challenge completion
//!
//! One JSON document under the user config dir holds both logical keys. Reads
//! are permissive: a missing or unparseable file is an empty default, never an
//! error surfaced to gameplay.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const PROGRESS_FILE_NAME: &str = "progress.json";

/// Persisted player progress
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    #[serde(default)]
    pub high_score: u32,
    /// Day-of-month -> completed
    #[serde(default)]
    pub daily: BTreeMap<u8, bool>,
}

impl Progress {
    pub fn is_day_done(&self, day: u8) -> bool {
        self.daily.get(&day).copied().unwrap_or(false)
    }

    pub fn toggle_day(&mut self, day: u8) {
        let done = self.is_day_done(day);
        self.daily.insert(day, !done);
    }

    pub fn clear_daily(&mut self) {
        self.daily.clear();
    }

    /// Record a score; returns true when it beat the stored high score
    pub fn record_score(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }
}

/// File-backed store for [`Progress`]
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    /// Store at the default location:
    /// `$XDG_CONFIG_HOME/tenpair/progress.json` (or `~/.config/...`).
    pub fn open_default() -> Result<Self> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
            .context("no config directory (XDG_CONFIG_HOME or HOME)")?;
        Ok(Self::at(base.join("tenpair").join(PROGRESS_FILE_NAME)))
    }

    /// Store at an explicit file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load persisted progress; absent or corrupt data yields the default
    pub fn load(&self) -> Progress {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Write progress wholesale
    pub fn save(&self, progress: &Progress) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(progress)?;
        fs::write(&self.path, raw).with_context(|| format!("writing {}", self.path.display()))
    }

    /// Delete the persisted file (the clear operation)
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("removing {}", self.path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_day_flips_flag() {
        let mut progress = Progress::default();
        assert!(!progress.is_day_done(5));
        progress.toggle_day(5);
        assert!(progress.is_day_done(5));
        progress.toggle_day(5);
        assert!(!progress.is_day_done(5));
    }

    #[test]
    fn test_record_score_only_raises() {
        let mut progress = Progress::default();
        assert!(progress.record_score(100));
        assert!(!progress.record_score(50));
        assert!(!progress.record_score(100));
        assert_eq!(progress.high_score, 100);
        assert!(progress.record_score(101));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let store = ProgressStore::at("/nonexistent/definitely/progress.json");
        assert_eq!(store.load(), Progress::default());
    }
}
