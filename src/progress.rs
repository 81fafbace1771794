//! Per-game progress persistence
//!
//! Best scores and play counts live in a small TOML file in the platform
//! data directory, keyed by game identifier. The frontend treats this as a
//! plain get/set store; nothing here is shared between games beyond the
//! file itself.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameProgress {
    pub best_score: u32,
    pub plays: u32,
}

/// Progress store for the mini-games.
#[derive(Debug, Default)]
pub struct ProgressStore {
    path: Option<PathBuf>,
    entries: BTreeMap<String, GameProgress>,
}

impl ProgressStore {
    /// Load the store from the default data directory. A missing file is an
    /// empty store.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path())
    }

    /// Load the store from an explicit file path.
    pub fn with_path(path: PathBuf) -> Result<Self> {
        Self::load_from(Some(path))
    }

    fn load_from(path: Option<PathBuf>) -> Result<Self> {
        let mut store = ProgressStore {
            path,
            entries: BTreeMap::new(),
        };
        if let Some(file) = &store.path {
            if file.exists() {
                let content = fs::read_to_string(file)?;
                store.entries = toml::from_str(&content)?;
            }
        }
        Ok(store)
    }

    /// Save the store, creating the data directory if needed.
    pub fn save(&self) -> Result<()> {
        if let Some(file) = &self.path {
            if let Some(parent) = file.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&self.entries)?;
            fs::write(file, content)?;
        }
        Ok(())
    }

    /// Progress for a game, if it has been played before.
    pub fn get(&self, game_id: &str) -> Option<&GameProgress> {
        self.entries.get(game_id)
    }

    /// Record a finished play: bumps the play count and keeps the best score.
    pub fn record(&mut self, game_id: &str, score: u32) -> &GameProgress {
        let entry = self.entries.entry(game_id.to_string()).or_default();
        entry.plays += 1;
        entry.best_score = entry.best_score.max(score);
        entry
    }

    /// Path of the progress file in the platform data directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("durus").join("progress.toml"))
    }
}
