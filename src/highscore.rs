//! High-score persistence.
//!
//! One number in a plain text file, read at startup and written back at
//! session boundaries. A missing or corrupt file is treated as zero so a
//! first run never errors out.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const HIGH_SCORE_FILE: &str = "highscore.txt";

#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new(HIGH_SCORE_FILE)
    }
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the stored high score, defaulting to zero when the file is
    /// missing or unparseable.
    pub fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Persist the high score.
    pub fn save(&self, score: u32) -> Result<()> {
        fs::write(&self.path, format!("{score}\n"))
            .with_context(|| format!("writing high score to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_defaults_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path().join(HIGH_SCORE_FILE));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path().join(HIGH_SCORE_FILE));
        store.save(4096).unwrap();
        assert_eq!(store.load(), 4096);
    }

    #[test]
    fn test_corrupt_file_defaults_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(HIGH_SCORE_FILE);
        fs::write(&path, "not a number").unwrap();
        assert_eq!(HighScoreStore::new(path).load(), 0);
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path().join(HIGH_SCORE_FILE));
        store.save(100).unwrap();
        store.save(250).unwrap();
        assert_eq!(store.load(), 250);
    }
}
