//! Persistent high score storage
//!
//! Saves and loads the best score to/from a high_score.json file in the
//! save directory so it survives between sessions.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Path to the high score file
pub const HIGH_SCORE_FILE: &str = "save/high_score.json";

/// On-disk record of the best score achieved
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: u64,
}

impl HighScoreRecord {
    /// Load the record from the default path, or return 0 if absent/corrupt
    pub fn load() -> Self {
        Self::load_from(Path::new(HIGH_SCORE_FILE))
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No high score file found, starting at 0");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(record) => {
                    info!("Loaded high score from {}", path.display());
                    record
                }
                Err(e) => {
                    warn!("Failed to parse high score file: {}, starting at 0", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read high score file: {}, starting at 0", e);
                Self::default()
            }
        }
    }

    /// Save the record to the default path
    pub fn save(&self) -> Result<(), std::io::Error> {
        self.save_to(Path::new(HIGH_SCORE_FILE))
    }

    /// Save to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, json)?;
        info!("Saved high score to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("jumpgame_test_{}", name))
    }

    #[test]
    fn test_load_missing_file_defaults_to_zero() {
        let path = temp_path("missing/high_score.json");
        let record = HighScoreRecord::load_from(&path);
        assert_eq!(record.high_score, 0);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let path = temp_path("round_trip/high_score.json");
        let record = HighScoreRecord { high_score: 1234 };
        record.save_to(&path).unwrap();

        let loaded = HighScoreRecord::load_from(&path);
        assert_eq!(loaded.high_score, 1234);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_corrupt_file_defaults_to_zero() {
        let path = temp_path("corrupt/high_score.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json at all").unwrap();

        let record = HighScoreRecord::load_from(&path);
        assert_eq!(record.high_score, 0);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
