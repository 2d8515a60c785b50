//! Best-score persistence
//!
//! A single integer that outlives sessions. Loaded once at startup and
//! written only when a session ends above it. Storage failures degrade to
//! an in-memory score rather than interrupting play.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// On-disk format, a versioned envelope around one integer
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct BestScoreFile {
    best: u32,
}

/// The persisted best score across all sessions
#[derive(Debug)]
pub struct BestScore {
    value: u32,
    /// None means in-memory only (no writable config dir)
    path: Option<PathBuf>,
}

impl BestScore {
    const FILE_NAME: &'static str = "best_score.json";

    /// Load the best score from the platform config directory, creating the
    /// directory on first run. Falls back to an in-memory score if no
    /// config directory is available.
    pub fn open() -> Self {
        let Some(project_dirs) = ProjectDirs::from("", "", "flapdash") else {
            log::warn!("No config directory available, best score will not persist");
            return Self::in_memory();
        };
        let dir = project_dirs.config_dir().to_path_buf();
        if let Err(e) = fs::create_dir_all(&dir) {
            log::warn!("Could not create {}: {e}", dir.display());
            return Self::in_memory();
        }
        Self::at_path(dir.join(Self::FILE_NAME))
    }

    /// Load from an explicit file path
    pub fn at_path(path: PathBuf) -> Self {
        let value = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<BestScoreFile>(&json) {
                Ok(file) => file.best,
                Err(e) => {
                    log::warn!("Ignoring corrupt best score file: {e}");
                    0
                }
            },
            // Missing file is the normal first run
            Err(_) => 0,
        };
        Self {
            value,
            path: Some(path),
        }
    }

    /// A store that never touches disk
    pub fn in_memory() -> Self {
        Self {
            value: 0,
            path: None,
        }
    }

    /// Current best score (0 if none recorded)
    pub fn get(&self) -> u32 {
        self.value
    }

    /// Record a finished session's score. Persists and returns true only
    /// when it beats the stored best.
    pub fn submit(&mut self, score: u32) -> bool {
        if score <= self.value {
            return false;
        }
        self.value = score;
        self.save();
        true
    }

    fn save(&self) {
        let Some(path) = &self.path else { return };
        let file = BestScoreFile { best: self.value };
        match serde_json::to_string(&file) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    log::warn!("Could not write best score: {e}");
                } else {
                    log::info!("Best score saved: {}", self.value);
                }
            }
            Err(e) => log::warn!("Could not encode best score: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("flapdash-test-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn test_defaults_to_zero() {
        let path = scratch_path("default");
        let _ = fs::remove_file(&path);
        let store = BestScore::at_path(path.clone());
        assert_eq!(store.get(), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_submit_persists_new_high() {
        let path = scratch_path("high");
        let _ = fs::remove_file(&path);

        let mut store = BestScore::at_path(path.clone());
        assert!(store.submit(5));
        assert_eq!(store.get(), 5);

        // A fresh store reads the persisted value back
        let reloaded = BestScore::at_path(path.clone());
        assert_eq!(reloaded.get(), 5);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_submit_ignores_lower_and_equal() {
        let path = scratch_path("lower");
        let _ = fs::remove_file(&path);

        let mut store = BestScore::at_path(path.clone());
        assert!(store.submit(9));
        assert!(!store.submit(5));
        assert!(!store.submit(9));
        assert_eq!(store.get(), 9);

        let reloaded = BestScore::at_path(path.clone());
        assert_eq!(reloaded.get(), 9);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_reads_as_zero() {
        let path = scratch_path("corrupt");
        fs::write(&path, "not json").unwrap();
        let store = BestScore::at_path(path.clone());
        assert_eq!(store.get(), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_in_memory_store() {
        let mut store = BestScore::in_memory();
        assert_eq!(store.get(), 0);
        assert!(store.submit(3));
        assert_eq!(store.get(), 3);
    }
}
