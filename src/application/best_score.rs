//! High-water mark of the score across sessions.
//!
//! The engine knows nothing about this; the front end feeds it every score it
//! observes and the tracker persists any new record through a [`ScoreStore`].

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use log::warn;
use thiserror::Error;

/// Identifier the best score is stored under
pub const BEST_SCORE_KEY: &str = "2048:bestScore";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("score store is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key/value persistence for integer scores
pub trait ScoreStore: Send {
    fn load(&self, key: &str) -> Result<Option<u64>, StoreError>;
    fn save(&mut self, key: &str, value: u64) -> Result<(), StoreError>;
}

/// Store that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, u64>,
}

impl ScoreStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<u64>, StoreError> {
        Ok(self.values.get(key).copied())
    }

    fn save(&mut self, key: &str, value: u64) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value);
        Ok(())
    }
}

/// JSON object on disk mapping keys to scores.
/// A missing file reads as an empty store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, u64>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<u64>, StoreError> {
        Ok(self.read_all()?.get(key).copied())
    }

    fn save(&mut self, key: &str, value: u64) -> Result<(), StoreError> {
        let mut all = self.read_all()?;
        all.insert(key.to_owned(), value);
        std::fs::write(&self.path, serde_json::to_string_pretty(&all)?)?;
        Ok(())
    }
}

/// Tracks the best score and writes it back whenever it grows
pub struct BestScore {
    best: u64,
    store: Box<dyn ScoreStore>,
}

impl BestScore {
    /// Read the stored record; an unreadable store starts from zero
    pub fn new(store: Box<dyn ScoreStore>) -> Self {
        let best = match store.load(BEST_SCORE_KEY) {
            Ok(value) => value.unwrap_or(0),
            Err(err) => {
                warn!("could not read best score: {err}");
                0
            }
        };
        Self { best, store }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Record `score` if it beats the current best.
    /// Returns true when a new record was set.
    pub fn observe(&mut self, score: u64) -> bool {
        if score <= self.best {
            return false;
        }

        self.best = score;
        if let Err(err) = self.store.save(BEST_SCORE_KEY, score) {
            warn!("could not persist best score {score}: {err}");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl ScoreStore for FailingStore {
        fn load(&self, _key: &str) -> Result<Option<u64>, StoreError> {
            Err(std::io::Error::other("unavailable").into())
        }

        fn save(&mut self, _key: &str, _value: u64) -> Result<(), StoreError> {
            Err(std::io::Error::other("unavailable").into())
        }
    }

    #[test]
    fn test_observe_keeps_high_water_mark() {
        let mut best = BestScore::new(Box::new(MemoryStore::default()));
        assert!(best.observe(12));
        assert!(!best.observe(8));
        assert!(!best.observe(12));
        assert!(best.observe(20));
        assert_eq!(best.best(), 20);
    }

    #[test]
    fn test_store_failures_do_not_break_tracking() {
        let mut best = BestScore::new(Box::new(FailingStore));
        assert_eq!(best.best(), 0);
        assert!(best.observe(4));
        assert_eq!(best.best(), 4);
    }

    #[test]
    fn test_json_file_store_round_trip() {
        let path = std::env::temp_dir().join(format!("tile_merge_best_{}.json", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.load(BEST_SCORE_KEY).unwrap(), None);
        store.save(BEST_SCORE_KEY, 256).unwrap();

        let reopened = BestScore::new(Box::new(JsonFileStore::new(&path)));
        assert_eq!(reopened.best(), 256);

        std::fs::remove_file(&path).unwrap();
    }
}
