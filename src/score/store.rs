//! Durable score storage.
//!
//! A tiny file-backed key-value store in the spirit of mobile preferences:
//! one TOML file holding the cumulative score under a fixed key. Reads
//! come from memory; writes go through to disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur reading or writing the score file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read score file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse score file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write score file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// On-disk shape of the store. The key name is the persistence contract;
/// renaming it would orphan every existing score file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ScoreFile {
    score: i64,
}

/// Thread-safe, file-backed score store.
///
/// The current value lives behind a read-write lock so concurrent readers
/// never block each other; `set` updates memory and disk together.
#[derive(Clone)]
pub struct ScoreStore {
    inner: Arc<RwLock<i64>>,
    path: PathBuf,
}

impl ScoreStore {
    /// Default location under the platform data directory.
    ///
    /// Falls back to the current directory if data_dir is unavailable.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("flagquiz").join("score.toml")
    }

    /// Open the store at `path`, reading any persisted score.
    ///
    /// A missing file is not an error: the score starts at zero.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let score = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| StoreError::Read {
                path: path.clone(),
                source,
            })?;
            let file: ScoreFile = toml::from_str(&content).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?;
            file.score
        } else {
            0
        };

        Ok(Self {
            inner: Arc::new(RwLock::new(score)),
            path,
        })
    }

    /// Current score.
    pub fn get(&self) -> i64 {
        *self.inner.read().expect("score lock poisoned")
    }

    /// Replace the score in memory and on disk.
    pub fn set(&self, score: i64) -> Result<(), StoreError> {
        let mut guard = self.inner.write().expect("score lock poisoned");

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        let content =
            toml::to_string(&ScoreFile { score }).expect("score serialization cannot fail");
        fs::write(&self.path, content).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        *guard = score;
        Ok(())
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
