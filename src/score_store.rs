//! High score persistence: one plain-text integer in a file.

use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreStoreError {
    #[error("high score file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("high score file is corrupt: {0}")]
    Parse(#[from] ParseIntError),
}

pub trait ScoreStore {
    /// Reads the stored high score. A store that has never been written reads as 0.
    fn load(&self) -> Result<u32, ScoreStoreError>;

    /// Replaces the stored high score.
    fn save(&mut self, score: u32) -> Result<(), ScoreStoreError>;
}

#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Result<u32, ScoreStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents.trim().parse()?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, score: u32) -> Result<(), ScoreStoreError> {
        fs::write(&self.path, score.to_string())?;
        Ok(())
    }
}

/// Keeps the high score in memory only, recording every write.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub value: u32,
    pub saves: Vec<u32>,
}

impl MemoryScoreStore {
    pub fn with_value(value: u32) -> Self {
        MemoryScoreStore { value, saves: Vec::new() }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<u32, ScoreStoreError> {
        Ok(self.value)
    }

    fn save(&mut self, score: u32) -> Result<(), ScoreStoreError> {
        self.value = score;
        self.saves.push(score);
        Ok(())
    }
}
