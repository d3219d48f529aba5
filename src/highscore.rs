//! High score persistence
//!
//! The high score file is plain text: one integer score per line, highest
//! first, at most ten lines. If the file does not exist it is recreated with
//! the default seed scores. Every operation takes the path it was opened
//! with, so tests point the list at a temp directory.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default high score file, relative to the working directory.
pub const DEFAULT_FILE: &str = "HighScoreList.txt";

/// Maximum number of scores kept on file.
const MAX_ENTRIES: usize = 10;

/// Scores the file is seeded with when it does not exist yet.
const SEED_SCORES: [u32; 3] = [30, 20, 10];

/// Errors from reading or writing the high score file.
#[derive(Debug)]
pub enum HighScoreError {
    /// I/O error with the path involved
    Io { path: PathBuf, message: String },
}

impl fmt::Display for HighScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HighScoreError::Io { path, message } => {
                write!(f, "high score file {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for HighScoreError {}

/// The recorded high scores, kept in sync with the file on disk.
pub struct HighScoreList {
    path: PathBuf,
    scores: Vec<u32>,
}

impl HighScoreList {
    /// Load the scores from `path`, creating a seeded file if none exists.
    ///
    /// Lines that do not parse as integers are skipped with a diagnostic.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, HighScoreError> {
        let path = path.into();

        if !path.exists() {
            let list = Self::seeded(path);
            list.write()?;
            return Ok(list);
        }

        let text = std::fs::read_to_string(&path).map_err(|e| io_error(&path, e))?;

        let mut scores = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match line.parse::<u32>() {
                Ok(score) => scores.push(score),
                Err(_) => eprintln!(
                    "Skipping unreadable high score line in {}: {:?}",
                    path.display(),
                    line
                ),
            }
        }
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(MAX_ENTRIES);

        Ok(Self { path, scores })
    }

    /// A list with the default seed scores, not yet written to disk.
    pub fn seeded(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            scores: SEED_SCORES.to_vec(),
        }
    }

    /// Add a new score, keeping the list sorted highest-first and capped,
    /// and rewrite the file.
    pub fn add(&mut self, score: u32) -> Result<(), HighScoreError> {
        self.scores.push(score);
        self.scores.sort_unstable_by(|a, b| b.cmp(a));
        self.scores.truncate(MAX_ENTRIES);
        self.write()
    }

    /// The scores, highest first.
    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    /// Rewrite the whole file from the in-memory list.
    fn write(&self) -> Result<(), HighScoreError> {
        let mut file = std::fs::File::create(&self.path).map_err(|e| io_error(&self.path, e))?;
        for score in &self.scores {
            writeln!(file, "{}", score).map_err(|e| io_error(&self.path, e))?;
        }
        Ok(())
    }
}

fn io_error(path: &Path, e: std::io::Error) -> HighScoreError {
    HighScoreError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}
