//! High score record
//!
//! A single non-negative integer that only ever goes up. On disk it is the bare
//! decimal value with nothing else in the file. A missing, empty or malformed
//! record counts as "no score yet" and never fails a round.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to persist the record
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("failed to write temporary score file {path}: {source}")]
    WriteTemp { path: PathBuf, source: io::Error },
    #[error("failed to replace score file {path}: {source}")]
    Replace { path: PathBuf, source: io::Error },
}

/// Read-and-maybe-update access to the high score
pub trait ScoreStore {
    /// Current high score, `None` if nothing has been recorded. Cheap enough to
    /// call every frame.
    fn read(&self) -> Option<u32>;

    /// Record a finished round's score. Writes when there is no prior score or
    /// the candidate beats it. Returns the high score in effect afterward.
    fn commit(&mut self, candidate: u32) -> u32;
}

/// Decide what to store for a candidate, `None` if the record stays as is
fn next_record(stored: Option<u32>, candidate: u32) -> Option<u32> {
    match stored {
        Some(best) if candidate <= best => None,
        _ => Some(candidate),
    }
}

/// In-process store, for tests and sessions without a disk record
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    best: Option<u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u32) -> Self {
        Self { best: Some(score) }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn read(&self) -> Option<u32> {
        self.best
    }

    fn commit(&mut self, candidate: u32) -> u32 {
        if let Some(value) = next_record(self.best, candidate) {
            self.best = Some(value);
        }
        self.best.unwrap_or(candidate)
    }
}

/// Plain-text file store with atomic replace on write
///
/// Holds no copy of the value: every `read` goes to disk, so a record written
/// by another instance shows up on the next frame.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    /// Open the record at `path`; the file need not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match read_record(&path) {
            Some(score) => log::info!("Loaded high score {} from {}", score, path.display()),
            None => log::info!("No high score at {}, starting fresh", path.display()),
        }
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn read(&self) -> Option<u32> {
        load_record(&self.path).score()
    }

    fn commit(&mut self, candidate: u32) -> u32 {
        // Compare against what is on disk now
        let stored = read_record(&self.path);

        if let Some(value) = next_record(stored, candidate) {
            match write_record(&self.path, value) {
                Ok(()) => {
                    log::info!("New high score {} saved to {}", value, self.path.display());
                    return value;
                }
                Err(e) => log::warn!("High score not saved: {}", e),
            }
        }

        stored.unwrap_or(candidate)
    }
}

/// What the record file holds
#[derive(Debug)]
enum Record {
    Missing,
    Empty,
    Score(u32),
    Malformed(ParseIntError),
    Unreadable(io::Error),
}

impl Record {
    fn score(&self) -> Option<u32> {
        match self {
            Record::Score(score) => Some(*score),
            _ => None,
        }
    }
}

/// Silent load, cheap enough for a per-frame read
fn load_record(path: &Path) -> Record {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Record::Missing,
        Err(e) => return Record::Unreadable(e),
    };

    let trimmed = contents.trim();
    if trimmed.is_empty() {
        return Record::Empty;
    }

    match trimmed.parse::<u32>() {
        Ok(score) => Record::Score(score),
        Err(e) => Record::Malformed(e),
    }
}

/// Load the record and log anything that is not a score
fn read_record(path: &Path) -> Option<u32> {
    let record = load_record(path);
    match &record {
        Record::Missing => log::debug!("Score file {} not found", path.display()),
        Record::Unreadable(e) => {
            log::warn!("Could not read score file {}: {}", path.display(), e)
        }
        Record::Malformed(e) => {
            log::warn!("Ignoring malformed score file {}: {}", path.display(), e)
        }
        Record::Empty | Record::Score(_) => {}
    }
    record.score()
}

/// Sibling temp path: the full file name plus `.tmp`, so `scores.txt` and
/// `scores.json` never share one
pub(crate) fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write to a sibling temp file, then rename over the record
fn write_record(path: &Path, value: u32) -> Result<(), ScoreError> {
    let temp_path = temp_path_for(path);

    fs::write(&temp_path, value.to_string()).map_err(|source| ScoreError::WriteTemp {
        path: temp_path.clone(),
        source,
    })?;

    fs::rename(&temp_path, path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        ScoreError::Replace {
            path: path.to_path_buf(),
            source,
        }
    })
}
