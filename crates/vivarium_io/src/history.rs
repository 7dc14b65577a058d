use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;
use vivarium_core::Grid;

/// One recorded generation: when it was taken and the full grid as
/// pattern text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub generation: u64,
    pub timestamp: DateTime<Utc>,
    pub rows: usize,
    pub cols: usize,
    pub pattern: String,
}

impl Snapshot {
    pub fn of(grid: &Grid, generation: u64, timestamp: DateTime<Utc>) -> Self {
        let (rows, cols) = grid.dimensions();
        Self {
            generation,
            timestamp,
            rows,
            cols,
            pattern: grid.to_pattern(),
        }
    }

    /// Rebuilds the recorded grid.
    pub fn to_grid(&self) -> Result<Grid> {
        Ok(Grid::from_pattern(&self.pattern)?)
    }
}

/// Appends grid snapshots to a per-session JSONL trace file.
///
/// Each run gets its own file, named by a fresh v4 uuid, inside the
/// configured directory (created if absent). Every record is flushed
/// immediately so an interrupted run still leaves a readable trace.
pub struct HistoryWriter {
    file: BufWriter<File>,
    path: PathBuf,
}

impl HistoryWriter {
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }
        let path = dir.join(format!("{}.jsonl", Uuid::new_v4()));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            file: BufWriter::new(file),
            path,
        })
    }

    /// Where this session's trace lives.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one snapshot. Called at most once per generation.
    pub fn record(
        &mut self,
        grid: &Grid,
        generation: u64,
        timestamp: DateTime<Utc>,
    ) -> Result<()> {
        let json = serde_json::to_string(&Snapshot::of(grid, generation, timestamp))?;
        writeln!(self.file, "{json}")?;
        self.file.flush()?;
        Ok(())
    }
}

/// Reads a trace file back as its sequence of snapshots. A malformed
/// line is an error, not skipped.
pub fn read_trace(path: impl AsRef<Path>) -> Result<Vec<Snapshot>> {
    let reader = BufReader::new(File::open(path)?);
    let mut snapshots = Vec::new();
    for line in reader.lines() {
        snapshots.push(serde_json::from_str(&line?)?);
    }
    Ok(snapshots)
}
