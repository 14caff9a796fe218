//! JSONL (JSON Lines) player snapshots.
//!
//! Each ingest run writes the full player set as one
//! `players-<stamp>.jsonl` file, one player per line. Snapshots are
//! never rewritten; readers resolve the newest file by name. Corrupt
//! lines are skipped with a warning rather than failing the read, so
//! one bad scrape line cannot take the whole dataset down.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{info, warn};

use super::{StorageConfig, StorageError};
use crate::models::Player;

/// Write a new timestamped snapshot of the full player set.
///
/// Returns the path of the written file.
pub fn write_snapshot(config: &StorageConfig, players: &[Player]) -> Result<PathBuf, StorageError> {
    let stamp = Utc::now().format("%Y%m%dT%H%M%SZ");
    let path = config.players_dir().join(format!("players-{}.jsonl", stamp));
    write_snapshot_to(&path, players)?;
    Ok(path)
}

/// Write a snapshot to an explicit path.
pub fn write_snapshot_to(path: &Path, players: &[Player]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for player in players {
        let json = serde_json::to_string(player)?;
        writeln!(writer, "{}", json)?;
    }
    writer.flush()?;

    info!("Wrote {} players to {:?}", players.len(), path);
    Ok(())
}

/// List snapshot files, oldest first.
///
/// The timestamp format sorts lexicographically, so name order is
/// chronological order.
pub fn list_snapshots(config: &StorageConfig) -> Result<Vec<PathBuf>, StorageError> {
    let pattern = config.players_dir().join("players-*.jsonl");
    let pattern = pattern.to_string_lossy();

    let mut paths: Vec<PathBuf> = glob::glob(&pattern)?.filter_map(Result::ok).collect();
    paths.sort();
    Ok(paths)
}

/// Read one snapshot file, skipping corrupt lines.
pub fn read_snapshot(path: &Path) -> Result<Vec<Player>, StorageError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut players = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Player>(&line) {
            Ok(player) => players.push(player),
            Err(e) => {
                warn!("Skipping corrupt line {} in {:?}: {}", line_no + 1, path, e);
            }
        }
    }

    Ok(players)
}

/// Read the newest snapshot, or an empty set when none exists yet.
pub fn read_latest(config: &StorageConfig) -> Result<Vec<Player>, StorageError> {
    match list_snapshots(config)?.last() {
        Some(path) => {
            let players = read_snapshot(path)?;
            info!("Loaded {} players from {:?}", players.len(), path);
            Ok(players)
        }
        None => Ok(Vec::new()),
    }
}
