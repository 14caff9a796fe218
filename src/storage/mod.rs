//! Filesystem storage.
//!
//! JSONL snapshots are the source of truth: every ingest run writes a
//! timestamped snapshot of the full player set, and readers resolve the
//! latest one. Raw fetched payloads are kept alongside for
//! re-processing.

mod jsonl;

pub use jsonl::*;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Glob error: {0}")]
    Glob(#[from] glob::PatternError),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Directory of player snapshots.
    pub fn players_dir(&self) -> PathBuf {
        self.data_dir.join("players")
    }

    /// Directory of raw fetched payloads.
    pub fn raw_dir(&self) -> PathBuf {
        self.data_dir.join("raw")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

/// Archive a raw fetched payload for later re-processing.
///
/// Returns the path of the written file.
pub fn write_raw_payload(config: &StorageConfig, payload: &str) -> Result<PathBuf, StorageError> {
    let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
    let path = config.raw_dir().join(format!("payload-{}.json", stamp));
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, payload)?;
    tracing::debug!("Archived {} byte payload to {:?}", payload.len(), path);
    Ok(path)
}
