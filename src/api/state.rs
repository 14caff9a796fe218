use std::sync::Arc;

use crate::models::Player;
use crate::storage::StorageConfig;

/// Shared state for API handlers.
///
/// The roster is an in-memory copy of the latest snapshot; ingest runs
/// replace it wholesale under the write lock.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<StorageConfig>,
    pub roster: Arc<tokio::sync::RwLock<Vec<Player>>>,
}

impl AppState {
    pub fn new(storage: StorageConfig, roster: Vec<Player>) -> Self {
        Self {
            storage: Arc::new(storage),
            roster: Arc::new(tokio::sync::RwLock::new(roster)),
        }
    }
}
