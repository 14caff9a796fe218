use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::storage;

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub players_loaded: u32,
}

/// Reload the roster from the latest snapshot.
///
/// Lets an ingest run land without restarting the server: the watcher
/// writes a snapshot, then hits this endpoint.
pub async fn refresh(State(state): State<AppState>) -> Result<Json<RefreshResponse>, ApiError> {
    let players =
        storage::read_latest(&state.storage).map_err(|e| ApiError::Internal(e.to_string()))?;
    let count = players.len() as u32;

    let mut roster = state.roster.write().await;
    *roster = players;
    drop(roster);

    info!("Roster refreshed: {} players", count);
    Ok(Json(RefreshResponse {
        players_loaded: count,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::build_router;
    use crate::models::Player;
    use crate::storage::{write_snapshot, StorageConfig};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    async fn post_empty(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_refresh_loads_latest_snapshot() {
        let dir = TempDir::new().unwrap();
        let config = StorageConfig::new(dir.path().to_path_buf());
        write_snapshot(
            &config,
            &[Player::new("Fresh Player".to_string(), None, 82)],
        )
        .unwrap();

        // Server started before the snapshot existed
        let state = AppState::new(config, vec![]);
        let app = build_router(state.clone());

        let (status, json) = post_empty(app, "/api/refresh").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["players_loaded"], 1);

        let roster = state.roster.read().await;
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name, "Fresh Player");
    }

    #[tokio::test]
    async fn test_refresh_empty_store() {
        let dir = TempDir::new().unwrap();
        let state = AppState::new(StorageConfig::new(dir.path().to_path_buf()), vec![]);

        let (status, json) = post_empty(build_router(state), "/api/refresh").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["players_loaded"], 0);
    }
}
