use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::Player;

use super::teams::{roster_stats, RosterStats};

#[derive(Debug, Deserialize)]
pub struct LineupStatsRequest {
    pub player_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LineupPlayer {
    pub id: String,
    pub name: String,
    pub overall: u32,
}

#[derive(Debug, Serialize)]
pub struct LineupStatsResponse {
    pub players: Vec<LineupPlayer>,
    #[serde(flatten)]
    pub stats: RosterStats,
}

/// Stats for an ad-hoc lineup, chosen player by player in the builder.
///
/// Same computation as a team roster, different caller. An empty
/// lineup is valid and yields the all-zero aggregate the builder's
/// empty state renders; an unknown ID is a client error.
pub async fn lineup_stats(
    State(state): State<AppState>,
    Json(request): Json<LineupStatsRequest>,
) -> Result<Json<LineupStatsResponse>, ApiError> {
    let roster = state.roster.read().await;

    let mut players: Vec<Player> = Vec::with_capacity(request.player_ids.len());
    for id in &request.player_ids {
        let player = roster
            .iter()
            .find(|p| p.id.as_str() == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("player {}", id)))?;
        players.push(player);
    }
    drop(roster);

    let lineup_players = players
        .iter()
        .map(|p| LineupPlayer {
            id: p.id.as_str().to_string(),
            name: p.name.clone(),
            overall: p.overall,
        })
        .collect();

    Ok(Json(LineupStatsResponse {
        players: lineup_players,
        stats: roster_stats(&players),
    }))
}
