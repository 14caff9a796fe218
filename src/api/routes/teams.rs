use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{calculate_aggregate_stats, position_coverage, rating_distribution};
use crate::models::{AggregateScore, Player, PositionSlot, RatingBucket};

#[derive(Debug, Serialize)]
pub struct TeamSummary {
    pub name: String,
    pub player_count: u32,
}

#[derive(Debug, Serialize)]
pub struct TeamListResponse {
    pub teams: Vec<TeamSummary>,
}

pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<TeamListResponse>, ApiError> {
    let roster = state.roster.read().await;

    let mut counts: BTreeMap<String, u32> = BTreeMap::new();
    for player in roster.iter() {
        if let Some(ref team) = player.team {
            *counts.entry(team.clone()).or_insert(0) += 1;
        }
    }

    let teams = counts
        .into_iter()
        .map(|(name, player_count)| TeamSummary { name, player_count })
        .collect();

    Ok(Json(TeamListResponse { teams }))
}

#[derive(Debug, Serialize)]
pub struct RosterStats {
    pub player_count: u32,
    pub aggregate: AggregateScore,
    pub position_coverage: Vec<PositionSlot>,
    pub rating_distribution: Vec<RatingBucket>,
}

#[derive(Debug, Serialize)]
pub struct TeamStatsResponse {
    pub team: String,
    #[serde(flatten)]
    pub stats: RosterStats,
}

/// The aggregate trio every roster-shaped view renders.
pub(super) fn roster_stats(players: &[Player]) -> RosterStats {
    RosterStats {
        player_count: players.len() as u32,
        aggregate: calculate_aggregate_stats(players),
        position_coverage: position_coverage(players),
        rating_distribution: rating_distribution(players),
    }
}

pub async fn team_stats(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<TeamStatsResponse>, ApiError> {
    let roster = state.roster.read().await;
    let players: Vec<Player> = roster
        .iter()
        .filter(|p| {
            p.team
                .as_deref()
                .is_some_and(|t| t.eq_ignore_ascii_case(&name))
        })
        .cloned()
        .collect();
    drop(roster);

    if players.is_empty() {
        return Err(ApiError::NotFound(format!("team {}", name)));
    }

    // Report the team's stored spelling, not the caller's
    let team = players[0].team.clone().unwrap_or(name);

    Ok(Json(TeamStatsResponse {
        team,
        stats: roster_stats(&players),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::build_router;
    use crate::models::AttributeBag;
    use crate::storage::StorageConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn make_player(name: &str, team: &str, overall: u32, positions: &[&str]) -> Player {
        Player::new(name.to_string(), Some(team.to_string()), overall)
            .with_positions(positions.iter().map(|p| p.to_string()).collect())
    }

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
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
    async fn test_list_teams() {
        let state = AppState::new(
            StorageConfig::default(),
            vec![
                make_player("A", "Hawks", 80, &[]),
                make_player("B", "Hawks", 85, &[]),
                make_player("C", "Nets", 90, &[]),
                Player::new("Free Agent".to_string(), None, 70),
            ],
        );
        let (status, json) = get_json(build_router(state), "/api/teams").await;

        assert_eq!(status, StatusCode::OK);
        let teams = json["teams"].as_array().unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0]["name"], "Hawks");
        assert_eq!(teams[0]["player_count"], 2);
        assert_eq!(teams[1]["name"], "Nets");
    }

    #[tokio::test]
    async fn test_team_stats() {
        let state = AppState::new(
            StorageConfig::default(),
            vec![
                make_player("A", "Hawks", 80, &["PG"]),
                make_player("B", "Hawks", 90, &["C"]),
                make_player("C", "Nets", 99, &["SF"]),
            ],
        );
        let (status, json) = get_json(build_router(state), "/api/teams/hawks/stats").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["team"], "Hawks");
        assert_eq!(json["player_count"], 2);
        assert_eq!(json["aggregate"]["overall"], 85);

        let coverage = json["position_coverage"].as_array().unwrap();
        assert_eq!(coverage.len(), 5);
        assert_eq!(coverage[0]["position"], "PG");
        assert_eq!(coverage[0]["covered"], true);
        assert_eq!(coverage[2]["covered"], false);

        let buckets = json["rating_distribution"].as_array().unwrap();
        assert_eq!(buckets[0]["label"], "90+");
        assert_eq!(buckets[0]["count"], 1);
        assert_eq!(buckets[0]["percentage"], 50);
    }

    #[tokio::test]
    async fn test_team_stats_unknown_team() {
        let state = AppState::new(StorageConfig::default(), vec![]);
        let (status, json) = get_json(build_router(state), "/api/teams/Ghosts/stats").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[test]
    fn test_roster_stats_empty_is_zeroed() {
        let stats = roster_stats(&[]);
        assert_eq!(stats.player_count, 0);
        assert_eq!(stats.aggregate, AggregateScore::default());
        assert!(stats.rating_distribution.is_empty());
        assert_eq!(stats.position_coverage.len(), 5);
    }

    #[test]
    fn test_roster_stats_uses_attribute_averages() {
        let mut bag = AttributeBag::new();
        bag.insert("threePointShot".to_string(), 90.0);
        let player = Player::new("Shooter".to_string(), Some("Hawks".to_string()), 85)
            .with_attributes(bag);

        let stats = roster_stats(&[player]);
        assert_eq!(stats.aggregate.outside_scoring, 90);
    }
}
