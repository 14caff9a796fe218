use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::{paginate, ApiError, Pagination, PaginationMeta};
use crate::attributes::{
    attribute_category, attribute_display_name, normalize_attributes, AttributeCategory,
};
use crate::calculate::{calculate_radar_stats, top_three_stats};
use crate::models::{CompositeScore, Player, TopStat};

#[derive(Debug, Deserialize)]
pub struct ListPlayersParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub team: Option<String>,
    pub position: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PlayerSummary {
    pub id: String,
    pub name: String,
    pub team: Option<String>,
    pub overall: u32,
    pub positions: Vec<String>,
    pub composite: CompositeScore,
}

#[derive(Debug, Serialize)]
pub struct PlayerListResponse {
    pub players: Vec<PlayerSummary>,
    pub pagination: PaginationMeta,
}

pub async fn list_players(
    State(state): State<AppState>,
    Query(params): Query<ListPlayersParams>,
) -> Result<Json<PlayerListResponse>, ApiError> {
    let roster = state.roster.read().await;
    let mut players: Vec<Player> = roster.clone();
    drop(roster);

    if let Some(ref team) = params.team {
        players.retain(|p| {
            p.team
                .as_deref()
                .is_some_and(|t| t.eq_ignore_ascii_case(team))
        });
    }
    if let Some(ref position) = params.position {
        players.retain(|p| p.plays_position(position));
    }
    if let Some(ref search) = params.search {
        let needle = search.to_lowercase();
        players.retain(|p| p.name.to_lowercase().contains(&needle));
    }

    // Best players first; name as the stable secondary key
    players.sort_by(|a, b| b.overall.cmp(&a.overall).then_with(|| a.name.cmp(&b.name)));

    let pagination = Pagination::new(params.page, params.page_size);
    let (page_players, meta) = paginate(&players, &pagination);

    let summaries = page_players.iter().map(player_summary).collect();

    Ok(Json(PlayerListResponse {
        players: summaries,
        pagination: meta,
    }))
}

fn player_summary(player: &Player) -> PlayerSummary {
    PlayerSummary {
        id: player.id.as_str().to_string(),
        name: player.name.clone(),
        team: player.team.clone(),
        overall: player.overall,
        positions: player.positions.clone(),
        composite: calculate_radar_stats(player),
    }
}

#[derive(Debug, Serialize)]
pub struct AttributeValue {
    pub name: String,
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct AttributeGroup {
    pub category: AttributeCategory,
    pub label: String,
    pub attributes: Vec<AttributeValue>,
}

#[derive(Debug, Serialize)]
pub struct PlayerDetailResponse {
    pub id: String,
    pub name: String,
    pub team: Option<String>,
    pub overall: u32,
    pub positions: Vec<String>,
    pub height_cm: Option<u32>,
    pub source_url: Option<String>,
    pub composite: CompositeScore,
    pub top_stats: Vec<TopStat>,
    pub attribute_groups: Vec<AttributeGroup>,
}

pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlayerDetailResponse>, ApiError> {
    let roster = state.roster.read().await;
    let player = roster
        .iter()
        .find(|p| p.id.as_str() == id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("player {}", id)))?;
    drop(roster);

    Ok(Json(PlayerDetailResponse {
        id: player.id.as_str().to_string(),
        name: player.name.clone(),
        team: player.team.clone(),
        overall: player.overall,
        positions: player.positions.clone(),
        height_cm: player.height_cm,
        source_url: player.source_url.clone(),
        composite: calculate_radar_stats(&player),
        top_stats: top_three_stats(&player),
        attribute_groups: attribute_groups(&player),
    }))
}

/// Group a player's normalized attributes by category, in display
/// order. Unclassified attributes land in a trailing `Other` group;
/// empty groups are omitted.
fn attribute_groups(player: &Player) -> Vec<AttributeGroup> {
    let bag = normalize_attributes(&player.attributes);

    let mut groups: Vec<AttributeGroup> = AttributeCategory::all()
        .into_iter()
        .chain(std::iter::once(AttributeCategory::Other))
        .map(|category| AttributeGroup {
            category,
            label: category.label().to_string(),
            attributes: Vec::new(),
        })
        .collect();

    for (name, &value) in &bag {
        let category = attribute_category(name);
        let group = groups
            .iter_mut()
            .find(|g| g.category == category)
            .expect("all categories present");
        group.attributes.push(AttributeValue {
            name: name.clone(),
            label: attribute_display_name(name),
            value,
        });
    }

    groups.retain(|g| !g.attributes.is_empty());
    groups
}
