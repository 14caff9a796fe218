//! REST API endpoints.
//!
//! Axum-based HTTP API serving player records and the derived
//! statistics consumed by the playground, team pages, and the lineup
//! builder.

pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Pagination parameters.
#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 25,
        }
    }
}

impl Pagination {
    pub fn new(page: Option<u32>, page_size: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: page_size.unwrap_or(25).clamp(1, 200),
        }
    }
}

/// Pagination metadata in responses.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Slice one page out of `items`, with the metadata describing it.
pub fn paginate<T>(items: &[T], pagination: &Pagination) -> (Vec<T>, PaginationMeta)
where
    T: Clone,
{
    let total_items = items.len() as u32;
    let total_pages = total_items.div_ceil(pagination.page_size);

    let start = ((pagination.page - 1) * pagination.page_size) as usize;
    let end = (start + pagination.page_size as usize).min(items.len());
    let page_items = if start < items.len() {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    let meta = PaginationMeta {
        page: pagination.page,
        page_size: pagination.page_size,
        total_items,
        total_pages,
        has_next: pagination.page < total_pages,
        has_prev: pagination.page > 1,
    };

    (page_items, meta)
}

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/players", get(routes::players::list_players))
        .route("/api/players/:id", get(routes::players::get_player))
        .route("/api/teams", get(routes::teams::list_teams))
        .route("/api/teams/:name/stats", get(routes::teams::team_stats))
        .route("/api/lineups/stats", post(routes::lineups::lineup_stats))
        .route("/api/refresh", post(routes::refresh::refresh))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
