//! # Courtside
//!
//! A local NBA 2K player ratings tracker with a derived-stats API.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, composite scores, IDs)
//! - **attributes**: Canonical attribute names, categories, labels
//! - **calculate**: Derived statistics (radar scores, aggregates)
//! - **ingest**: Scraped payload decoding
//! - **fetch**: Payload sources (HTTP, local file)
//! - **storage**: JSONL snapshot store
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod attributes;
pub mod calculate;
pub mod config;
pub mod fetch;
pub mod ingest;
pub mod models;
pub mod storage;

pub use models::*;

use std::time::Duration;

/// Parse a human-friendly duration string (e.g., "1d", "6h", "30m", "90s").
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('d') {
        (n, 86400)
    } else if let Some(n) = s.strip_suffix('h') {
        (n, 3600)
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 60)
    } else if let Some(n) = s.strip_suffix('s') {
        (n, 1)
    } else {
        // Default to seconds
        (s, 1)
    };

    let num: u64 = num_str.parse().ok()?;
    Some(Duration::from_secs(num * multiplier))
}
