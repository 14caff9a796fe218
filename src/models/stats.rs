//! Derived statistics models.
//!
//! The JSON field names on [`CompositeScore`] and [`TopStat`] are a
//! stable contract consumed verbatim by chart and stat-table UI code;
//! they serialize in camelCase.

use serde::{Deserialize, Serialize};

/// Composite ("radar") score for a single player: the overall rating
/// passed through from the player record plus one rounded average per
/// scoring category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeScore {
    pub overall: u32,
    pub inside_scoring: u32,
    pub outside_scoring: u32,
    pub playmaking: u32,
    pub athleticism: u32,
    pub rebounding: u32,
    pub defending: u32,
}

/// Aggregate score for a collection of players (a team roster or a
/// lineup). Same shape as [`CompositeScore`]: every field is the
/// rounded mean of that field across the collection.
pub type AggregateScore = CompositeScore;

/// One of a player's top-rated attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopStat {
    /// Canonical attribute key
    pub name: String,

    /// Attribute value (0-99)
    pub value: f64,

    /// Human-readable label
    pub label: String,
}

/// Coverage badge for one of the five standard position codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSlot {
    pub position: String,
    pub covered: bool,
}

/// One bucket of the overall-rating distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingBucket {
    /// Bucket label (e.g. "90+", "80-89")
    pub label: String,

    /// Players whose overall falls in this bucket
    pub count: u32,

    /// Share of the collection, rounded to the nearest whole percent
    pub percentage: u32,
}
