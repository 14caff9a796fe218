//! Per-player composite ("radar") statistics.

use crate::attributes::{attribute_display_name, normalize_attributes};
use crate::models::{AttributeBag, CompositeScore, Player, TopStat};

use super::rounded_mean;

// Attributes averaged into each radar spoke. Deliberately smaller than
// the classification tables in `attributes::category`: each list is the
// curated subset most representative of its category, and merging the
// two would silently change every chart. Note `closeShot` is classified
// under outside scoring but averaged into the inside spoke.

const INSIDE_SCORING_RADAR: &[&str] = &[
    "closeShot",
    "drivingLayup",
    "drivingDunk",
    "standingDunk",
    "postHook",
    "postFade",
    "postControl",
];

const OUTSIDE_SCORING_RADAR: &[&str] = &["midRangeShot", "threePointShot", "freeThrow"];

const PLAYMAKING_RADAR: &[&str] = &[
    "passAccuracy",
    "ballHandle",
    "speedWithBall",
    "passIQ",
    "passVision",
];

const ATHLETICISM_RADAR: &[&str] = &["speed", "agility", "strength", "vertical", "stamina"];

const REBOUNDING_RADAR: &[&str] = &["offensiveRebound", "defensiveRebound"];

const DEFENDING_RADAR: &[&str] = &[
    "interiorDefense",
    "perimeterDefense",
    "steal",
    "block",
    "helpDefenseIQ",
];

/// Average the attributes named in `keys` that are present in the bag.
///
/// Missing keys and non-finite values are excluded from the mean rather
/// than counted as zero; a list with nothing present averages to 0.
fn category_average(bag: &AttributeBag, keys: &[&str]) -> u32 {
    let values: Vec<f64> = keys
        .iter()
        .filter_map(|key| bag.get(*key).copied())
        .filter(|v| v.is_finite())
        .collect();
    rounded_mean(&values)
}

/// Compute a player's composite score for radar charts.
///
/// `overall` passes through from the player record unchanged; the six
/// category fields are rounded averages over the curated subsets above,
/// looked up in the normalized attribute bag. Always returns a fully
/// populated score, whatever the bag contains.
pub fn calculate_radar_stats(player: &Player) -> CompositeScore {
    let bag = normalize_attributes(&player.attributes);

    CompositeScore {
        overall: player.overall,
        inside_scoring: category_average(&bag, INSIDE_SCORING_RADAR),
        outside_scoring: category_average(&bag, OUTSIDE_SCORING_RADAR),
        playmaking: category_average(&bag, PLAYMAKING_RADAR),
        athleticism: category_average(&bag, ATHLETICISM_RADAR),
        rebounding: category_average(&bag, REBOUNDING_RADAR),
        defending: category_average(&bag, DEFENDING_RADAR),
    }
}

/// A player's top three attributes by value, with display labels.
///
/// Ties break lexicographically by canonical key: the normalized bag
/// iterates in key order and the sort is stable, so equal values keep
/// that order. Deterministic for a given bag; players without
/// attributes yield an empty list.
pub fn top_three_stats(player: &Player) -> Vec<TopStat> {
    let bag = normalize_attributes(&player.attributes);

    let mut entries: Vec<(&String, f64)> = bag
        .iter()
        .map(|(key, &value)| (key, value))
        .filter(|(_, value)| value.is_finite())
        .collect();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    entries
        .into_iter()
        .take(3)
        .map(|(name, value)| TopStat {
            name: name.clone(),
            value,
            label: attribute_display_name(name),
        })
        .collect()
}
