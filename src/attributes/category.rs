//! Attribute category classification.

use serde::{Deserialize, Serialize};

use super::normalize_attribute_name;

/// Semantic category of a canonical attribute.
///
/// A closed set the UI switches on exhaustively; serialized in
/// camelCase to match the attribute keys themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeCategory {
    OutsideScoring,
    InsideScoring,
    Playmaking,
    Athleticism,
    Defending,
    Rebounding,
    Other,
}

impl AttributeCategory {
    /// Human-readable heading for attribute-bar group displays.
    pub fn label(&self) -> &'static str {
        match self {
            AttributeCategory::OutsideScoring => "Outside Scoring",
            AttributeCategory::InsideScoring => "Inside Scoring",
            AttributeCategory::Playmaking => "Playmaking",
            AttributeCategory::Athleticism => "Athleticism",
            AttributeCategory::Defending => "Defending",
            AttributeCategory::Rebounding => "Rebounding",
            AttributeCategory::Other => "Other",
        }
    }

    /// The six real categories, in display order. `Other` is a
    /// fallback, not a member.
    pub fn all() -> [AttributeCategory; 6] {
        [
            AttributeCategory::OutsideScoring,
            AttributeCategory::InsideScoring,
            AttributeCategory::Playmaking,
            AttributeCategory::Athleticism,
            AttributeCategory::Defending,
            AttributeCategory::Rebounding,
        ]
    }
}

impl std::fmt::Display for AttributeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AttributeCategory::OutsideScoring => "outsideScoring",
            AttributeCategory::InsideScoring => "insideScoring",
            AttributeCategory::Playmaking => "playmaking",
            AttributeCategory::Athleticism => "athleticism",
            AttributeCategory::Defending => "defending",
            AttributeCategory::Rebounding => "rebounding",
            AttributeCategory::Other => "other",
        };
        write!(f, "{}", s)
    }
}

// Category membership tables. These cover the full canonical attribute
// set and are disjoint: a canonical key appears in exactly one list.
// The smaller per-category averaging subsets used for radar scores live
// in `calculate::radar` and are intentionally separate.

const OUTSIDE_SCORING_ATTRIBUTES: &[&str] = &[
    "closeShot",
    "midRangeShot",
    "threePointShot",
    "freeThrow",
    "shotIQ",
    "offensiveConsistency",
];

const INSIDE_SCORING_ATTRIBUTES: &[&str] = &[
    "drivingLayup",
    "postFade",
    "postHook",
    "postControl",
    "drawFoul",
    "hands",
    "drivingDunk",
    "standingDunk",
];

const PLAYMAKING_ATTRIBUTES: &[&str] = &[
    "passAccuracy",
    "ballHandle",
    "speedWithBall",
    "passIQ",
    "passVision",
];

const ATHLETICISM_ATTRIBUTES: &[&str] = &[
    "speed",
    "agility",
    "strength",
    "vertical",
    "stamina",
    "hustle",
    "durability",
];

const DEFENDING_ATTRIBUTES: &[&str] = &[
    "interiorDefense",
    "perimeterDefense",
    "steal",
    "block",
    "lateralQuickness",
    "helpDefenseIQ",
    "passPerception",
    "defensiveConsistency",
];

const REBOUNDING_ATTRIBUTES: &[&str] = &["offensiveRebound", "defensiveRebound"];

/// Membership list for a category.
///
/// `Other` has no members; it catches everything the six lists miss.
pub fn category_attributes(category: AttributeCategory) -> &'static [&'static str] {
    match category {
        AttributeCategory::OutsideScoring => OUTSIDE_SCORING_ATTRIBUTES,
        AttributeCategory::InsideScoring => INSIDE_SCORING_ATTRIBUTES,
        AttributeCategory::Playmaking => PLAYMAKING_ATTRIBUTES,
        AttributeCategory::Athleticism => ATHLETICISM_ATTRIBUTES,
        AttributeCategory::Defending => DEFENDING_ATTRIBUTES,
        AttributeCategory::Rebounding => REBOUNDING_ATTRIBUTES,
        AttributeCategory::Other => &[],
    }
}

/// Classify a raw or canonical attribute key.
///
/// Normalizes first, then searches the membership lists; keys outside
/// the canonical set fall through to [`AttributeCategory::Other`].
pub fn attribute_category(key: &str) -> AttributeCategory {
    let canonical = normalize_attribute_name(key);

    AttributeCategory::all()
        .into_iter()
        .find(|category| category_attributes(*category).contains(&canonical.as_str()))
        .unwrap_or(AttributeCategory::Other)
}
