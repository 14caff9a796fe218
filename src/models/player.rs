//! Player record model.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, PlayerId};

/// A player's raw attribute bag as scraped.
///
/// Keys are whatever the source site used at scrape time: current
/// camelCase names, PascalCase names from an older page layout, or
/// legacy attribute names from historical data. Values are on the 0-99
/// rating scale. An absent key means "not observed", never zero.
/// Normalization into canonical names happens at read time (see
/// [`crate::attributes::normalize_attributes`]), so historical snapshots
/// stay valid as the upstream site drifts.
pub type AttributeBag = BTreeMap<String, f64>;

/// A scraped player record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier (derived from name + team)
    pub id: PlayerId,

    /// Player name
    pub name: String,

    /// Team name, if the player is on a roster
    pub team: Option<String>,

    /// Overall rating (0-99), tracked by the source independently of
    /// the attribute bag
    pub overall: u32,

    /// Position codes (e.g. "PG", "SG"); may be empty
    #[serde(default)]
    pub positions: Vec<String>,

    /// Height in centimeters, if known
    pub height_cm: Option<u32>,

    /// Raw attribute bag; empty when the scrape carried no attributes
    #[serde(default)]
    pub attributes: AttributeBag,

    /// Page the record was scraped from
    pub source_url: Option<String>,

    /// When this record was scraped
    pub scraped_at: DateTime<Utc>,
}

impl Player {
    /// Create a new Player with an auto-generated ID.
    pub fn new(name: String, team: Option<String>, overall: u32) -> Self {
        let id = EntityId::generate(&[&name, team.as_deref().unwrap_or("")]);

        Self {
            id,
            name,
            team,
            overall,
            positions: Vec::new(),
            height_cm: None,
            attributes: AttributeBag::new(),
            source_url: None,
            scraped_at: Utc::now(),
        }
    }

    /// Builder method to set positions.
    pub fn with_positions(mut self, positions: Vec<String>) -> Self {
        self.positions = positions;
        self
    }

    /// Builder method to set height.
    pub fn with_height_cm(mut self, height_cm: u32) -> Self {
        self.height_cm = Some(height_cm);
        self
    }

    /// Builder method to set the attribute bag.
    pub fn with_attributes(mut self, attributes: AttributeBag) -> Self {
        self.attributes = attributes;
        self
    }

    /// Builder method to set the source URL.
    pub fn with_source_url(mut self, url: String) -> Self {
        self.source_url = Some(url);
        self
    }

    /// Whether the player lists the given position code.
    pub fn plays_position(&self, code: &str) -> bool {
        self.positions.iter().any(|p| p.eq_ignore_ascii_case(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_stable_across_rescrapes() {
        let p1 = Player::new("Stephen Curry".to_string(), Some("Warriors".to_string()), 96);
        let p2 = Player::new("stephen curry".to_string(), Some("WARRIORS".to_string()), 95);
        assert_eq!(p1.id, p2.id);
    }

    #[test]
    fn test_player_id_distinguishes_free_agents() {
        let rostered = Player::new("John Smith".to_string(), Some("Hawks".to_string()), 75);
        let free_agent = Player::new("John Smith".to_string(), None, 75);
        assert_ne!(rostered.id, free_agent.id);
    }

    #[test]
    fn test_player_builder() {
        let mut attrs = AttributeBag::new();
        attrs.insert("speed".to_string(), 90.0);

        let player = Player::new("Test Player".to_string(), None, 80)
            .with_positions(vec!["PG".to_string(), "SG".to_string()])
            .with_height_cm(193)
            .with_attributes(attrs)
            .with_source_url("https://example.com/test-player".to_string());

        assert_eq!(player.positions.len(), 2);
        assert_eq!(player.height_cm, Some(193));
        assert_eq!(player.attributes.get("speed"), Some(&90.0));
        assert!(player.source_url.is_some());
    }

    #[test]
    fn test_plays_position_case_insensitive() {
        let player = Player::new("Test".to_string(), None, 70)
            .with_positions(vec!["PG".to_string()]);
        assert!(player.plays_position("pg"));
        assert!(!player.plays_position("C"));
    }

    #[test]
    fn test_player_deserializes_without_optional_fields() {
        // Old snapshots may predate positions/attributes
        let json = r#"{
            "id": "abc123",
            "name": "Old Record",
            "team": null,
            "overall": 78,
            "height_cm": null,
            "source_url": null,
            "scraped_at": "2023-01-15T00:00:00Z"
        }"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert!(player.positions.is_empty());
        assert!(player.attributes.is_empty());
    }

    #[test]
    fn test_player_serialization_round_trip() {
        let player = Player::new("Round Trip".to_string(), Some("Nets".to_string()), 85)
            .with_positions(vec!["C".to_string()]);
        let json = serde_json::to_string(&player).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player.id, back.id);
        assert_eq!(player.overall, back.overall);
        assert_eq!(player.positions, back.positions);
    }
}
