//! Ingestion of scraped ratings payloads.
//!
//! The scraper emits one JSON array of player objects per run. The
//! payload shape has drifted over years of site changes, so decoding is
//! deliberately loose: attribute values may be numbers, numeric
//! strings, or null (null means "not observed" and is dropped, never
//! zeroed); positions arrive as an array or a `"PG/SG"` string; heights
//! as centimeters or `6'7"` text. Attribute keys are stored exactly as
//! scraped; canonical-name normalization happens at read time, so
//! historical snapshots remain usable as the site drifts.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{AttributeBag, Player};

/// Errors that can occur while decoding a scraped payload.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// A player object as emitted by the scraper. Everything beyond the
/// name is optional; records missing an overall rating are skipped.
#[derive(Debug, Deserialize)]
struct RawPlayer {
    name: String,
    #[serde(default)]
    team: Option<String>,
    #[serde(default)]
    overall: Option<f64>,
    #[serde(default)]
    positions: Option<Value>,
    #[serde(default)]
    height: Option<Value>,
    #[serde(default)]
    attributes: Option<BTreeMap<String, Value>>,
    #[serde(default)]
    url: Option<String>,
}

/// Outcome of decoding one payload.
#[derive(Debug)]
pub struct IngestReport {
    /// Decoded players, one per distinct player ID
    pub players: Vec<Player>,

    /// Raw records skipped (no overall rating)
    pub skipped: usize,

    /// Duplicate records replaced by a later record for the same player
    pub duplicates_replaced: usize,

    /// Attribute values dropped as null or non-numeric
    pub values_dropped: usize,
}

/// Decode a scraped JSON payload into player records.
///
/// Duplicate records for the same player (same name + team after ID
/// canonicalization) are resolved last-one-wins, matching how the
/// scraper re-visits pages within a run.
pub fn parse_players(payload: &str) -> Result<IngestReport, IngestError> {
    let raw_players: Vec<RawPlayer> = serde_json::from_str(payload)?;

    let mut by_id: BTreeMap<String, Player> = BTreeMap::new();
    let mut skipped = 0;
    let mut duplicates_replaced = 0;
    let mut values_dropped = 0;

    for raw in raw_players {
        let Some(overall) = raw.overall else {
            warn!("Skipping record without overall rating: {}", raw.name);
            skipped += 1;
            continue;
        };

        let mut player = Player::new(raw.name, raw.team, overall.max(0.0).round() as u32);

        if let Some(ref positions) = raw.positions {
            player = player.with_positions(parse_positions(positions));
        }
        if let Some(height_cm) = raw.height.as_ref().and_then(parse_height) {
            player = player.with_height_cm(height_cm);
        }
        if let Some(ref attributes) = raw.attributes {
            let (bag, dropped) = decode_attribute_bag(attributes);
            values_dropped += dropped;
            player = player.with_attributes(bag);
        }
        if let Some(url) = raw.url {
            player = player.with_source_url(url);
        }

        let id = player.id.as_str().to_string();
        if by_id.insert(id, player).is_some() {
            duplicates_replaced += 1;
        }
    }

    let players: Vec<Player> = by_id.into_values().collect();
    info!(
        "Decoded {} players ({} skipped, {} duplicates, {} attribute values dropped)",
        players.len(),
        skipped,
        duplicates_replaced,
        values_dropped
    );

    Ok(IngestReport {
        players,
        skipped,
        duplicates_replaced,
        values_dropped,
    })
}

/// Keep numeric attribute values, parse numeric strings, drop the rest.
/// Returns the bag and the number of dropped values.
fn decode_attribute_bag(raw: &BTreeMap<String, Value>) -> (AttributeBag, usize) {
    let mut bag = AttributeBag::new();
    let mut dropped = 0;

    for (key, value) in raw {
        match numeric_value(value) {
            Some(v) => {
                bag.insert(key.clone(), v);
            }
            None => {
                if !value.is_null() {
                    debug!("Dropping non-numeric attribute {}: {}", key, value);
                }
                dropped += 1;
            }
        }
    }

    (bag, dropped)
}

fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Positions come as `["PG", "SG"]` or `"PG/SG"` depending on the
/// page layout. Codes are uppercased; empty segments are dropped.
fn parse_positions(value: &Value) -> Vec<String> {
    let codes: Vec<String> = match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str())
            .map(str::to_string)
            .collect(),
        Value::String(s) => s.split('/').map(str::to_string).collect(),
        _ => Vec::new(),
    };

    codes
        .iter()
        .map(|c| c.trim().to_uppercase())
        .filter(|c| !c.is_empty())
        .collect()
}

fn height_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"^\s*(\d)'\s*(\d{1,2})"?\s*$"#).expect("valid height regex"))
}

/// Heights come as centimeters (number) or feet-and-inches text like
/// `6'7"`. Anything else is treated as unknown.
fn parse_height(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => {
            let cm = n.as_f64()?;
            (100.0..=260.0).contains(&cm).then(|| cm.round() as u32)
        }
        Value::String(s) => {
            let caps = height_regex().captures(s)?;
            let feet: f64 = caps[1].parse().ok()?;
            let inches: f64 = caps[2].parse().ok()?;
            Some((feet * 30.48 + inches * 2.54).round() as u32)
        }
        _ => None,
    }
}
