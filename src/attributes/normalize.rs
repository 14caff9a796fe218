//! Attribute name normalization.
//!
//! The ratings site has renamed attributes and switched naming
//! conventions more than once: one page layout emits PascalCase keys,
//! the current layout emits camelCase, and a few attributes were
//! renamed outright between game editions. Everything downstream works
//! in canonical camelCase keys, so every raw key passes through here
//! first.

use crate::models::AttributeBag;

/// Known historical renames, raw name -> canonical name.
///
/// Canonical names must never appear on the left-hand side; that is
/// what keeps [`normalize_attribute_name`] idempotent.
const LEGACY_ATTRIBUTE_NAMES: &[(&str, &str)] = &[
    ("layup", "drivingLayup"),
    ("overallDurability", "durability"),
];

fn legacy_lookup(key: &str) -> Option<&'static str> {
    LEGACY_ATTRIBUTE_NAMES
        .iter()
        .find(|(raw, _)| *raw == key)
        .map(|(_, canonical)| *canonical)
}

/// Map a raw attribute key to its canonical camelCase name.
///
/// Checks the legacy rename table first, then folds a leading uppercase
/// letter (the PascalCase layout) and re-checks the table. Unrecognized
/// keys pass through unchanged so that attributes the site adds in the
/// future survive ingestion instead of being dropped. Total: never
/// fails, and never returns an empty string for non-empty input.
pub fn normalize_attribute_name(raw: &str) -> String {
    if let Some(canonical) = legacy_lookup(raw) {
        return canonical.to_string();
    }

    let mut chars = raw.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            let candidate: String = first.to_lowercase().chain(chars).collect();
            match legacy_lookup(&candidate) {
                Some(canonical) => canonical.to_string(),
                None => candidate,
            }
        }
        _ => raw.to_string(),
    }
}

/// Normalize every key of an attribute bag, preserving values.
///
/// If two raw keys normalize to the same canonical key, the later one
/// in map-iteration order wins. Scraped bags never mix layouts within
/// one record, so the collision is theoretical; it is documented rather
/// than defended against.
pub fn normalize_attributes(bag: &AttributeBag) -> AttributeBag {
    bag.iter()
        .map(|(key, &value)| (normalize_attribute_name(key), value))
        .collect()
}
