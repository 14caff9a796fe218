//! Human-readable attribute labels.

use super::normalize_attribute_name;

/// Labels the generic camelCase rule gets wrong: hyphenation,
/// initialisms, and similar.
const DISPLAY_NAME_OVERRIDES: &[(&str, &str)] = &[
    ("threePointShot", "Three-Point Shot"),
    ("midRangeShot", "Mid-Range Shot"),
    ("freeThrow", "Free Throw"),
    ("shotIQ", "Shot IQ"),
    ("passIQ", "Pass IQ"),
    ("helpDefenseIQ", "Help Defense IQ"),
    ("speedWithBall", "Speed With Ball"),
];

/// Format a canonical attribute key as a display label.
///
/// The override table takes precedence; everything else gets the
/// generic rule: a space before each uppercase letter, first character
/// uppercased, trimmed.
pub fn format_attribute_name(canonical: &str) -> String {
    if let Some((_, label)) = DISPLAY_NAME_OVERRIDES
        .iter()
        .find(|(key, _)| *key == canonical)
    {
        return (*label).to_string();
    }

    let mut spaced = String::with_capacity(canonical.len() + 4);
    for c in canonical.chars() {
        if c.is_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => {
            let label: String = first.to_uppercase().chain(chars).collect();
            label.trim().to_string()
        }
        None => spaced,
    }
}

/// Display label for a raw or canonical attribute key.
///
/// Normalizes first, so legacy and PascalCase keys label the same as
/// their canonical form.
pub fn attribute_display_name(key: &str) -> String {
    format_attribute_name(&normalize_attribute_name(key))
}
