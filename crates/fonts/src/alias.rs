//! Family-name normalization and the alias table.
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Alternate family names mapped to the core family that replaces them.
static FONT_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("arial", "helvetica"),
        ("couriernew", "courier"),
        ("timesnewroman", "times"),
    ])
});

/// Lowercases a family name and strips all whitespace from it.
pub fn normalize_family(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// The core family a normalized alias stands for, if any.
pub fn alias_target(normalized: &str) -> Option<&'static str> {
    FONT_ALIASES.get(normalized).copied()
}

/// Normalizes `name` and follows the alias table. Canonical names come back unchanged.
pub fn canonical_family(name: &str) -> String {
    let normalized = normalize_family(name);
    match alias_target(&normalized) {
        Some(target) => target.to_string(),
        None => normalized,
    }
}

pub fn aliases() -> impl Iterator<Item = (&'static str, &'static str)> {
    FONT_ALIASES.iter().map(|(k, v)| (*k, *v))
}
