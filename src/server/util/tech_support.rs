//! Mapping between the free-text `techSupport` column and its boolean flags.

const TELEPORT: &str = "teleport";
const RESPAWN: &str = "respawn";

/// Whether the column mentions teleport support.
pub fn has_teleport(tech_support: Option<&str>) -> bool {
    tech_support.is_some_and(|s| s.to_lowercase().contains(TELEPORT))
}

/// Whether the column mentions respawn support.
pub fn has_respawn(tech_support: Option<&str>) -> bool {
    tech_support.is_some_and(|s| s.to_lowercase().contains(RESPAWN))
}

/// Rebuilds the column from flags, `None` when neither is enabled.
pub fn build(teleport: bool, respawn: bool) -> Option<String> {
    let mut parts = Vec::new();
    if teleport {
        parts.push(TELEPORT);
    }
    if respawn {
        parts.push(RESPAWN);
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Applies a partial flag update on top of the current column value.
///
/// An explicit `tech_support` wins; otherwise unset flags keep their current state.
/// Returns `current` untouched when nothing was requested.
pub fn merge(
    current: Option<String>,
    tech_support: Option<String>,
    teleport: Option<bool>,
    respawn: Option<bool>,
) -> Option<String> {
    if tech_support.is_some() {
        return tech_support;
    }
    if teleport.is_none() && respawn.is_none() {
        return current;
    }

    let teleport = teleport.unwrap_or_else(|| has_teleport(current.as_deref()));
    let respawn = respawn.unwrap_or_else(|| has_respawn(current.as_deref()));

    build(teleport, respawn)
}
