use crate::server::error::AppError;

/// ArmA 3 DLC identifiers accepted in `requiredDLCs`.
pub const VALID_DLCS: &[&str] = &[
    "apex",
    "contact",
    "csla",
    "gm",
    "helicopters",
    "jets",
    "karts",
    "laws-of-war",
    "marksmen",
    "reaction-forces",
    "spearhead",
    "sogpf",
    "tac-ops",
    "tanks",
    "western-sahara",
    "expeditionary-forces",
];

/// Validates a DLC list against the whitelist.
///
/// An empty list is always valid.
///
/// # Arguments
/// - `dlcs` - Identifiers supplied by the client
///
/// # Returns
/// - `Ok(())` - Every identifier is known
/// - `Err(AppError::BadRequest)` - Lists the unknown identifiers and the valid options
pub fn validate_dlcs(dlcs: &[String]) -> Result<(), AppError> {
    let invalid: Vec<&str> = dlcs
        .iter()
        .map(String::as_str)
        .filter(|dlc| !VALID_DLCS.contains(dlc))
        .collect();

    if invalid.is_empty() {
        return Ok(());
    }

    Err(AppError::BadRequest(format!(
        "Invalid requiredDLCs: {}. Valid options: {}",
        invalid.join(", "),
        VALID_DLCS.join(", ")
    )))
}
