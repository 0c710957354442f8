use crate::models::card::CardReport;
use crate::models::error::ProbeError;

/// Serialize the card reports as a JSON array.
pub fn to_json(cards: &[CardReport], pretty: bool) -> Result<String, ProbeError> {
    let json = if pretty {
        serde_json::to_string_pretty(cards)
    } else {
        serde_json::to_string(cards)
    };
    json.map_err(|e| ProbeError::Serialization(format!("failed to serialize report: {}", e)))
}

/// Parse card reports previously written by [`to_json`].
pub fn from_json(json: &str) -> Result<Vec<CardReport>, ProbeError> {
    serde_json::from_str(json)
        .map_err(|e| ProbeError::Serialization(format!("failed to parse report: {}", e)))
}
