use serde_json::Value;

use super::ReverseError;
use crate::settings::ReverseSettings;

/// Query parameters for one input-tool request. The transport encodes them.
pub fn query_pairs<'s>(settings: &'s ReverseSettings, text: &str) -> Vec<(&'s str, String)> {
    vec![
        ("text", text.to_string()),
        ("itc", settings.itc.clone()),
        ("num", settings.num.to_string()),
    ]
}

/// Extract the first suggestion from an input-tool response body.
///
/// Expected shape: `["SUCCESS", [[source, [candidate, ...], ...]]]`.
pub fn parse_response(body: &str) -> Result<String, ReverseError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| ReverseError::Parse(e.to_string()))?;
    match value[1][0][1][0].as_str() {
        Some(candidate) if !candidate.is_empty() => Ok(candidate.to_string()),
        _ => Err(ReverseError::NoCandidate),
    }
}
