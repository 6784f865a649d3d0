//! Extraction of JSON payloads from model responses.
//!
//! Providers are instructed to answer with bare JSON but routinely wrap it
//! in markdown fences or lead with prose. Everything here works on the raw
//! response text and pulls out the first balanced JSON value.

use crate::ai::models::{RecommendationSet, TimeHorizon};
use crate::errors::AiError;

/// Strip markdown fences and any surrounding prose, returning the first
/// balanced JSON object or array in the text.
pub fn extract_json(text: &str) -> String {
    let mut cleaned = text.trim();

    if let Some(rest) = cleaned.strip_prefix("```json") {
        cleaned = rest;
    } else if let Some(rest) = cleaned.strip_prefix("```") {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest;
    }
    let cleaned = cleaned.trim();

    let start = match cleaned.find(|c| c == '{' || c == '[') {
        Some(pos) => pos,
        None => return cleaned.to_string(),
    };

    balanced_json(&cleaned[start..])
}

/// Walk the text from an opening brace/bracket and return the substring up
/// to its matching close, respecting string literals and escapes.
fn balanced_json(text: &str) -> String {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in text.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '{' | '[' if !in_string => depth += 1,
            '}' | ']' if !in_string => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return text[..i + ch.len_utf8()].to_string();
                }
            }
            _ => {}
        }
    }

    text.to_string()
}

/// Parse the per-horizon recommendation object. All six horizons must be
/// present for the result to be usable.
pub fn parse_recommendations(
    provider: &'static str,
    text: &str,
) -> Result<RecommendationSet, AiError> {
    let json = extract_json(text);
    let set: RecommendationSet =
        serde_json::from_str(&json).map_err(|e| AiError::MalformedResponse {
            provider,
            reason: e.to_string(),
        })?;

    for horizon in TimeHorizon::ALL {
        if !set.contains_key(&horizon) {
            return Err(AiError::MalformedResponse {
                provider,
                reason: format!("missing horizon '{}'", horizon.as_str()),
            });
        }
    }

    Ok(set)
}
