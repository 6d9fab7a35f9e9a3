//! Collaborator output parsing.

use kp_geometry::PlanSpecification;
use once_cell::sync::Lazy;
use regex::Regex;

/// How much raw collaborator text an error keeps for diagnostics.
const RAW_DIAGNOSTIC_LIMIT: usize = 2000;

static JSON_FENCE: Lazy<Regex> = Lazy::new(|| {
    // Hard-coded pattern; compilation cannot fail.
    Regex::new(r"(?i)```json").expect("literal fence pattern")
});

/// Collaborator text could not be parsed into a specification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a plan specification: {reason}")]
pub struct SpecParseError {
    /// What went wrong, as reported by the JSON parser.
    pub reason: String,
    /// The offending text, truncated for diagnostics.
    pub raw: String,
}

/// Pull the JSON payload out of free-form collaborator text.
///
/// Strips Markdown code fences, then takes the substring from the first `{`
/// to the last `}`. Returns `None` when nothing brace-delimited remains;
/// collaborators occasionally answer with prose and no JSON at all.
fn extract_json(text: &str) -> Option<String> {
    let stripped = JSON_FENCE.replace_all(text.trim(), "");
    let stripped = stripped.replace("```", "");
    let stripped = stripped.trim();

    let first = stripped.find('{')?;
    let last = stripped.rfind('}')?;
    if last <= first {
        return None;
    }
    Some(stripped[first..=last].to_string())
}

/// Parse collaborator text into a [`PlanSpecification`].
///
/// # Errors
///
/// [`SpecParseError`] when no JSON object can be extracted or the JSON does
/// not decode; the error carries the raw text truncated to a diagnostic
/// limit so callers can surface what the collaborator actually said.
pub fn parse_plan_spec(text: &str) -> Result<PlanSpecification, SpecParseError> {
    let Some(json) = extract_json(text) else {
        return Err(SpecParseError {
            reason: "no JSON object found in response".to_string(),
            raw: truncate(text, RAW_DIAGNOSTIC_LIMIT),
        });
    };

    serde_json::from_str(&json).map_err(|e| SpecParseError {
        reason: e.to_string(),
        raw: truncate(&json, RAW_DIAGNOSTIC_LIMIT),
    })
}

/// Truncate on a char boundary.
fn truncate(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}
