//! Decoding of generative provider responses.
//!
//! Providers wrap the document in markdown fences or prose often enough
//! that the obvious wrapping is stripped before the strict decode. Unlike
//! best-effort extraction, a response that still does not decode is a hard
//! error: a failed regeneration must leave the current schedule in place,
//! never half-apply.

use crate::error::{PlannerError, Result};
use crate::schedule::Schedule;

/// Decode provider response text into a schedule.
///
/// # Errors
/// Returns a parse error when no document can be found in `raw` or the
/// document does not match the schedule shape.
pub fn parse_schedule_response(raw: &str) -> Result<Schedule> {
    let body = extract_document(raw);
    if body.is_empty() {
        return Err(PlannerError::Parse(
            "response carries no schedule document".to_owned(),
        ));
    }
    serde_json::from_str(body).map_err(|e| PlannerError::Parse(format!("schedule document: {e}")))
}

/// Extract the document body from a potentially markdown-fenced response:
/// the content of the first closed ` ```json ` or ` ``` ` fence, else the
/// outermost `{`..`}` span, else the trimmed text itself.
fn extract_document(raw: &str) -> &str {
    let trimmed = raw.trim();

    for fence in ["```json", "```"] {
        if let Some(start) = trimmed.find(fence) {
            let body = &trimmed[start + fence.len()..];
            if let Some(end) = body.find("```") {
                return body[..end].trim();
            }
        }
    }

    if let Some(start) = trimmed.find('{')
        && let Some(end) = trimmed.rfind('}')
        && end > start
    {
        return &trimmed[start..=end];
    }

    trimmed
}
