//! Prompt construction for schedule synthesis.
//!
//! The prompt embeds a document template so the model mirrors the exact
//! shape the decoder expects, then the user's requirement lines, then the
//! formatting directives that keep the response parseable.

use crate::generate::provider::GenerationRequest;

/// Example document embedded in every prompt.
const DOCUMENT_TEMPLATE: &str = r#"{"schedule": [{"id": "x", "title": "xxx", "description": "xxxx", "week_day": "xxx", "start_time": "2025-01-18T09:00:00", "end_time": "2025-01-18T10:00:00"}]}"#;

/// Render the full prompt for `request`.
#[must_use]
pub fn build_prompt(request: &GenerationRequest) -> String {
    let mut prompt = String::new();
    prompt.push_str("Using this JSON template: ");
    prompt.push_str(DOCUMENT_TEMPLATE);
    prompt.push_str(
        " Give each event its own id, even events with the same name on different days. \
         Please generate a weekly schedule that fits all of these events in: \"",
    );
    prompt.push_str(&request.requirements.join(", "));
    prompt.push_str(
        "\". Do not include anything other than the JSON text in your response; \
         it is parsed directly. Send it as plain unformatted text.",
    );
    if let Some(change) = request.change_request.as_deref() {
        prompt.push_str(
            " Apply these changes as well, overriding the earlier inputs where they contradict: ",
        );
        prompt.push_str(change);
        prompt.push('.');
    }
    prompt.push_str(" Do not include anything that was not specifically requested.");
    prompt
}
