//! Gemini provider adapter.
//!
//! Implements [`GenerativeProvider`] over the Google Generative Language
//! `generateContent` endpoint. Requests are not streamed; the schedule
//! document is small enough to read in one response.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{PlannerError, Result};
use crate::generate::prompt::build_prompt;
use crate::generate::provider::{GenerationRequest, GenerativeProvider};

// ── Configuration ──────────────────────────────────────────────

/// Default Generative Language API endpoint.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the Gemini adapter.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key, sent as the `key` query parameter.
    pub api_key: String,
    /// Base URL for the API (defaults to the public endpoint).
    pub base_url: String,
    /// Model identifier (e.g. `"gemini-1.5-flash"`).
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Create a new Gemini config with default endpoint and timeout.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the base URL (useful for testing with mock servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

// ── Response Shape ─────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts.
    fn first_candidate_text(&self) -> Option<String> {
        self.candidates
            .first()
            .map(|c| c.content.parts.iter().map(|p| p.text.as_str()).collect())
    }
}

// ── Error Mapping ──────────────────────────────────────────────

/// Map HTTP error responses to planner errors.
fn map_http_error(status: reqwest::StatusCode, body: &str) -> PlannerError {
    let detail = extract_error_message(body);

    match status.as_u16() {
        401 | 403 => PlannerError::Provider(format!("authentication failed: {detail}")),
        429 => PlannerError::Provider(format!("rate limit exceeded: {detail}")),
        s if s >= 500 => PlannerError::Provider(format!("service unavailable: {detail}")),
        _ => PlannerError::Provider(format!("HTTP {status}: {detail}")),
    }
}

/// Extract a human-readable message from a Gemini error response body.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| {
            if body.is_empty() {
                "no response body".to_string()
            } else {
                body.chars().take(500).collect()
            }
        })
}

// ── Adapter ────────────────────────────────────────────────────

/// Gemini-backed [`GenerativeProvider`].
pub struct GeminiProvider {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create an adapter from `config`.
    ///
    /// # Errors
    /// Returns a provider error when the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PlannerError::Provider(format!("cannot build HTTP client: {e}")))?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl GenerativeProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let prompt = build_prompt(request);
        tracing::debug!(chars = prompt.len(), "sending generation prompt");

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Gemini request failed");
                PlannerError::Provider(format!("connection error: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read body".into());
            tracing::error!(status = %status, body = %body, "Gemini request returned error");
            return Err(map_http_error(status, &body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| PlannerError::Provider(format!("malformed provider response: {e}")))?;

        let Some(text) = parsed.first_candidate_text() else {
            return Err(PlannerError::Provider(
                "response carried no candidates".to_owned(),
            ));
        };
        if text.trim().is_empty() {
            return Err(PlannerError::Provider(
                "provider returned an empty response".to_owned(),
            ));
        }

        tracing::debug!(chars = text.len(), "generation response received");
        Ok(text)
    }
}
