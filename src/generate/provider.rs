//! Provider seam for generative schedule synthesis.
//!
//! Defines the [`GenerativeProvider`] trait the regeneration coordinator
//! drives. Adapters own their transport and prompt rendering and hand raw
//! response text back; decoding stays with the caller.

use async_trait::async_trait;

use crate::error::Result;

/// Inputs for one synthesis call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Ordered free-text requirement lines. For a revision of an existing
    /// schedule this is the serialized schedule document itself.
    pub requirements: Vec<String>,
    /// Free-text description of requested changes, for revisions.
    pub change_request: Option<String>,
}

impl GenerationRequest {
    /// Request built from requirement lines.
    #[must_use]
    pub fn from_requirements(requirements: Vec<String>) -> Self {
        Self {
            requirements,
            change_request: None,
        }
    }

    /// Attach a change description.
    #[must_use]
    pub fn with_change(mut self, change: impl Into<String>) -> Self {
        self.change_request = Some(change.into());
        self
    }
}

/// A generative text service that drafts weekly schedules.
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Provider name for logs (e.g. `"gemini"`).
    fn name(&self) -> &str;

    /// Produce schedule-document text for `request`.
    ///
    /// # Errors
    /// Returns a provider error on transport failure, a rejected request,
    /// or an empty response.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}
