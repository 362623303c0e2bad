//! Generative schedule synthesis.
//!
//! [`Regenerator`] drives a [`GenerativeProvider`] and applies decoded
//! candidates to the schedule store as full replacements. The provider
//! seam keeps prompt rendering and transport out of the core; [`gemini`]
//! is the shipped adapter.

pub mod coordinator;
pub mod gemini;
pub mod parse;
pub mod prompt;
pub mod provider;

pub use coordinator::Regenerator;
pub use gemini::{GeminiConfig, GeminiProvider};
pub use parse::parse_schedule_response;
pub use prompt::build_prompt;
pub use provider::{GenerationRequest, GenerativeProvider};
