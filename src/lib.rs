//! Weekplan: the schedule core of an AI-assisted weekly planner.
//!
//! A user describes recurring commitments in free text, a generative text
//! service drafts a concrete weekly timetable, and this crate owns
//! everything after that: the typed schedule model, clock validation and
//! 12-hour display formatting, weekday grouping, a persisting store, a
//! validating edit gateway, and the regeneration coordinator that swaps in
//! newly generated schedules.
//!
//! # Architecture
//!
//! - **`schedule`**: entities plus pure functions over them (clock
//!   arithmetic, weekday grouping)
//! - **`store`**: canonical schedule ownership with key-value persistence
//! - **`editor`**: validated create/update/delete and manual document import
//! - **`generate`**: provider seam, the Gemini adapter, response decoding,
//!   and the idle/pending regeneration discipline
//! - **`config`** / **`paths`**: TOML configuration and platform directories
//!
//! Schedules travel between these parts as one JSON document shape,
//! `{"schedule": [...]}`: it is what the provider is prompted to produce,
//! what hand edits must decode as, and what the store persists.

pub mod config;
pub mod editor;
pub mod error;
pub mod generate;
pub mod paths;
pub mod schedule;
pub mod store;

pub use config::PlannerConfig;
pub use error::{PlannerError, Result};
pub use generate::{
    GeminiConfig, GeminiProvider, GenerationRequest, GenerativeProvider, Regenerator,
};
pub use schedule::{Schedule, ScheduleEvent, Weekday, group_by_weekday};
pub use store::{FileStorage, MemoryStorage, ScheduleStore, StorageBackend};
