//! Error types for the weekplan core.

use crate::editor::ValidationError;

/// Top-level error type for the schedule planner.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// Generative provider error (transport, HTTP status, timeout).
    #[error("provider error: {0}")]
    Provider(String),

    /// Text that should carry a schedule document does not decode as one.
    #[error("parse error: {0}")]
    Parse(String),

    /// A proposed event failed validation; nothing was committed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The targeted event id is not in the schedule.
    #[error("unknown event: {0}")]
    UnknownEvent(String),

    /// Storage backend read/write error.
    #[error("storage error: {0}")]
    Storage(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// A regeneration request arrived while another was still in flight.
    #[error("a regeneration is already in flight")]
    RegenerationPending,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, PlannerError>;
