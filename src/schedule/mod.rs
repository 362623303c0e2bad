//! Schedule domain model.
//!
//! Events and the id-keyed schedule container, clock arithmetic over the
//! time strings events carry, and the weekday grouping used for display.

pub mod clock;
pub mod event;
pub mod week;

pub use event::{Schedule, ScheduleEvent, UnknownWeekday, Weekday};
pub use week::group_by_weekday;
