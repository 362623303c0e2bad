//! Schedule entities: weekday labels, events, and the schedule document.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The seven canonical weekday labels, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in display order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// The canonical label, e.g. `"Monday"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Parse a weekday label, ignoring case and surrounding whitespace.
    /// Returns `None` for anything that is not one of the seven labels.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|day| day.label().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string is not one of the seven weekday labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized weekday label: {0:?}")]
pub struct UnknownWeekday(pub String);

impl std::str::FromStr for Weekday {
    type Err = UnknownWeekday;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownWeekday(s.to_owned()))
    }
}

/// A single recurring commitment on the weekly timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    /// Opaque identifier, unique within one schedule.
    pub id: String,
    /// Short human-readable name.
    pub title: String,
    /// Longer free-text detail; empty when the event needs none.
    #[serde(default)]
    pub description: String,
    /// Weekday label. Kept as text so an off-template label from the
    /// provider survives the document decode and is discarded at display
    /// time instead of failing the whole schedule.
    pub week_day: String,
    /// Time string; only the embedded hour:minute is interpreted.
    pub start_time: String,
    /// Time string; only the embedded hour:minute is interpreted.
    pub end_time: String,
}

impl ScheduleEvent {
    /// The weekday this event belongs to, when its label is recognized.
    #[must_use]
    pub fn weekday(&self) -> Option<Weekday> {
        Weekday::parse(&self.week_day)
    }
}

/// Wire shape of a schedule: `{"schedule": [<event>, ...]}`.
///
/// This is the document the generative provider is asked to produce, the
/// format hand-edited text must match, and the persisted form.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScheduleDocument {
    schedule: Vec<ScheduleEvent>,
}

/// The full set of events for one planning session, keyed by event id.
///
/// Iteration order is deterministic (id order); the order events arrived in
/// carries no meaning. Serializes as a [`ScheduleDocument`]; decoding a
/// document with duplicate ids keeps the last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ScheduleDocument", into = "ScheduleDocument")]
pub struct Schedule {
    events: BTreeMap<String, ScheduleEvent>,
}

impl Schedule {
    /// An empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schedule from events. When two events share an id the later
    /// one wins.
    pub fn from_events(events: impl IntoIterator<Item = ScheduleEvent>) -> Self {
        let mut schedule = Self::new();
        for event in events {
            schedule.insert(event);
        }
        schedule
    }

    /// Number of events held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` when no events are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns `true` when an event with `id` is present.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.events.contains_key(id)
    }

    /// The event stored under `id`, if any.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ScheduleEvent> {
        self.events.get(id)
    }

    /// Insert an event, returning the one it displaced when the id was
    /// already taken.
    pub fn insert(&mut self, event: ScheduleEvent) -> Option<ScheduleEvent> {
        self.events.insert(event.id.clone(), event)
    }

    /// Remove and return the event stored under `id`.
    pub fn remove(&mut self, id: &str) -> Option<ScheduleEvent> {
        self.events.remove(id)
    }

    /// Iterate events in id order.
    pub fn events(&self) -> impl Iterator<Item = &ScheduleEvent> {
        self.events.values()
    }
}

impl From<ScheduleDocument> for Schedule {
    fn from(doc: ScheduleDocument) -> Self {
        Self::from_events(doc.schedule)
    }
}

impl From<Schedule> for ScheduleDocument {
    fn from(schedule: Schedule) -> Self {
        Self {
            schedule: schedule.events.into_values().collect(),
        }
    }
}
