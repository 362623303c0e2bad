//! Event CRUD gateway.
//!
//! Every edit passes validation before it touches the store, so a rejected
//! edit leaves the schedule exactly as it was. Deleting is the one
//! exception: removing an id that is not present is a silent no-op.

use tracing::debug;
use uuid::Uuid;

use crate::error::{PlannerError, Result};
use crate::schedule::clock::{is_valid_time, validate_range};
use crate::schedule::{Schedule, ScheduleEvent, Weekday};
use crate::store::ScheduleStore;

/// Field set for a new event. The id is assigned on creation.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub week_day: Weekday,
    pub start_time: String,
    pub end_time: String,
}

/// Partial field set for updating an existing event. `None` keeps the
/// stored value.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub week_day: Option<Weekday>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Why a proposed event was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title cannot be empty")]
    TitleEmpty,
    #[error("start time {0:?} is not a valid time")]
    StartTimeInvalid(String),
    #[error("end time {0:?} is not a valid time")]
    EndTimeInvalid(String),
    #[error("end time {end:?} is not after start time {start:?}")]
    EndNotAfterStart { start: String, end: String },
}

fn validate_event(title: &str, start: &str, end: &str) -> std::result::Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::TitleEmpty);
    }
    if !is_valid_time(start) {
        return Err(ValidationError::StartTimeInvalid(start.to_owned()));
    }
    if !is_valid_time(end) {
        return Err(ValidationError::EndTimeInvalid(end.to_owned()));
    }
    if !validate_range(start, end) {
        return Err(ValidationError::EndNotAfterStart {
            start: start.to_owned(),
            end: end.to_owned(),
        });
    }
    Ok(())
}

/// Validate `draft` and add it to the schedule under a fresh id.
///
/// # Errors
/// Returns a validation error when the draft is rejected; the store is not
/// touched in that case.
pub fn create_event(store: &ScheduleStore, draft: EventDraft) -> Result<ScheduleEvent> {
    validate_event(&draft.title, &draft.start_time, &draft.end_time)?;

    let snapshot = store.snapshot()?;
    let mut id = Uuid::new_v4().to_string();
    while snapshot.contains(&id) {
        id = Uuid::new_v4().to_string();
    }

    let event = ScheduleEvent {
        id,
        title: draft.title,
        description: draft.description,
        week_day: draft.week_day.label().to_owned(),
        start_time: draft.start_time,
        end_time: draft.end_time,
    };
    store.upsert(event.clone())?;
    debug!(id = %event.id, "event created");
    Ok(event)
}

/// Apply `patch` to the stored event `id`, committing only when the merged
/// result validates. Untouched fields keep their stored values; on any
/// failure the store is unchanged.
///
/// # Errors
/// Returns [`PlannerError::UnknownEvent`] when `id` is not in the schedule,
/// or a validation error when the merged event is rejected.
pub fn update_event(store: &ScheduleStore, id: &str, patch: EventPatch) -> Result<ScheduleEvent> {
    let Some(mut event) = store.get(id)? else {
        return Err(PlannerError::UnknownEvent(id.to_owned()));
    };

    if let Some(title) = patch.title {
        event.title = title;
    }
    if let Some(description) = patch.description {
        event.description = description;
    }
    if let Some(week_day) = patch.week_day {
        event.week_day = week_day.label().to_owned();
    }
    if let Some(start_time) = patch.start_time {
        event.start_time = start_time;
    }
    if let Some(end_time) = patch.end_time {
        event.end_time = end_time;
    }

    validate_event(&event.title, &event.start_time, &event.end_time)?;

    store.upsert(event.clone())?;
    debug!(id = %event.id, "event updated");
    Ok(event)
}

/// Remove event `id` from the schedule. Returns whether an event was
/// removed; an absent id is a no-op, not an error.
pub fn delete_event(store: &ScheduleStore, id: &str) -> Result<bool> {
    store.remove(id)
}

/// Replace the whole schedule from hand-edited document text.
///
/// The text must strictly decode as a schedule document.
///
/// # Errors
/// Returns a parse error when the text does not decode; the current
/// schedule is kept in that case.
pub fn replace_from_text(store: &ScheduleStore, raw: &str) -> Result<Schedule> {
    let schedule: Schedule = serde_json::from_str(raw)
        .map_err(|e| PlannerError::Parse(format!("schedule document: {e}")))?;
    store.replace(schedule.clone())?;
    Ok(schedule)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::store::MemoryStorage;

    fn store() -> ScheduleStore {
        ScheduleStore::open(MemoryStorage::new())
    }

    fn draft(title: &str, start: &str, end: &str) -> EventDraft {
        EventDraft {
            title: title.to_owned(),
            description: String::new(),
            week_day: Weekday::Monday,
            start_time: start.to_owned(),
            end_time: end.to_owned(),
        }
    }

    #[test]
    fn create_assigns_a_fresh_id_and_stores_the_event() {
        let store = store();
        let event = create_event(&store, draft("Gym", "09:00", "10:30")).unwrap();
        assert!(!event.id.is_empty());
        assert_eq!(event.week_day, "Monday");
        assert_eq!(store.get(&event.id).unwrap().unwrap().title, "Gym");
    }

    #[test]
    fn create_twice_never_reuses_an_id() {
        let store = store();
        let a = create_event(&store, draft("One", "09:00", "10:00")).unwrap();
        let b = create_event(&store, draft("Two", "09:00", "10:00")).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn create_rejects_empty_title() {
        let store = store();
        let err = create_event(&store, draft("   ", "09:00", "10:00")).unwrap_err();
        assert!(matches!(
            err,
            PlannerError::Validation(ValidationError::TitleEmpty)
        ));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn create_rejects_invalid_times() {
        let store = store();
        assert!(matches!(
            create_event(&store, draft("Gym", "25:00", "26:00")).unwrap_err(),
            PlannerError::Validation(ValidationError::StartTimeInvalid(_))
        ));
        assert!(matches!(
            create_event(&store, draft("Gym", "09:00", "later")).unwrap_err(),
            PlannerError::Validation(ValidationError::EndTimeInvalid(_))
        ));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn create_rejects_backwards_and_zero_length_ranges() {
        let store = store();
        assert!(matches!(
            create_event(&store, draft("Gym", "10:00", "09:00")).unwrap_err(),
            PlannerError::Validation(ValidationError::EndNotAfterStart { .. })
        ));
        assert!(matches!(
            create_event(&store, draft("Gym", "09:00", "09:00")).unwrap_err(),
            PlannerError::Validation(ValidationError::EndNotAfterStart { .. })
        ));
    }

    #[test]
    fn update_merges_patch_fields() {
        let store = store();
        let event = create_event(&store, draft("Gym", "09:00", "10:00")).unwrap();

        let updated = update_event(
            &store,
            &event.id,
            EventPatch {
                title: Some("Pool".to_owned()),
                week_day: Some(Weekday::Friday),
                ..EventPatch::default()
            },
        )
        .unwrap();

        assert_eq!(updated.title, "Pool");
        assert_eq!(updated.week_day, "Friday");
        assert_eq!(updated.start_time, "09:00");
        assert_eq!(store.get(&event.id).unwrap().unwrap().title, "Pool");
    }

    #[test]
    fn failed_update_leaves_the_stored_event_untouched() {
        let store = store();
        let event = create_event(&store, draft("Gym", "09:00", "10:00")).unwrap();

        let err = update_event(
            &store,
            &event.id,
            EventPatch {
                start_time: Some("10:00".to_owned()),
                end_time: Some("09:00".to_owned()),
                ..EventPatch::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, PlannerError::Validation(_)));

        let stored = store.get(&event.id).unwrap().unwrap();
        assert_eq!(stored.start_time, "09:00");
        assert_eq!(stored.end_time, "10:00");
    }

    #[test]
    fn update_of_unknown_id_is_an_error() {
        let store = store();
        let err = update_event(&store, "missing", EventPatch::default()).unwrap_err();
        assert!(matches!(err, PlannerError::UnknownEvent(id) if id == "missing"));
    }

    #[test]
    fn empty_patch_revalidates_but_changes_nothing() {
        let store = store();
        let event = create_event(&store, draft("Gym", "09:00", "10:00")).unwrap();
        let updated = update_event(&store, &event.id, EventPatch::default()).unwrap();
        assert_eq!(updated, event);
    }

    #[test]
    fn delete_is_a_no_op_for_absent_ids() {
        let store = store();
        let event = create_event(&store, draft("Gym", "09:00", "10:00")).unwrap();
        assert!(delete_event(&store, &event.id).unwrap());
        assert!(!delete_event(&store, &event.id).unwrap());
        assert!(!delete_event(&store, "missing").unwrap());
    }

    #[test]
    fn replace_from_text_swaps_the_schedule() {
        let store = store();
        create_event(&store, draft("Gym", "09:00", "10:00")).unwrap();

        let raw = r#"{"schedule": [{"id": "x", "title": "Lunch", "week_day": "Tuesday",
            "start_time": "12:00", "end_time": "13:00"}]}"#;
        let schedule = replace_from_text(&store, raw).unwrap();
        assert_eq!(schedule.len(), 1);
        assert_eq!(store.len().unwrap(), 1);
        assert!(store.get("x").unwrap().is_some());
    }

    #[test]
    fn replace_from_text_rejects_malformed_documents() {
        let store = store();
        create_event(&store, draft("Gym", "09:00", "10:00")).unwrap();

        for raw in ["", "not json", r#"{"schedule": 7}"#, r#"{"other": []}"#] {
            let err = replace_from_text(&store, raw).unwrap_err();
            assert!(matches!(err, PlannerError::Parse(_)), "input {raw:?}");
        }
        assert_eq!(store.len().unwrap(), 1);
    }
}
