//! Weekday grouping for schedule display.

use std::collections::BTreeMap;

use tracing::debug;

use crate::schedule::clock::compare_time;
use crate::schedule::event::{Schedule, ScheduleEvent, Weekday};

/// Partition a schedule into the seven weekday buckets, each sorted by
/// start time, earliest first.
///
/// All seven keys are always present, empty days included, so rendering
/// code never probes for missing entries. Events whose `week_day` is not
/// one of the seven labels (any casing) are left out of every bucket; they
/// stay in the schedule itself. The sort is stable: events sharing a start
/// time keep the schedule's deterministic id order.
#[must_use]
pub fn group_by_weekday(schedule: &Schedule) -> BTreeMap<Weekday, Vec<ScheduleEvent>> {
    let mut days: BTreeMap<Weekday, Vec<ScheduleEvent>> =
        Weekday::ALL.into_iter().map(|day| (day, Vec::new())).collect();

    for event in schedule.events() {
        match event.weekday() {
            Some(day) => days.entry(day).or_default().push(event.clone()),
            None => debug!(
                id = %event.id,
                week_day = %event.week_day,
                "skipping event with unrecognized weekday"
            ),
        }
    }

    for bucket in days.values_mut() {
        bucket.sort_by(|a, b| compare_time(&a.start_time, &b.start_time));
    }

    days
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn event(id: &str, day: &str, start: &str) -> ScheduleEvent {
        ScheduleEvent {
            id: id.to_owned(),
            title: format!("event {id}"),
            description: String::new(),
            week_day: day.to_owned(),
            start_time: start.to_owned(),
            end_time: "23:59".to_owned(),
        }
    }

    #[test]
    fn all_seven_days_present_even_when_empty() {
        let days = group_by_weekday(&Schedule::new());
        assert_eq!(days.len(), 7);
        assert!(days.values().all(Vec::is_empty));
    }

    #[test]
    fn events_land_on_their_day_sorted_by_start() {
        let schedule = Schedule::from_events([
            event("a", "Monday", "14:00"),
            event("b", "Monday", "09:00"),
            event("c", "Tuesday", "12:00"),
        ]);
        let days = group_by_weekday(&schedule);

        let monday: Vec<&str> = days[&Weekday::Monday].iter().map(|e| e.id.as_str()).collect();
        assert_eq!(monday, ["b", "a"]);
        assert_eq!(days[&Weekday::Tuesday].len(), 1);
        assert!(days[&Weekday::Wednesday].is_empty());
    }

    #[test]
    fn weekday_labels_match_any_casing() {
        let schedule = Schedule::from_events([event("a", "monday", "09:00")]);
        let days = group_by_weekday(&schedule);
        assert_eq!(days[&Weekday::Monday].len(), 1);
    }

    #[test]
    fn unrecognized_weekday_is_excluded_without_error() {
        let schedule = Schedule::from_events([
            event("a", "Caturday", "09:00"),
            event("b", "Sunday", "10:00"),
        ]);
        let days = group_by_weekday(&schedule);
        let total: usize = days.values().map(Vec::len).sum();
        assert_eq!(total, 1);
        assert_eq!(days[&Weekday::Sunday][0].id, "b");
    }

    #[test]
    fn equal_start_times_keep_id_order() {
        let schedule = Schedule::from_events([
            event("c", "Friday", "09:00"),
            event("a", "Friday", "09:00"),
            event("b", "Friday", "2025-01-18T09:00:00"),
        ]);
        let days = group_by_weekday(&schedule);
        let friday: Vec<&str> = days[&Weekday::Friday].iter().map(|e| e.id.as_str()).collect();
        assert_eq!(friday, ["a", "b", "c"]);
    }

    #[test]
    fn unreadable_start_times_sort_last() {
        let schedule = Schedule::from_events([
            event("a", "Monday", "whenever"),
            event("b", "Monday", "22:00"),
        ]);
        let days = group_by_weekday(&schedule);
        let monday: Vec<&str> = days[&Weekday::Monday].iter().map(|e| e.id.as_str()).collect();
        assert_eq!(monday, ["b", "a"]);
    }
}
