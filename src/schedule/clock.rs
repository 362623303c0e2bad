//! Clock arithmetic over event time strings.
//!
//! Event times travel as text. The generative service emits full
//! `YYYY-MM-DDTHH:MM:SS` stamps (the date part is filler) while hand edits
//! are usually plain `HH:MM`, so every function here reads the embedded
//! 24-hour clock and ignores everything else: the clock component is the
//! substring after the last `T`, and a trailing seconds field is dropped.

use std::cmp::Ordering;

/// Sort key for times whose clock component cannot be read. Larger than any
/// valid minutes-since-midnight value, so unreadable times order last.
const UNREADABLE: u32 = u32::MAX;

/// The clock component of a time string: everything after the last `T`, or
/// the whole string when no `T` is present.
fn clock_component(s: &str) -> &str {
    match s.rfind('T') {
        Some(i) => &s[i + 1..],
        None => s,
    }
}

/// Split a clock component into its hour and minute fields, unparsed.
fn split_clock(s: &str) -> Option<(&str, &str)> {
    let mut parts = clock_component(s).splitn(3, ':');
    let hour = parts.next()?;
    let minute = parts.next()?;
    Some((hour, minute))
}

/// Parse a one or two digit field, rejecting values above `max`.
fn numeric_field(field: &str, max: u32) -> Option<u32> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u32 = field.parse().ok()?;
    (value <= max).then_some(value)
}

/// The embedded `(hour, minute)` of a time string, leniently parsed: each
/// field may be one or two digits. Comparison and display formatting go
/// through this so `"9:5"` still reads as 09:05 rather than misordering.
fn clock_fields(s: &str) -> Option<(u32, u32)> {
    let (hour, minute) = split_clock(s)?;
    Some((numeric_field(hour, 23)?, numeric_field(minute, 59)?))
}

/// Minutes since midnight of the embedded clock.
fn clock_minutes(s: &str) -> Option<u32> {
    clock_fields(s).map(|(hour, minute)| hour * 60 + minute)
}

/// Returns `true` when `s` carries a well-formed 24-hour clock: a one or two
/// digit hour in 0-23, a colon, and an exactly two digit minute in 0-59.
///
/// Accepts plain `"HH:MM"` and full stamps like `"2025-01-18T09:00:00"`;
/// rejects one-digit minutes (`"9:5"`), out-of-range fields (`"24:00"`,
/// `"12:60"`), and anything without a readable clock.
#[must_use]
pub fn is_valid_time(s: &str) -> bool {
    match split_clock(s) {
        Some((hour, minute)) => {
            minute.len() == 2
                && numeric_field(hour, 23).is_some()
                && numeric_field(minute, 59).is_some()
        }
        None => false,
    }
}

/// Chronological comparison of two time strings by minutes since midnight.
///
/// Unreadable times compare after every readable one and equal to each
/// other, so sorting never panics on malformed provider output.
#[must_use]
pub fn compare_time(a: &str, b: &str) -> Ordering {
    let ka = clock_minutes(a).unwrap_or(UNREADABLE);
    let kb = clock_minutes(b).unwrap_or(UNREADABLE);
    ka.cmp(&kb)
}

/// Render the embedded 24-hour clock as a 12-hour display string, e.g.
/// `"9:00 AM"`. Hour 0 renders as 12 AM and hour 12 as 12 PM; minutes are
/// always two digits. Returns `None` when no clock can be read.
#[must_use]
pub fn military_to_standard(s: &str) -> Option<String> {
    let (hour, minute) = clock_fields(s)?;
    let (display_hour, suffix) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    Some(format!("{display_hour}:{minute:02} {suffix}"))
}

/// Returns `true` when both times are valid and `end` is strictly after
/// `start`. Zero-length and backwards ranges are rejected.
#[must_use]
pub fn validate_range(start: &str, end: &str) -> bool {
    is_valid_time(start) && is_valid_time(end) && compare_time(start, end) == Ordering::Less
}
