//! Short human-readable labels for statuses and dates.

use chrono::{Datelike, NaiveDate};

use crate::component::{EventTime, Status};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Convert an event status to a single status character.
///
/// Returns an empty string for statuses without a character, or no status.
pub fn statuschar(status: Option<&Status>) -> &'static str {
    match status {
        Some(Status::Tentative) => "?",
        Some(Status::Confirmed) => ".",
        Some(Status::Cancelled) => "-",
        _ => "",
    }
}

/// English three-letter month name, independent of the locale.
pub fn format_month(date: &impl Datelike) -> &'static str {
    MONTH_ABBREVIATIONS[date.month0() as usize]
}

/// Compact label for a date range, e.g. `3 Mar`, `3-5 Mar`, `3 Mar-1 Apr`, or
/// `3 Mar-?` when the end is unknown.
///
/// Only months are compared, not years.
pub fn format_daterange(start: NaiveDate, end: Option<NaiveDate>) -> String {
    let Some(end) = end else {
        return format!("{} {}-?", start.day(), format_month(&start));
    };

    if start.month() == end.month() {
        if start.day() == end.day() {
            return format!("{} {}", start.day(), format_month(&start));
        }
        return format!("{}-{} {}", start.day(), end.day(), format_month(&start));
    }

    format!(
        "{} {}-{} {}",
        start.day(),
        format_month(&start),
        end.day(),
        format_month(&end)
    )
}

/// `HH:MM` for timed values, `None` for all-day ones.
pub fn format_time(time: &EventTime) -> Option<String> {
    if time.is_all_day() {
        return None;
    }
    let (hour, minute) = time.time_of_day();
    Some(format!("{:02}:{:02}", hour, minute))
}
