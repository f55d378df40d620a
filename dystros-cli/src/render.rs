//! Plain-text lines for events and tasks.
//!
//! Coloring is left to the commands so these stay easy to compare.

use dystros_core::format::{format_daterange, format_time, statuschar};
use dystros_core::{Component, EventTime};

/// `<status><dates> [HH:MM] <summary>`, e.g. `?3-5 Mar Conference`.
pub fn event_line(event: &Component) -> String {
    let Some(start) = event.start.as_ref() else {
        return format!("{}{}", statuschar(event.status.as_ref()), event);
    };

    let dates = format_daterange(start.date(), end_date(start, event.end.as_ref()));

    let mut line = format!("{}{}", statuschar(event.status.as_ref()), dates);
    if let Some(time) = format_time(start) {
        line.push(' ');
        line.push_str(&time);
    }
    line.push(' ');
    line.push_str(&event.to_string());
    line
}

/// `<status> <summary> [(due <date>)]`
pub fn todo_line(todo: &Component) -> String {
    let mut line = format!("{} {}", statuschar(todo.status.as_ref()), todo);
    if let Some(due) = todo.end.as_ref() {
        let day = due.date();
        line.push_str(&format!(" (due {})", format_daterange(day, Some(day))));
    }
    line
}

/// All-day DTEND is exclusive; show the last day the event covers.
fn end_date(start: &EventTime, end: Option<&EventTime>) -> Option<chrono::NaiveDate> {
    let end = end?;
    match (start, end) {
        (EventTime::Date(s), EventTime::Date(e)) if e > s => e.pred_opt(),
        _ => Some(end.date()),
    }
}
