//! ICS parsing using the icalendar crate's parser.

use crate::component::{Component, ComponentKind, EventTime, Status};
use crate::document::CalendarDocument;
use crate::error::{DystrosError, DystrosResult};
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{self, Property, read_calendar, unfold},
};

/// Parse ICS content into a [`CalendarDocument`].
///
/// Every top-level sub-component of the VCALENDAR becomes one [`Component`],
/// in document order.
pub fn parse_calendar(content: &str) -> DystrosResult<CalendarDocument> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let unfolded = unfold(content);

    let first_line = unfolded.lines().map(str::trim).find(|l| !l.is_empty());
    if !first_line.is_some_and(|l| l.eq_ignore_ascii_case("BEGIN:VCALENDAR")) {
        return Err(DystrosError::parse("missing BEGIN:VCALENDAR"));
    }

    let calendar = read_calendar(&unfolded).map_err(|e| DystrosError::parse(e.to_string()))?;

    let properties = calendar
        .properties
        .iter()
        .map(|p| (p.name.to_string(), p.val.to_string()))
        .collect();

    let components = calendar
        .components
        .iter()
        .map(to_component)
        .collect::<DystrosResult<Vec<_>>>()?;

    Ok(CalendarDocument::new(properties, components))
}

fn to_component(raw: &parser::Component) -> DystrosResult<Component> {
    let kind = ComponentKind::from_ics_str(raw.name.as_ref());
    let mut component = Component::new(kind);

    // Tasks carry their deadline in DUE rather than DTEND
    let end_name = if component.is_todo() { "DUE" } else { "DTEND" };

    for prop in &raw.properties {
        let name = prop.name.to_string().to_ascii_uppercase();
        match name.as_str() {
            "UID" => component.uid = Some(prop.val.to_string()),
            "SUMMARY" => component.summary = Some(prop.val.to_string()),
            "LOCATION" => component.location = Some(prop.val.to_string()),
            "STATUS" => component.status = Some(Status::from_ics_str(prop.val.as_ref())),
            "DTSTART" => component.start = Some(parse_event_time(prop)?),
            n if n == end_name => component.end = Some(parse_event_time(prop)?),
            _ => component
                .properties
                .push((prop.name.to_string(), prop.val.to_string())),
        }
    }

    Ok(component)
}

/// Parse a date or date-time property, preserving timezone info
fn parse_event_time(prop: &Property) -> DystrosResult<EventTime> {
    let dpt = DatePerhapsTime::try_from(prop)
        .map_err(|_| DystrosError::parse(format!("invalid {} value '{}'", prop.name, prop.val)))?;

    Ok(to_event_time(dpt))
}

/// Convert icalendar's DatePerhapsTime to our EventTime
fn to_event_time(dpt: DatePerhapsTime) -> EventTime {
    match dpt {
        DatePerhapsTime::Date(d) => EventTime::Date(d),
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::Utc(dt) => EventTime::DateTimeUtc(dt),
            CalendarDateTime::Floating(naive) => EventTime::DateTimeFloating(naive),
            CalendarDateTime::WithTimezone { date_time, tzid } => EventTime::DateTimeZoned {
                datetime: date_time,
                tzid,
            },
        },
    }
}
