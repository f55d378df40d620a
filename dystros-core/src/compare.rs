//! Chronological ordering of events.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::component::{Component, EventTime};
use crate::error::DystrosResult;

/// Sort key derived from a DTSTART value.
///
/// Bare dates sort at `00:00`, ahead of any timed value on the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartKey {
    pub day: NaiveDate,
    pub hour: u32,
    pub minute: u32,
}

impl StartKey {
    pub fn from_event_time(time: &EventTime) -> Self {
        let (hour, minute) = time.time_of_day();
        StartKey {
            day: time.date(),
            hour,
            minute,
        }
    }

    pub fn of(component: &Component) -> DystrosResult<Self> {
        component.require_start().map(Self::from_event_time)
    }

    /// Day first, then hour, then minute.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.day
            .cmp(&other.day)
            .then_with(|| self.hour.cmp(&other.hour))
            .then_with(|| self.minute.cmp(&other.minute))
    }
}

/// Compare two events by their start.
///
/// Fails if either one has no DTSTART.
pub fn cmp_event(a: &Component, b: &Component) -> DystrosResult<Ordering> {
    Ok(StartKey::of(a)?.compare(&StartKey::of(b)?))
}

/// Stable sort by start. Fails, without sorting anything, if any event has
/// no DTSTART.
pub fn sort_events(events: Vec<Component>) -> DystrosResult<Vec<Component>> {
    let mut keyed = events
        .into_iter()
        .map(|e| StartKey::of(&e).map(|key| (key, e)))
        .collect::<DystrosResult<Vec<_>>>()?;

    keyed.sort_by(|(a, _), (b, _)| a.compare(b));

    Ok(keyed.into_iter().map(|(_, e)| e).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentKind;
    use crate::error::DystrosError;
    use chrono::{TimeZone, Utc};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, 1, d).unwrap()
    }

    fn event(uid: &str, start: Option<EventTime>) -> Component {
        let mut c = Component::new(ComponentKind::Event);
        c.uid = Some(uid.to_string());
        c.start = start;
        c
    }

    fn at(d: u32, hour: u32, minute: u32) -> Option<EventTime> {
        Some(EventTime::DateTimeFloating(
            day(d).and_hms_opt(hour, minute, 0).unwrap(),
        ))
    }

    fn all_day(d: u32) -> Option<EventTime> {
        Some(EventTime::Date(day(d)))
    }

    #[test]
    fn test_earlier_day_sorts_first() {
        let a = event("a", at(1, 23, 59));
        let b = event("b", all_day(2));

        assert_eq!(cmp_event(&a, &b).unwrap(), Ordering::Less);
        assert_eq!(cmp_event(&b, &a).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_all_day_sorts_before_timed_on_same_day() {
        let a = event("a", all_day(3));
        let b = event("b", at(3, 0, 1));

        assert_eq!(cmp_event(&a, &b).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_midnight_equals_all_day() {
        let a = event("a", all_day(3));
        let b = event("b", at(3, 0, 0));

        assert_eq!(cmp_event(&a, &b).unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_seconds_are_ignored() {
        let a = event(
            "a",
            Some(EventTime::DateTimeUtc(
                Utc.with_ymd_and_hms(2016, 1, 3, 10, 15, 1).unwrap(),
            )),
        );
        let b = event(
            "b",
            Some(EventTime::DateTimeUtc(
                Utc.with_ymd_and_hms(2016, 1, 3, 10, 15, 59).unwrap(),
            )),
        );

        assert_eq!(cmp_event(&a, &b).unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_zones_are_not_normalised() {
        // 09:00 in New York is later than 10:00 UTC, but the literal hour wins
        let a = event(
            "a",
            Some(EventTime::DateTimeZoned {
                datetime: day(3).and_hms_opt(9, 0, 0).unwrap(),
                tzid: "America/New_York".to_string(),
            }),
        );
        let b = event("b", at(3, 10, 0));

        assert_eq!(cmp_event(&a, &b).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_missing_start_is_an_error() {
        let a = event("a", None);
        let b = event("b", all_day(1));

        let err = cmp_event(&a, &b).unwrap_err();
        assert!(matches!(err, DystrosError::MissingField { field: "DTSTART", .. }));
    }

    #[test]
    fn test_sort_events_is_stable() {
        let events = vec![
            event("late", at(5, 9, 0)),
            event("first-of-day", all_day(2)),
            event("also-midnight", at(2, 0, 0)),
            event("morning", at(2, 8, 30)),
        ];

        let events = sort_events(events).unwrap();

        let uids: Vec<_> = events.iter().map(|e| e.uid.clone().unwrap()).collect();
        assert_eq!(uids, vec!["first-of-day", "also-midnight", "morning", "late"]);
    }

    #[test]
    fn test_sort_events_fails_on_missing_start() {
        let events = vec![event("b", all_day(2)), event("none", None), event("a", all_day(1))];

        let err = sort_events(events).unwrap_err();
        assert!(matches!(err, DystrosError::MissingField { .. }));
    }
}
