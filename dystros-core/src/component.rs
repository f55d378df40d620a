//! Calendar components (VEVENT / VTODO) as read from a collection.
//!
//! Values are decided once, when the .ics text is converted, so callers never
//! need to probe whether a start time carries a time of day.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};

use crate::error::{DystrosError, DystrosResult};

/// The kind tag of a calendar sub-component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// VEVENT
    Event,
    /// VTODO
    Todo,
    /// Anything else (VTIMEZONE, VJOURNAL, X- components, ...)
    Other(String),
}

impl ComponentKind {
    pub fn from_ics_str(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "VEVENT" => ComponentKind::Event,
            "VTODO" => ComponentKind::Todo,
            _ => ComponentKind::Other(name.to_string()),
        }
    }

    pub fn as_ics_str(&self) -> &str {
        match self {
            ComponentKind::Event => "VEVENT",
            ComponentKind::Todo => "VTODO",
            ComponentKind::Other(name) => name,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_ics_str())
    }
}

/// Value of the STATUS property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Tentative,
    Confirmed,
    Cancelled,
    NeedsAction,
    Completed,
    InProcess,
    Other(String),
}

impl Status {
    pub fn from_ics_str(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "TENTATIVE" => Status::Tentative,
            "CONFIRMED" => Status::Confirmed,
            "CANCELLED" => Status::Cancelled,
            "NEEDS-ACTION" => Status::NeedsAction,
            "COMPLETED" => Status::Completed,
            "IN-PROCESS" => Status::InProcess,
            _ => Status::Other(s.to_string()),
        }
    }
}

/// A start or end value: either a bare date or a date-time.
///
/// Date-times keep whatever zone information the file carried; nothing here
/// converts between zones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventTime {
    Date(NaiveDate),
    DateTimeUtc(DateTime<Utc>),
    DateTimeFloating(NaiveDateTime),
    DateTimeZoned {
        datetime: NaiveDateTime,
        tzid: String,
    },
}

impl EventTime {
    pub fn is_all_day(&self) -> bool {
        matches!(self, EventTime::Date(_))
    }

    /// The calendar day of this value, truncating any time of day.
    pub fn date(&self) -> NaiveDate {
        match self {
            EventTime::Date(d) => *d,
            EventTime::DateTimeUtc(dt) => dt.date_naive(),
            EventTime::DateTimeFloating(dt) => dt.date(),
            EventTime::DateTimeZoned { datetime, .. } => datetime.date(),
        }
    }

    /// `(hour, minute)` as written in the file; `(0, 0)` for bare dates.
    pub fn time_of_day(&self) -> (u32, u32) {
        match self {
            EventTime::Date(_) => (0, 0),
            EventTime::DateTimeUtc(dt) => (dt.hour(), dt.minute()),
            EventTime::DateTimeFloating(dt) => (dt.hour(), dt.minute()),
            EventTime::DateTimeZoned { datetime, .. } => (datetime.hour(), datetime.minute()),
        }
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EventTime::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            EventTime::DateTimeUtc(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M UTC")),
            EventTime::DateTimeFloating(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M")),
            EventTime::DateTimeZoned { datetime, tzid } => {
                write!(f, "{} {}", datetime.format("%Y-%m-%d %H:%M"), tzid)
            }
        }
    }
}

/// A single sub-component of a calendar document.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub kind: ComponentKind,
    pub uid: Option<String>,
    pub summary: Option<String>,
    pub location: Option<String>,
    pub status: Option<Status>,
    /// DTSTART
    pub start: Option<EventTime>,
    /// DTEND for events, DUE for tasks
    pub end: Option<EventTime>,
    /// Every other property, in file order
    pub properties: Vec<(String, String)>,
}

impl Component {
    pub fn new(kind: ComponentKind) -> Self {
        Component {
            kind,
            uid: None,
            summary: None,
            location: None,
            status: None,
            start: None,
            end: None,
            properties: Vec::new(),
        }
    }

    pub fn is_event(&self) -> bool {
        self.kind == ComponentKind::Event
    }

    pub fn is_todo(&self) -> bool {
        self.kind == ComponentKind::Todo
    }

    /// Look up a property that has no dedicated field.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// DTSTART, or a [`DystrosError::MissingField`] naming this component.
    pub fn require_start(&self) -> DystrosResult<&EventTime> {
        self.start.as_ref().ok_or_else(|| DystrosError::MissingField {
            field: "DTSTART",
            summary: self.summary.clone(),
        })
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.summary.as_deref().unwrap_or("(No title)"))
    }
}
