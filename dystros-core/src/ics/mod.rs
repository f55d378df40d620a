//! ICS parsing.
//!
//! This module turns .ics text (RFC 5545) into [`CalendarDocument`](crate::document::CalendarDocument)s.

mod parse;

pub use parse::parse_calendar;
