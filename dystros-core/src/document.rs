//! A parsed .ics file.

use crate::component::Component;
use crate::error::DystrosResult;

/// The contents of one .ics file: calendar-level properties plus its
/// sub-components in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDocument {
    properties: Vec<(String, String)>,
    components: Vec<Component>,
}

impl CalendarDocument {
    pub fn new(properties: Vec<(String, String)>, components: Vec<Component>) -> Self {
        CalendarDocument {
            properties,
            components,
        }
    }

    pub fn parse(content: &str) -> DystrosResult<Self> {
        crate::ics::parse_calendar(content)
    }

    /// VCALENDAR-level properties such as VERSION and PRODID
    pub fn properties(&self) -> &[(String, String)] {
        &self.properties
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn into_components(self) -> Vec<Component> {
        self.components
    }
}
