//! Core types for dystros.
//!
//! Reads iCalendar collections laid out as `<inputdir>/<kind>/*.ics` and
//! exposes their events and tasks:
//! - `loader` scans kind directories and parses each .ics file
//! - `extract` filters parsed documents down to VEVENTs or VTODOs
//! - `collection` ties both to an input directory and a list of kinds
//! - `compare` and `format` help present the results

pub mod collection;
pub mod compare;
pub mod component;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod format;
pub mod ics;
pub mod loader;

pub use collection::{CollectionConfig, CollectionSet};
pub use component::{Component, ComponentKind, EventTime, Status};
pub use document::CalendarDocument;
pub use error::{DystrosError, DystrosResult};
