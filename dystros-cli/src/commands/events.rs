use anyhow::Result;
use dystros_core::compare::sort_events;
use dystros_core::{CollectionSet, DystrosResult, Status};
use owo_colors::OwoColorize;

use crate::render::event_line;

pub fn run(collections: CollectionSet) -> Result<()> {
    let events = collections.events().collect::<DystrosResult<Vec<_>>>()?;
    let events = sort_events(events)?;

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for event in &events {
        let line = event_line(event);
        match event.status {
            Some(Status::Cancelled) => println!("{}", line.strikethrough()),
            Some(Status::Tentative) => println!("{}", line.dimmed()),
            _ => println!("{}", line),
        }
    }

    Ok(())
}
