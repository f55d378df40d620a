use anyhow::Result;
use dystros_core::{CollectionSet, DystrosResult, Status};
use owo_colors::OwoColorize;

use crate::render::todo_line;

pub fn run(collections: CollectionSet) -> Result<()> {
    let todos = collections.todos().collect::<DystrosResult<Vec<_>>>()?;

    if todos.is_empty() {
        println!("{}", "No tasks found".dimmed());
        return Ok(());
    }

    for todo in &todos {
        let line = todo_line(todo);
        match todo.status {
            Some(Status::Completed) | Some(Status::Cancelled) => println!("{}", line.dimmed()),
            _ => println!("{}", line),
        }
    }

    Ok(())
}
