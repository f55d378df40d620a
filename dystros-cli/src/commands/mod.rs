pub mod events;
pub mod todos;
