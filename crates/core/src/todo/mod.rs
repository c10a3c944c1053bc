//! Writing todos for the selected date
//!
//! The form collects a title for a category; the service turns it into a
//! create or update against the todo repository.

pub mod form;
pub mod ports;
pub mod service;

pub use form::{todo_start_date, TodoCommand, TodoForm};
pub use ports::TodoRepository;
pub use service::{TodoService, TodoSubmission};
