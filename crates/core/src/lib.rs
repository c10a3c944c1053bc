//! # Timelog Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Interval construction and validation for manually logged timelines
//! - Writing todos for the selected date
//! - Form state and schedule-day arithmetic
//! - Port/adapter interfaces (traits)
//! - Use cases and services
//!
//! ## Architecture Principles
//! - Only depends on `timelog-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod account;
pub mod timeline;
pub mod todo;
pub mod utils;

// Re-export specific items to avoid ambiguity
pub use account::SignUpForm;
pub use timeline::builder::{resolve_calendar_date, Boundary, IntervalBuilder, IntervalParams};
pub use timeline::form::{ActivityLabel, TimelineForm};
pub use timeline::ports::{ActivityLookup, Clock, Notifier, TimelineRepository};
pub use timeline::schedule::{HourRow, ScheduleDay};
pub use timeline::selected_date::SelectedDate;
pub use timeline::{Submission, TimelineService};
pub use todo::{
    todo_start_date, TodoCommand, TodoForm, TodoRepository, TodoService, TodoSubmission,
};
pub use utils::format::format_execution_time;
