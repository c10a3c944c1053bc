//! Domain types and models

pub mod account;
pub mod activity;
pub mod ids;
pub mod interval;
pub mod notice;

pub use account::SignUpField;
pub use activity::{default_selection, ActivitySelection, Category, NewTodo, Todo};
pub use ids::{ActivityId, CategoryId, OwnerId};
pub use interval::{TimeFieldKind, TimeInterval, TimelineAction, TimelineEntry};
pub use notice::{Notice, NoticeKind, NoticePosition};
