//! Categories, todos and the activity a timeline is logged against

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::ids::{ActivityId, CategoryId, OwnerId};

/// A todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Todo {
    pub id: ActivityId,
    pub title: String,
    pub category_id: CategoryId,
}

/// A todo written for a selected date, before the backend assigns its id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct NewTodo {
    pub title: String,
    pub category_id: CategoryId,
    pub owner_id: OwnerId,
    /// Schedule date the todo is listed under
    pub date: NaiveDate,
    /// First instant of `date` in the user's timezone
    pub start_date: DateTime<Utc>,
}

/// A category and the todos filed under it for one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    /// Display color, e.g. `#FF8A65`; todos inherit it.
    pub color: String,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

/// The todo chosen in the timeline form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ActivitySelection {
    pub id: ActivityId,
    pub color: String,
    pub title: String,
}

impl ActivitySelection {
    /// Select `todo`, painted with its category's color
    #[must_use]
    pub fn from_todo(todo: &Todo, color: &str) -> Self {
        Self { id: todo.id.clone(), color: color.to_string(), title: todo.title.clone() }
    }
}

/// Selection a fresh timeline form starts with.
///
/// Only the first category is considered: when it has no todos the form
/// starts empty even if later categories do.
#[must_use]
pub fn default_selection(categories: &[Category]) -> Option<ActivitySelection> {
    let category = categories.first()?;
    let todo = category.todos.first()?;
    Some(ActivitySelection::from_todo(todo, &category.color))
}
