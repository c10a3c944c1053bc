//! Todo form state

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use timelog_domain::{CategoryId, NewTodo, OwnerId, Todo, TodoError};

/// What submitting the form asks the repository to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoCommand {
    Create(NewTodo),
    Update(Todo),
}

/// Title and category being written, optionally for an existing todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoForm {
    editing: Option<Todo>,
    title: String,
    category_id: CategoryId,
}

impl TodoForm {
    /// Empty form for a new todo under `category_id`
    #[must_use]
    pub fn new(category_id: CategoryId) -> Self {
        Self { editing: None, title: String::new(), category_id }
    }

    /// Form prefilled from an existing todo
    #[must_use]
    pub fn edit(todo: &Todo) -> Self {
        Self {
            editing: Some(todo.clone()),
            title: todo.title.clone(),
            category_id: todo.category_id.clone(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    #[must_use]
    pub fn category_id(&self) -> &CategoryId {
        &self.category_id
    }

    /// File the todo under another category
    pub fn move_to(&mut self, category_id: CategoryId) {
        self.category_id = category_id;
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Validate the form for `selected_date`.
    ///
    /// The title is trimmed. New todos start at the first instant of the
    /// selected date in `tz`; edits keep their id and only change title and
    /// category.
    ///
    /// # Errors
    /// [`TodoError::EmptyTitle`] for a blank title, or
    /// [`TodoError::StartDateUnavailable`] when the date has no start instant.
    pub fn to_command(
        &self,
        selected_date: NaiveDate,
        owner_id: &OwnerId,
        tz: Tz,
    ) -> Result<TodoCommand, TodoError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TodoError::EmptyTitle);
        }

        if let Some(todo) = &self.editing {
            return Ok(TodoCommand::Update(Todo {
                id: todo.id.clone(),
                title: title.to_string(),
                category_id: self.category_id.clone(),
            }));
        }

        Ok(TodoCommand::Create(NewTodo {
            title: title.to_string(),
            category_id: self.category_id.clone(),
            owner_id: owner_id.clone(),
            date: selected_date,
            start_date: todo_start_date(selected_date, tz)?,
        }))
    }
}

/// Local midnight of `date` in `tz`, as UTC.
///
/// Where a DST change skips midnight the day starts at 01:00 instead.
///
/// # Errors
/// [`TodoError::StartDateUnavailable`] when neither time exists locally.
pub fn todo_start_date(date: NaiveDate, tz: Tz) -> Result<DateTime<Utc>, TodoError> {
    [0, 1]
        .into_iter()
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .find_map(|time| tz.from_local_datetime(&date.and_time(time)).earliest())
        .map(|start| start.with_timezone(&Utc))
        .ok_or(TodoError::StartDateUnavailable)
}
