//! Todo service - creates and edits todos from the todo form

use std::sync::Arc;

use chrono::NaiveDate;
use chrono_tz::Tz;
use timelog_domain::{Notice, OwnerId, Result, Todo, TodoError};
use tracing::{debug, error, info};

use super::form::{TodoCommand, TodoForm};
use super::ports::TodoRepository;
use crate::timeline::ports::Notifier;

/// Outcome of submitting the todo form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoSubmission {
    Created(Todo),
    Updated(Todo),
    /// Validation failed; the user was notified and nothing was stored
    Rejected(TodoError),
}

/// Todo service
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
    notifier: Arc<dyn Notifier>,
    tz: Tz,
}

impl TodoService {
    pub fn new(repository: Arc<dyn TodoRepository>, notifier: Arc<dyn Notifier>, tz: Tz) -> Self {
        Self { repository, notifier, tz }
    }

    /// Validate the form and create or update the todo.
    ///
    /// # Errors
    /// Returns the repository's error if the write fails.
    pub async fn submit(
        &self,
        form: &TodoForm,
        selected_date: NaiveDate,
        owner_id: &OwnerId,
    ) -> Result<TodoSubmission> {
        let command = match form.to_command(selected_date, owner_id, self.tz) {
            Ok(command) => command,
            Err(err) => {
                debug!(owner = %owner_id, date = %selected_date, error = %err, "Todo rejected");
                self.notifier.notify(Notice::info(err.user_message()));
                return Ok(TodoSubmission::Rejected(err));
            }
        };

        let result = match command {
            TodoCommand::Create(todo) => self.repository.create(todo).await.map(|todo| {
                info!(owner = %owner_id, todo = %todo.id, "Todo created");
                TodoSubmission::Created(todo)
            }),
            TodoCommand::Update(todo) => self.repository.update(todo).await.map(|todo| {
                info!(owner = %owner_id, todo = %todo.id, "Todo updated");
                TodoSubmission::Updated(todo)
            }),
        };

        result.map_err(|err| {
            error!(owner = %owner_id, error = %err, "Failed to write todo");
            err
        })
    }
}
