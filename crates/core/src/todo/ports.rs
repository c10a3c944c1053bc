//! Port interface for todo persistence

use async_trait::async_trait;
use timelog_domain::{NewTodo, Result, Todo};

/// Trait for persisting todos
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Store a new todo and return it with its assigned id
    async fn create(&self, todo: NewTodo) -> Result<Todo>;

    /// Replace the title and category of an existing todo
    ///
    /// Fails with `TimelogError::NotFound` when no todo has `todo.id`.
    async fn update(&self, todo: Todo) -> Result<Todo>;
}
