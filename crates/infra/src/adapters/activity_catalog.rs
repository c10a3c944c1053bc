//! In-memory categories and todos per date
//!
//! Serves both the timeline form's activity lookup and todo writes.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;
use timelog_core::{ActivityLookup, TodoRepository};
use timelog_domain::{
    default_selection, ActivityId, ActivitySelection, Category, NewTodo, Result, TimelogError, Todo,
};
use tracing::debug;
use uuid::Uuid;

/// Categories written for each date, plus the todo the user last picked.
///
/// Without an explicit pick, the first todo of the first category is used.
#[derive(Debug, Default)]
pub struct InMemoryActivityCatalog {
    categories: RwLock<HashMap<NaiveDate, Vec<Category>>>,
    chosen: RwLock<HashMap<NaiveDate, ActivitySelection>>,
}

impl InMemoryActivityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the categories written for `date`
    pub fn set_categories(&self, date: NaiveDate, categories: Vec<Category>) {
        self.categories.write().insert(date, categories);
    }

    /// Remember the todo the user picked for `date`
    pub fn choose(&self, date: NaiveDate, selection: ActivitySelection) {
        self.chosen.write().insert(date, selection);
    }

    /// Forget the user's pick so the default applies again
    pub fn clear_choice(&self, date: NaiveDate) {
        self.chosen.write().remove(&date);
    }

    #[must_use]
    pub fn categories(&self, date: NaiveDate) -> Vec<Category> {
        self.categories.read().get(&date).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl ActivityLookup for InMemoryActivityCatalog {
    async fn current_selection(&self, date: NaiveDate) -> Result<Option<ActivitySelection>> {
        if let Some(selection) = self.chosen.read().get(&date) {
            return Ok(Some(selection.clone()));
        }
        Ok(self.categories.read().get(&date).and_then(|categories| default_selection(categories)))
    }
}

#[async_trait]
impl TodoRepository for InMemoryActivityCatalog {
    async fn create(&self, todo: NewTodo) -> Result<Todo> {
        let mut categories = self.categories.write();
        let category = categories
            .get_mut(&todo.date)
            .and_then(|list| list.iter_mut().find(|category| category.id == todo.category_id))
            .ok_or_else(|| {
                TimelogError::NotFound(format!("category {} on {}", todo.category_id, todo.date))
            })?;

        let stored = Todo {
            id: ActivityId::new(Uuid::now_v7().to_string()),
            title: todo.title,
            category_id: todo.category_id,
        };
        category.todos.push(stored.clone());
        debug!(todo = %stored.id, date = %todo.date, "Todo stored");
        Ok(stored)
    }

    async fn update(&self, todo: Todo) -> Result<Todo> {
        let mut categories = self.categories.write();
        let (date, list) = categories
            .iter_mut()
            .find(|(_, list)| list.iter().flat_map(|c| &c.todos).any(|t| t.id == todo.id))
            .ok_or_else(|| TimelogError::NotFound(format!("todo {}", todo.id)))?;
        let date = *date;

        if !list.iter().any(|category| category.id == todo.category_id) {
            return Err(TimelogError::NotFound(format!(
                "category {} on {date}",
                todo.category_id
            )));
        }

        for category in list.iter_mut() {
            if category.id != todo.category_id {
                category.todos.retain(|existing| existing.id != todo.id);
                continue;
            }
            match category.todos.iter_mut().find(|existing| existing.id == todo.id) {
                Some(existing) => *existing = todo.clone(),
                None => category.todos.push(todo.clone()),
            }
        }
        drop(categories);

        if let Some(selection) = self.chosen.write().get_mut(&date) {
            if selection.id == todo.id {
                selection.title = todo.title.clone();
            }
        }
        Ok(todo)
    }
}
