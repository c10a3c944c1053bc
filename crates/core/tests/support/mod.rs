//! Shared test helpers for `timelog-core` integration tests.
//!
//! Lightweight in-memory implementations of the timeline ports so that
//! service tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use parking_lot::Mutex;
use timelog_core::{ActivityLookup, Clock, Notifier, TimelineRepository, TodoRepository};
use timelog_domain::{
    ActivityId, ActivitySelection, NewTodo, Notice, OwnerId, Result as DomainResult, TimeInterval,
    TimelineAction, TimelineEntry, TimelogError, Todo,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

pub fn selection(id: &str, title: &str) -> ActivitySelection {
    ActivitySelection {
        id: ActivityId::new(id),
        color: "#FF8A65".to_string(),
        title: title.to_string(),
    }
}

/// Activity lookup returning the same selection for every date.
#[derive(Default, Clone)]
pub struct MockActivityLookup {
    selection: Option<ActivitySelection>,
}

impl MockActivityLookup {
    pub fn new(selection: Option<ActivitySelection>) -> Self {
        Self { selection }
    }
}

#[async_trait]
impl ActivityLookup for MockActivityLookup {
    async fn current_selection(&self, _date: NaiveDate) -> DomainResult<Option<ActivitySelection>> {
        Ok(self.selection.clone())
    }
}

/// In-memory mock for `TimelineRepository`.
#[derive(Default, Clone)]
pub struct MockTimelineRepository {
    entries: Arc<Mutex<Vec<TimelineEntry>>>,
}

impl MockTimelineRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a stored interval directly.
    pub fn with_interval(self, interval: TimeInterval) -> Self {
        self.entries.lock().push(TimelineEntry::new(
            interval,
            TimelineAction::Stop,
            utc(2024, 1, 1, 0, 0),
        ));
        self
    }

    pub fn entries(&self) -> Vec<TimelineEntry> {
        self.entries.lock().clone()
    }
}

#[async_trait]
impl TimelineRepository for MockTimelineRepository {
    async fn create(&self, interval: TimeInterval) -> DomainResult<TimelineEntry> {
        let entry = TimelineEntry::new(interval, TimelineAction::Stop, utc(2024, 1, 1, 0, 0));
        self.entries.lock().push(entry.clone());
        Ok(entry)
    }

    async fn list_between(
        &self,
        owner: &OwnerId,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Vec<TimelineEntry>> {
        let mut found: Vec<TimelineEntry> = self
            .entries
            .lock()
            .iter()
            .filter(|entry| entry.interval.owner_id() == owner)
            .filter(|entry| entry.interval.start() >= from && entry.interval.start() < to)
            .cloned()
            .collect();
        found.sort_by_key(|entry| entry.interval.start());
        Ok(found)
    }
}

/// Repository whose writes always fail.
#[derive(Default, Clone)]
pub struct FailingTimelineRepository;

#[async_trait]
impl TimelineRepository for FailingTimelineRepository {
    async fn create(&self, _interval: TimeInterval) -> DomainResult<TimelineEntry> {
        Err(TimelogError::Storage("backend unavailable".to_string()))
    }

    async fn list_between(
        &self,
        _owner: &OwnerId,
        _from: DateTime<Utc>,
        _to: DateTime<Utc>,
    ) -> DomainResult<Vec<TimelineEntry>> {
        Err(TimelogError::Storage("backend unavailable".to_string()))
    }
}

/// In-memory mock for `TodoRepository`, numbering created todos in order.
#[derive(Default, Clone)]
pub struct MockTodoRepository {
    created: Arc<Mutex<Vec<NewTodo>>>,
    todos: Arc<Mutex<Vec<Todo>>>,
}

impl MockTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todo(self, todo: Todo) -> Self {
        self.todos.lock().push(todo);
        self
    }

    /// Every `NewTodo` passed to `create`
    pub fn created(&self) -> Vec<NewTodo> {
        self.created.lock().clone()
    }

    pub fn todos(&self) -> Vec<Todo> {
        self.todos.lock().clone()
    }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
    async fn create(&self, todo: NewTodo) -> DomainResult<Todo> {
        let mut todos = self.todos.lock();
        let stored = Todo {
            id: ActivityId::new(format!("t{}", todos.len() + 1)),
            title: todo.title.clone(),
            category_id: todo.category_id.clone(),
        };
        todos.push(stored.clone());
        self.created.lock().push(todo);
        Ok(stored)
    }

    async fn update(&self, todo: Todo) -> DomainResult<Todo> {
        let mut todos = self.todos.lock();
        let slot = todos
            .iter_mut()
            .find(|stored| stored.id == todo.id)
            .ok_or_else(|| TimelogError::NotFound(format!("todo {}", todo.id)))?;
        *slot = todo.clone();
        Ok(todo)
    }
}

/// Notifier that records every notice it receives.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}

/// Clock frozen at a fixed instant.
#[derive(Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
