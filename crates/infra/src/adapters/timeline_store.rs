//! In-memory timeline repository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use timelog_core::{Clock, TimelineRepository};
use timelog_domain::{OwnerId, Result, TimeInterval, TimelineAction, TimelineEntry};
use tracing::debug;

/// Timeline records kept in process memory
pub struct InMemoryTimelineStore {
    entries: RwLock<Vec<TimelineEntry>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryTimelineStore {
    /// Empty store stamping `created_at` from `clock`
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { entries: RwLock::new(Vec::new()), clock }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl TimelineRepository for InMemoryTimelineStore {
    async fn create(&self, interval: TimeInterval) -> Result<TimelineEntry> {
        let entry = TimelineEntry::new(interval, TimelineAction::Stop, self.clock.now());
        debug!(id = %entry.id, owner = %entry.interval.owner_id(), "Stored timeline");
        self.entries.write().push(entry.clone());
        Ok(entry)
    }

    async fn list_between(
        &self,
        owner: &OwnerId,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<TimelineEntry>> {
        let mut found: Vec<TimelineEntry> = self
            .entries
            .read()
            .iter()
            .filter(|entry| entry.interval.owner_id() == owner)
            .filter(|entry| (from..to).contains(&entry.interval.start()))
            .cloned()
            .collect();
        found.sort_by_key(|entry| (entry.interval.start(), entry.created_at));
        Ok(found)
    }
}
