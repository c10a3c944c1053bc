//! Port interfaces for timeline recording
//!
//! These traits define the boundaries between the timeline service and the
//! stores and UI surfaces it talks to.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use timelog_domain::{ActivitySelection, Notice, OwnerId, Result, TimeInterval, TimelineEntry};

/// Source of the activity currently selected for a day
#[async_trait]
pub trait ActivityLookup: Send + Sync {
    /// Selection the form should be prefilled with for `date`, if any
    async fn current_selection(&self, date: NaiveDate) -> Result<Option<ActivitySelection>>;
}

/// Trait for persisting timeline records
#[async_trait]
pub trait TimelineRepository: Send + Sync {
    /// Store a finished interval and return the created record
    async fn create(&self, interval: TimeInterval) -> Result<TimelineEntry>;

    /// Records owned by `owner` whose start lies in `[from, to)`, oldest first
    async fn list_between(
        &self,
        owner: &OwnerId,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<TimelineEntry>>;
}

/// Wall clock
pub trait Clock: Send + Sync {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// Fire-and-forget user notifications (toasts)
pub trait Notifier: Send + Sync {
    /// Show `notice` to the user without waiting for it to be dismissed
    fn notify(&self, notice: Notice);
}
