//! Application context wiring the timeline and todo services to the in-memory adapters

use std::sync::Arc;

use chrono_tz::Tz;
use timelog_core::{IntervalBuilder, SelectedDate, TimelineService, TodoService};
use timelog_domain::{Config, Result};
use tracing::info;

use crate::adapters::{InMemoryActivityCatalog, InMemoryTimelineStore, SystemClock, TracingNotifier};

/// Shared application state
pub struct AppContext {
    pub config: Config,
    pub clock: Arc<SystemClock>,
    pub activities: Arc<InMemoryActivityCatalog>,
    pub timelines: Arc<InMemoryTimelineStore>,
    pub service: TimelineService,
    pub todos: TodoService,
    tz: Tz,
}

impl AppContext {
    /// Build the context from loaded configuration
    ///
    /// # Errors
    /// Returns `TimelogError::Config` if the configured timezone is unknown.
    pub fn new(config: Config) -> Result<Self> {
        let builder = IntervalBuilder::from_config(&config.schedule)?;
        let tz = builder.timezone();

        let clock = Arc::new(SystemClock);
        let activities = Arc::new(InMemoryActivityCatalog::new());
        let timelines = Arc::new(InMemoryTimelineStore::new(clock.clone()));
        let notifier = Arc::new(TracingNotifier);
        let service =
            TimelineService::new(activities.clone(), timelines.clone(), notifier.clone(), builder);
        let todos = TodoService::new(activities.clone(), notifier, tz);

        info!(
            timezone = %tz,
            minute_policy = %config.schedule.minute_policy,
            "Application context initialised"
        );

        Ok(Self { config, clock, activities, timelines, service, todos, tz })
    }

    #[must_use]
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Schedule-day the screen should open on
    #[must_use]
    pub fn selected_today(&self) -> SelectedDate {
        SelectedDate::today(self.clock.as_ref(), self.tz)
    }
}
