//! Timeline service - records manually entered intervals

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use timelog_domain::{
    ActivityId, IntervalError, Notice, OwnerId, Result, TimeFieldKind, TimelineEntry,
};
use tracing::{debug, error, info};

use super::builder::IntervalBuilder;
use super::form::TimelineForm;
use super::ports::{ActivityLookup, Notifier, TimelineRepository};
use super::schedule::ScheduleDay;

/// Outcome of submitting the timeline form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The interval was stored
    Saved(TimelineEntry),
    /// Validation failed; the user was notified and nothing was stored
    Rejected(IntervalError),
}

impl Submission {
    #[must_use]
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }

    /// Field to move focus back to after a rejection
    #[must_use]
    pub fn focus_field(&self) -> Option<TimeFieldKind> {
        match self {
            Self::Saved(_) => None,
            Self::Rejected(err) => err.focus_field(),
        }
    }
}

/// Timeline service
pub struct TimelineService {
    activities: Arc<dyn ActivityLookup>,
    repository: Arc<dyn TimelineRepository>,
    notifier: Arc<dyn Notifier>,
    builder: IntervalBuilder,
}

impl TimelineService {
    /// Create a new timeline service
    pub fn new(
        activities: Arc<dyn ActivityLookup>,
        repository: Arc<dyn TimelineRepository>,
        notifier: Arc<dyn Notifier>,
        builder: IntervalBuilder,
    ) -> Self {
        Self { activities, repository, notifier, builder }
    }

    #[must_use]
    pub fn builder(&self) -> &IntervalBuilder {
        &self.builder
    }

    /// Open the form for a tapped schedule row, prefilled with the current
    /// activity selection for `date`
    ///
    /// # Errors
    /// Propagates failures of the activity lookup.
    pub async fn prepare_form(&self, date: NaiveDate, clicked_hour: u32) -> Result<TimelineForm> {
        let selection = self.activities.current_selection(date).await?;
        Ok(TimelineForm::for_clicked_hour(clicked_hour).with_activity(selection))
    }

    /// Validate the form and store the resulting interval.
    ///
    /// Validation failures are reported to the user through the notifier and
    /// returned as [`Submission::Rejected`]; they are not errors.
    ///
    /// # Errors
    /// Returns the repository's error if storing the interval fails.
    pub async fn submit(
        &self,
        form: &TimelineForm,
        reference_date: NaiveDate,
        owner_id: &OwnerId,
    ) -> Result<Submission> {
        let interval = match self.builder.build(form.to_params(reference_date, owner_id)) {
            Ok(interval) => interval,
            Err(err) => {
                debug!(
                    owner = %owner_id,
                    date = %reference_date,
                    error = %err,
                    "Timeline rejected"
                );
                self.notifier.notify(Notice::info(err.user_message()));
                return Ok(Submission::Rejected(err));
            }
        };

        match self.repository.create(interval).await {
            Ok(entry) => {
                info!(
                    owner = %owner_id,
                    activity = %entry.interval.activity_id(),
                    seconds = entry.interval.duration_seconds(),
                    "Timeline saved"
                );
                Ok(Submission::Saved(entry))
            }
            Err(err) => {
                error!(owner = %owner_id, error = %err, "Failed to store timeline");
                Err(err)
            }
        }
    }

    /// Records whose start lies within the schedule-day
    ///
    /// # Errors
    /// Returns `TimelogError::InvalidInput` if the day has no representable
    /// bounds, or the repository's error.
    pub async fn timelines_for_day(
        &self,
        owner_id: &OwnerId,
        day: ScheduleDay,
    ) -> Result<Vec<TimelineEntry>> {
        let (from, to) = day.bounds_in(self.builder.timezone())?;
        self.repository.list_between(owner_id, from, to).await
    }

    /// Total logged seconds per activity for a schedule-day
    ///
    /// # Errors
    /// Same as [`Self::timelines_for_day`].
    pub async fn execution_time_by_activity(
        &self,
        owner_id: &OwnerId,
        day: ScheduleDay,
    ) -> Result<BTreeMap<ActivityId, i64>> {
        let entries = self.timelines_for_day(owner_id, day).await?;

        let mut totals = BTreeMap::new();
        for entry in entries {
            *totals.entry(entry.interval.activity_id().clone()).or_insert(0) +=
                entry.interval.duration_seconds();
        }
        Ok(totals)
    }
}
