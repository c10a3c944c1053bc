//! Timeline form state
//!
//! Time fields are kept as the raw text the user typed so that a single
//! digit can sit in a field while the second one is still coming. Nothing is
//! parsed until [`TimelineForm::to_params`] hands a snapshot to the builder.

use chrono::NaiveDate;
use timelog_domain::constants::{
    DEFAULT_ACTIVITY_COLOR, DEFAULT_MINUTE_TEXT, EMPTY_ACTIVITY_TITLE, HOURS_PER_DAY,
    TIME_FIELD_WIDTH,
};
use timelog_domain::{ActivitySelection, OwnerId, TimeFieldKind};

use super::builder::IntervalParams;

/// Color and title shown for the form's activity picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityLabel<'a> {
    pub color: &'a str,
    pub title: &'a str,
}

/// Editable state of the "add time record" form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineForm {
    activity: Option<ActivitySelection>,
    start_hour: String,
    start_minute: String,
    end_hour: String,
    end_minute: String,
}

impl TimelineForm {
    /// Form opened by tapping the row for `hour` on the schedule grid.
    ///
    /// Grid rows may be numbered past midnight (24..=28); they are wrapped
    /// onto the clock. The end defaults to one hour later.
    #[must_use]
    pub fn for_clicked_hour(hour: u32) -> Self {
        let start = hour % HOURS_PER_DAY;
        let end = (start + 1) % HOURS_PER_DAY;
        Self {
            activity: None,
            start_hour: format!("{start:02}"),
            start_minute: DEFAULT_MINUTE_TEXT.to_string(),
            end_hour: format!("{end:02}"),
            end_minute: DEFAULT_MINUTE_TEXT.to_string(),
        }
    }

    /// Prefill the activity
    #[must_use]
    pub fn with_activity(mut self, selection: Option<ActivitySelection>) -> Self {
        self.activity = selection;
        self
    }

    #[must_use]
    pub fn field(&self, kind: TimeFieldKind) -> &str {
        match kind {
            TimeFieldKind::StartHour => &self.start_hour,
            TimeFieldKind::StartMinute => &self.start_minute,
            TimeFieldKind::EndHour => &self.end_hour,
            TimeFieldKind::EndMinute => &self.end_minute,
        }
    }

    /// Store the text of one field as typed.
    ///
    /// Returns the field that should receive focus next once this one holds
    /// two characters; the end minute never advances.
    pub fn set_field(
        &mut self,
        kind: TimeFieldKind,
        text: impl Into<String>,
    ) -> Option<TimeFieldKind> {
        let text = text.into();
        let complete = text.chars().count() >= TIME_FIELD_WIDTH;

        let slot = match kind {
            TimeFieldKind::StartHour => &mut self.start_hour,
            TimeFieldKind::StartMinute => &mut self.start_minute,
            TimeFieldKind::EndHour => &mut self.end_hour,
            TimeFieldKind::EndMinute => &mut self.end_minute,
        };
        *slot = text;

        if complete {
            kind.next()
        } else {
            None
        }
    }

    /// Replace the selected activity
    pub fn select_activity(&mut self, selection: ActivitySelection) {
        self.activity = Some(selection);
    }

    #[must_use]
    pub fn activity(&self) -> Option<&ActivitySelection> {
        self.activity.as_ref()
    }

    /// Picker label, falling back to a neutral placeholder
    #[must_use]
    pub fn activity_label(&self) -> ActivityLabel<'_> {
        match &self.activity {
            Some(selection) => ActivityLabel { color: &selection.color, title: &selection.title },
            None => ActivityLabel { color: DEFAULT_ACTIVITY_COLOR, title: EMPTY_ACTIVITY_TITLE },
        }
    }

    /// Snapshot for the interval builder
    #[must_use]
    pub fn to_params<'a>(
        &'a self,
        reference_date: NaiveDate,
        owner_id: &'a OwnerId,
    ) -> IntervalParams<'a> {
        IntervalParams {
            activity: self.activity.as_ref(),
            start_hour: &self.start_hour,
            start_minute: &self.start_minute,
            end_hour: &self.end_hour,
            end_minute: &self.end_minute,
            reference_date,
            owner_id,
        }
    }
}
