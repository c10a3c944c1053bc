//! Time intervals logged against an activity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;
use uuid::Uuid;

use super::ids::{ActivityId, OwnerId};
use crate::constants::MIN_INTERVAL_SECONDS;
use crate::errors::IntervalError;
use crate::impl_domain_str_conversions;

/// One of the four free-text inputs of the timeline form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFieldKind {
    StartHour,
    StartMinute,
    EndHour,
    EndMinute,
}

impl_domain_str_conversions!(TimeFieldKind {
    StartHour => "start_hour",
    StartMinute => "start_minute",
    EndHour => "end_hour",
    EndMinute => "end_minute",
});

impl TimeFieldKind {
    /// Human-readable name used in messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StartHour => "start hour",
            Self::StartMinute => "start minute",
            Self::EndHour => "end hour",
            Self::EndMinute => "end minute",
        }
    }

    /// Field that receives focus once this one is filled in
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::StartHour => Some(Self::StartMinute),
            Self::StartMinute => Some(Self::EndHour),
            Self::EndHour => Some(Self::EndMinute),
            Self::EndMinute => None,
        }
    }
}

/// What a timeline record represents on the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum TimelineAction {
    /// A running timer was started
    Start,
    /// A finished span; manually entered intervals are always `Stop`
    Stop,
}

impl_domain_str_conversions!(TimelineAction {
    Start => "start",
    Stop => "stop",
});

/// A validated span of time attributed to one activity.
///
/// `end > start` and `duration_seconds >= 60` hold for every value of this
/// type, including deserialized ones. Fields are read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(try_from = "IntervalRecord")]
pub struct TimeInterval {
    activity_id: ActivityId,
    owner_id: OwnerId,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    duration_seconds: i64,
}

#[derive(Deserialize)]
struct IntervalRecord {
    activity_id: ActivityId,
    owner_id: OwnerId,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    duration_seconds: Option<i64>,
}

impl TryFrom<IntervalRecord> for TimeInterval {
    type Error = String;

    fn try_from(record: IntervalRecord) -> Result<Self, Self::Error> {
        let interval = Self::new(record.activity_id, record.owner_id, record.start, record.end)
            .map_err(|e| e.to_string())?;
        match record.duration_seconds {
            Some(seconds) if seconds != interval.duration_seconds => Err(format!(
                "duration_seconds {} does not match end - start ({})",
                seconds, interval.duration_seconds
            )),
            _ => Ok(interval),
        }
    }
}

impl TimeInterval {
    /// Assemble an interval from absolute instants
    ///
    /// # Errors
    /// Returns `IntervalError::DurationTooShort` when `end - start` is under
    /// one minute (which includes `end <= start`).
    pub fn new(
        activity_id: ActivityId,
        owner_id: OwnerId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Self, IntervalError> {
        let duration_seconds = (end - start).num_seconds();
        if duration_seconds < MIN_INTERVAL_SECONDS {
            return Err(IntervalError::DurationTooShort {
                seconds: duration_seconds,
                min_seconds: MIN_INTERVAL_SECONDS,
            });
        }
        Ok(Self { activity_id, owner_id, start, end, duration_seconds })
    }

    #[must_use]
    pub fn activity_id(&self) -> &ActivityId {
        &self.activity_id
    }

    #[must_use]
    pub fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    #[must_use]
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    #[must_use]
    pub fn duration_seconds(&self) -> i64 {
        self.duration_seconds
    }
}

/// A stored timeline record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct TimelineEntry {
    pub id: Uuid,
    pub interval: TimeInterval,
    pub action: TimelineAction,
    pub created_at: DateTime<Utc>,
}

impl TimelineEntry {
    /// Wrap `interval` in a new record with a time-ordered id
    #[must_use]
    pub fn new(interval: TimeInterval, action: TimelineAction, created_at: DateTime<Utc>) -> Self {
        Self { id: Uuid::now_v7(), interval, action, created_at }
    }
}
