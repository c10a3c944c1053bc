//! Schedule-day arithmetic
//!
//! The visual schedule shows 24 rows starting at 05:00 and ending with the
//! 04:00 row of the next calendar date. A schedule-day is identified by the
//! calendar date its 05:00 row falls on.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use timelog_domain::constants::{
    HOURS_PER_DAY, MINUTES_PER_SLOT, SCHEDULE_DAY_START_HOUR, SLOTS_PER_HOUR_ROW,
};
use timelog_domain::{Result, TimelogError};

/// One row of the schedule grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRow {
    /// Zero-based position from the top of the grid
    pub index: u32,
    /// Wall-clock hour shown on the row, 0..=23
    pub hour: u32,
}

impl HourRow {
    /// Two-digit label, e.g. `05`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:02}", self.hour)
    }

    /// Minute offsets of the ten-minute cells in this row
    #[must_use]
    pub fn slot_minutes(&self) -> [u32; SLOTS_PER_HOUR_ROW] {
        std::array::from_fn(|slot| slot as u32 * MINUTES_PER_SLOT)
    }
}

/// A 05:00-to-05:00 tracking day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScheduleDay {
    date: NaiveDate,
}

impl ScheduleDay {
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Schedule-day that `instant` belongs to when viewed in `tz`
    #[must_use]
    pub fn containing(instant: DateTime<Utc>, tz: Tz) -> Self {
        let local = instant.with_timezone(&tz);
        let date = local.date_naive();
        if local.hour() < SCHEDULE_DAY_START_HOUR {
            Self { date: date.pred_opt().unwrap_or(date) }
        } else {
            Self { date }
        }
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// UTC bounds `[start, end)` of this schedule-day in `tz`
    ///
    /// # Errors
    /// Returns `TimelogError::InvalidInput` if 05:00 does not exist on either
    /// date in `tz`, or the date is at the end of the calendar range.
    pub fn bounds_in(&self, tz: Tz) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
        let next = self.date.succ_opt().ok_or_else(|| {
            TimelogError::InvalidInput(format!("No schedule-day after {}", self.date))
        })?;
        Ok((day_start(self.date, tz)?, day_start(next, tz)?))
    }

    /// Whether `instant` falls inside this schedule-day in `tz`
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>, tz: Tz) -> bool {
        Self::containing(instant, tz) == *self
    }

    /// Minutes from the top of the grid to `instant`, or `None` outside the day
    #[must_use]
    pub fn offset_minutes(&self, instant: DateTime<Utc>, tz: Tz) -> Option<i64> {
        let (start, end) = self.bounds_in(tz).ok()?;
        (start..end).contains(&instant).then(|| (instant - start).num_minutes())
    }

    /// The 24 grid rows, 05 through 23 then 00 through 04
    pub fn hour_rows() -> impl Iterator<Item = HourRow> {
        (0..HOURS_PER_DAY).map(|index| HourRow {
            index,
            hour: (SCHEDULE_DAY_START_HOUR + index) % HOURS_PER_DAY,
        })
    }
}

fn day_start(date: NaiveDate, tz: Tz) -> Result<DateTime<Utc>> {
    let local = date.and_time(
        NaiveTime::from_hms_opt(SCHEDULE_DAY_START_HOUR, 0, 0).unwrap_or(NaiveTime::MIN),
    );
    tz.from_local_datetime(&local).earliest().map(|dt| dt.with_timezone(&Utc)).ok_or_else(|| {
        TimelogError::InvalidInput(format!("{local} does not exist in timezone {tz}"))
    })
}
