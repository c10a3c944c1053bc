//! The date the schedule screen is currently showing

use chrono::NaiveDate;
use chrono_tz::Tz;

use super::ports::Clock;
use super::schedule::ScheduleDay;

/// Selected schedule-day, owned by the screen and passed into the builder
/// by value on each submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedDate {
    date: NaiveDate,
}

impl SelectedDate {
    /// The schedule-day containing the current instant in `tz`.
    ///
    /// Before 05:00 local time this is the previous calendar date.
    #[must_use]
    pub fn today(clock: &dyn Clock, tz: Tz) -> Self {
        Self { date: ScheduleDay::containing(clock.now(), tz).date() }
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn set(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn reset_to_today(&mut self, clock: &dyn Clock, tz: Tz) {
        *self = Self::today(clock, tz);
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use chrono_tz::Asia;

    use super::*;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_today_follows_schedule_day() {
        let afternoon = FixedClock(Utc.with_ymd_and_hms(2024, 3, 13, 15, 0, 0).unwrap());
        assert_eq!(SelectedDate::today(&afternoon, Tz::UTC).date(), date(2024, 3, 13));

        let small_hours = FixedClock(Utc.with_ymd_and_hms(2024, 3, 14, 2, 0, 0).unwrap());
        assert_eq!(SelectedDate::today(&small_hours, Tz::UTC).date(), date(2024, 3, 13));
    }

    #[test]
    fn test_today_in_local_timezone() {
        // 19:00 UTC is 04:00 the next morning in Seoul, still the 13th's schedule
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 13, 19, 0, 0).unwrap());
        assert_eq!(SelectedDate::today(&clock, Asia::Seoul).date(), date(2024, 3, 13));
    }

    #[test]
    fn test_set_and_reset() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 13, 12, 0, 0).unwrap());
        let mut selected = SelectedDate::today(&clock, Tz::UTC);

        selected.set(date(2024, 2, 29));
        assert_eq!(selected.date(), date(2024, 2, 29));

        selected.reset_to_today(&clock, Tz::UTC);
        assert_eq!(selected.date(), date(2024, 3, 13));
    }
}
