//! Interval construction from raw form text
//!
//! A schedule-day runs from 05:00 to 04:59 of the next calendar date, so
//! wall-clock hours before five in the morning belong to the *following*
//! calendar date of the day being viewed. The builder applies that rollover
//! to both boundaries, composes local instants in the schedule timezone,
//! converts them to UTC and enforces the minimum duration.
//!
//! Validation is fail-fast: the first rule that fails decides the error and
//! no later rule is evaluated.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use timelog_domain::constants::{MAX_HOUR, MIN_INTERVAL_SECONDS, SCHEDULE_DAY_START_HOUR};
use timelog_domain::{
    ActivitySelection, IntervalError, MinutePolicy, OwnerId, Result, ScheduleConfig,
    TimeFieldKind, TimeInterval,
};

/// Which end of the interval an hour belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Rolls forward for hours before 05:00
    Start,
    /// Rolls forward for hours up to and including 05:00
    End,
}

/// Calendar date on which `hour` falls for a schedule-day starting on
/// `reference_date`.
///
/// Start hours roll to the next date when `hour < 5`; end hours when
/// `hour <= 5`. The end boundary is inclusive so that an interval ending at
/// exactly 05:00 closes the schedule-day it started in.
///
/// Returns `None` when the date would have to roll past `NaiveDate::MAX`.
#[must_use]
pub fn resolve_calendar_date(
    reference_date: NaiveDate,
    hour: u32,
    boundary: Boundary,
) -> Option<NaiveDate> {
    let rolls_over = match boundary {
        Boundary::Start => hour < SCHEDULE_DAY_START_HOUR,
        Boundary::End => hour <= SCHEDULE_DAY_START_HOUR,
    };

    if rolls_over {
        reference_date.succ_opt()
    } else {
        Some(reference_date)
    }
}

/// Snapshot of the timeline form taken at submission
#[derive(Debug, Clone, Copy)]
pub struct IntervalParams<'a> {
    pub activity: Option<&'a ActivitySelection>,
    pub start_hour: &'a str,
    pub start_minute: &'a str,
    pub end_hour: &'a str,
    pub end_minute: &'a str,
    /// Date of the schedule-day being viewed
    pub reference_date: NaiveDate,
    pub owner_id: &'a OwnerId,
}

/// Turns [`IntervalParams`] into a validated [`TimeInterval`].
///
/// Holds only immutable settings; every call is independent.
#[derive(Debug, Clone)]
pub struct IntervalBuilder {
    tz: Tz,
    minute_policy: MinutePolicy,
    min_duration_seconds: i64,
}

impl IntervalBuilder {
    /// Builder for wall-clock entries in `tz`, with the strict minute policy
    /// and a one-minute floor
    #[must_use]
    pub fn new(tz: Tz) -> Self {
        Self {
            tz,
            minute_policy: MinutePolicy::default(),
            min_duration_seconds: MIN_INTERVAL_SECONDS,
        }
    }

    /// Create a builder from schedule configuration
    ///
    /// # Errors
    /// Returns `TimelogError::Config` if the configured timezone is unknown.
    pub fn from_config(config: &ScheduleConfig) -> Result<Self> {
        Ok(Self {
            tz: config.tz()?,
            minute_policy: config.minute_policy,
            min_duration_seconds: config.effective_min_duration_seconds(),
        })
    }

    /// Override the accepted minute range
    #[must_use]
    pub fn with_minute_policy(mut self, policy: MinutePolicy) -> Self {
        self.minute_policy = policy;
        self
    }

    /// Override the minimum duration; values under one minute are raised to it
    #[must_use]
    pub fn with_min_duration_seconds(mut self, seconds: i64) -> Self {
        self.min_duration_seconds = seconds.max(MIN_INTERVAL_SECONDS);
        self
    }

    /// Timezone the form's wall-clock text is read in
    #[must_use]
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Accepted minute range
    #[must_use]
    pub fn minute_policy(&self) -> MinutePolicy {
        self.minute_policy
    }

    /// Validate the form snapshot and assemble the interval
    ///
    /// # Errors
    /// Returns the first failing rule, in this order: `MissingActivity`,
    /// `MissingField` (start hour), `InvalidHour` (start, then end),
    /// `InvalidMinute` (start, then end), `MissingField` (start minute, end
    /// hour, end minute), `DateOutOfRange`, `NonexistentLocalTime`,
    /// `DurationTooShort`.
    pub fn build(
        &self,
        params: IntervalParams<'_>,
    ) -> std::result::Result<TimeInterval, IntervalError> {
        let activity = params.activity.ok_or(IntervalError::MissingActivity)?;

        if is_blank(params.start_hour) {
            return Err(IntervalError::MissingField { field: TimeFieldKind::StartHour });
        }

        let start_hour = parse_hour(params.start_hour, TimeFieldKind::StartHour)?;
        let end_hour = parse_hour(params.end_hour, TimeFieldKind::EndHour)?;

        let max_minute = self.minute_policy.max_minute();
        let start_minute =
            parse_minute(params.start_minute, TimeFieldKind::StartMinute, max_minute)?;
        let end_minute = parse_minute(params.end_minute, TimeFieldKind::EndMinute, max_minute)?;

        for (text, field) in [
            (params.start_minute, TimeFieldKind::StartMinute),
            (params.end_hour, TimeFieldKind::EndHour),
            (params.end_minute, TimeFieldKind::EndMinute),
        ] {
            if is_blank(text) {
                return Err(IntervalError::MissingField { field });
            }
        }

        let start_date = resolve_calendar_date(params.reference_date, start_hour, Boundary::Start)
            .ok_or(IntervalError::DateOutOfRange { field: TimeFieldKind::StartHour })?;
        let end_date = resolve_calendar_date(params.reference_date, end_hour, Boundary::End)
            .ok_or(IntervalError::DateOutOfRange { field: TimeFieldKind::EndHour })?;

        let start = self.compose(start_date, start_hour, start_minute, TimeFieldKind::StartHour)?;
        let end = self.compose(end_date, end_hour, end_minute, TimeFieldKind::EndHour)?;

        let seconds = (end - start).num_seconds();
        if seconds < self.min_duration_seconds {
            return Err(IntervalError::DurationTooShort {
                seconds,
                min_seconds: self.min_duration_seconds,
            });
        }

        TimeInterval::new(activity.id.clone(), params.owner_id.clone(), start, end)
    }

    /// Local wall-clock `date hour:minute` in the schedule timezone, as UTC.
    ///
    /// Minutes are added as a duration so that a lenient `60` lands on the
    /// next hour. Ambiguous local times resolve to the earlier instant; a sum
    /// past the end of the calendar is `DateOutOfRange`.
    fn compose(
        &self,
        date: NaiveDate,
        hour: u32,
        minute: u32,
        field: TimeFieldKind,
    ) -> std::result::Result<DateTime<Utc>, IntervalError> {
        let local = date
            .and_time(NaiveTime::MIN)
            .checked_add_signed(Duration::hours(i64::from(hour)))
            .and_then(|dt| dt.checked_add_signed(Duration::minutes(i64::from(minute))))
            .ok_or(IntervalError::DateOutOfRange { field })?;

        self.tz
            .from_local_datetime(&local)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or(IntervalError::NonexistentLocalTime { field })
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Strict decimal parse: digits only, after trimming
fn parse_number(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn parse_hour(text: &str, field: TimeFieldKind) -> std::result::Result<u32, IntervalError> {
    parse_number(text)
        .filter(|hour| *hour <= MAX_HOUR)
        .ok_or(IntervalError::InvalidHour { field })
}

fn parse_minute(
    text: &str,
    field: TimeFieldKind,
    max: u32,
) -> std::result::Result<u32, IntervalError> {
    parse_number(text)
        .filter(|minute| *minute <= max)
        .ok_or(IntervalError::InvalidMinute { field, max })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono_tz::{America, Asia};
    use timelog_domain::ActivityId;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn selection() -> ActivitySelection {
        ActivitySelection {
            id: ActivityId::new("42"),
            color: "#FF8A65".to_string(),
            title: "Write report".to_string(),
        }
    }

    struct Input {
        activity: Option<ActivitySelection>,
        fields: [&'static str; 4],
        reference_date: NaiveDate,
        owner: OwnerId,
    }

    impl Input {
        fn new(start: (&'static str, &'static str), end: (&'static str, &'static str)) -> Self {
            Self {
                activity: Some(selection()),
                fields: [start.0, start.1, end.0, end.1],
                reference_date: date(2024, 3, 13),
                owner: OwnerId::new("uid-1"),
            }
        }

        fn params(&self) -> IntervalParams<'_> {
            IntervalParams {
                activity: self.activity.as_ref(),
                start_hour: self.fields[0],
                start_minute: self.fields[1],
                end_hour: self.fields[2],
                end_minute: self.fields[3],
                reference_date: self.reference_date,
                owner_id: &self.owner,
            }
        }
    }

    fn utc_builder() -> IntervalBuilder {
        IntervalBuilder::new(Tz::UTC)
    }

    #[test]
    fn test_resolve_start_boundary_for_every_hour() {
        let d = date(2024, 3, 13);
        for hour in 0..=23 {
            let expected = if hour < 5 { date(2024, 3, 14) } else { d };
            assert_eq!(
                resolve_calendar_date(d, hour, Boundary::Start),
                Some(expected),
                "hour {hour}"
            );
        }
    }

    #[test]
    fn test_resolve_end_boundary_for_every_hour() {
        let d = date(2024, 3, 13);
        for hour in 0..=23 {
            let expected = if hour <= 5 { date(2024, 3, 14) } else { d };
            assert_eq!(
                resolve_calendar_date(d, hour, Boundary::End),
                Some(expected),
                "hour {hour}"
            );
        }
    }

    #[test]
    fn test_resolve_crosses_month_and_year() {
        assert_eq!(
            resolve_calendar_date(date(2024, 2, 29), 1, Boundary::Start),
            Some(date(2024, 3, 1))
        );
        assert_eq!(
            resolve_calendar_date(date(2023, 12, 31), 5, Boundary::End),
            Some(date(2024, 1, 1))
        );
    }

    #[test]
    fn test_resolve_has_no_date_after_the_last_one() {
        assert_eq!(resolve_calendar_date(NaiveDate::MAX, 4, Boundary::Start), None);
        assert_eq!(resolve_calendar_date(NaiveDate::MAX, 5, Boundary::End), None);
        assert_eq!(resolve_calendar_date(NaiveDate::MAX, 5, Boundary::Start), Some(NaiveDate::MAX));
    }

    #[test]
    fn test_last_calendar_date_fails_without_panicking() {
        let mut input = Input::new(("23", "00"), ("01", "00"));
        input.reference_date = NaiveDate::MAX;
        assert_eq!(
            utc_builder().build(input.params()).unwrap_err(),
            IntervalError::DateOutOfRange { field: TimeFieldKind::EndHour }
        );

        let lenient = utc_builder().with_minute_policy(MinutePolicy::Lenient);
        let mut input = Input::new(("22", "00"), ("23", "60"));
        input.reference_date = NaiveDate::MAX;
        assert_eq!(
            lenient.build(input.params()).unwrap_err(),
            IntervalError::DateOutOfRange { field: TimeFieldKind::EndHour }
        );

        let mut input = Input::new(("22", "00"), ("23", "00"));
        input.reference_date = NaiveDate::MAX;
        assert_eq!(utc_builder().build(input.params()).unwrap().duration_seconds(), 3600);
    }

    #[test]
    fn test_overnight_interval_rolls_end_to_next_day() {
        let input = Input::new(("23", "30"), ("00", "15"));
        let interval = utc_builder().build(input.params()).unwrap();

        assert_eq!(interval.start(), Utc.with_ymd_and_hms(2024, 3, 13, 23, 30, 0).unwrap());
        assert_eq!(interval.end(), Utc.with_ymd_and_hms(2024, 3, 14, 0, 15, 0).unwrap());
        assert_eq!(interval.duration_seconds(), 2700);
        assert_eq!(interval.activity_id(), &ActivityId::new("42"));
        assert_eq!(interval.owner_id(), &OwnerId::new("uid-1"));
    }

    #[test]
    fn test_equal_start_and_end_is_too_short() {
        let input = Input::new(("10", "00"), ("10", "00"));
        assert_eq!(
            utc_builder().build(input.params()).unwrap_err(),
            IntervalError::DurationTooShort { seconds: 0, min_seconds: 60 }
        );
    }

    #[test]
    fn test_start_hour_out_of_range() {
        let input = Input::new(("25", "00"), ("10", "00"));
        assert_eq!(
            utc_builder().build(input.params()).unwrap_err(),
            IntervalError::InvalidHour { field: TimeFieldKind::StartHour }
        );
    }

    #[test]
    fn test_missing_activity_is_checked_before_time_fields() {
        let mut input = Input::new(("25", "99"), ("", "x"));
        input.activity = None;
        let err = utc_builder().build(input.params()).unwrap_err();
        assert_eq!(err, IntervalError::MissingActivity);
    }

    #[test]
    fn test_early_morning_start_and_end_share_the_next_date() {
        let input = Input::new(("04", "00"), ("04", "30"));
        let interval = utc_builder().build(input.params()).unwrap();

        assert_eq!(interval.start(), Utc.with_ymd_and_hms(2024, 3, 14, 4, 0, 0).unwrap());
        assert_eq!(interval.end(), Utc.with_ymd_and_hms(2024, 3, 14, 4, 30, 0).unwrap());
        assert_eq!(interval.duration_seconds(), 1800);
    }

    #[test]
    fn test_full_schedule_day() {
        let input = Input::new(("05", "00"), ("04", "59"));
        let interval = utc_builder().build(input.params()).unwrap();
        assert_eq!(interval.duration_seconds(), 24 * 3600 - 60);
    }

    #[test]
    fn test_end_at_five_closes_the_schedule_day() {
        let input = Input::new(("22", "00"), ("05", "00"));
        let interval = utc_builder().build(input.params()).unwrap();
        assert_eq!(interval.end(), Utc.with_ymd_and_hms(2024, 3, 14, 5, 0, 0).unwrap());
        assert_eq!(interval.duration_seconds(), 7 * 3600);
    }

    #[test]
    fn test_five_oclock_asymmetry_is_preserved() {
        // start 05:xx stays on the reference date, end 05:xx rolls forward
        let input = Input::new(("05", "00"), ("05", "30"));
        let interval = utc_builder().build(input.params()).unwrap();
        assert_eq!(interval.duration_seconds(), 24 * 3600 + 1800);
    }

    #[test]
    fn test_end_before_start_on_same_date_is_too_short() {
        let input = Input::new(("14", "00"), ("13", "00"));
        assert!(matches!(
            utc_builder().build(input.params()).unwrap_err(),
            IntervalError::DurationTooShort { seconds: -3600, .. }
        ));
    }

    #[test]
    fn test_empty_start_hour_is_missing_field() {
        let input = Input::new(("  ", "00"), ("10", "00"));
        assert_eq!(
            utc_builder().build(input.params()).unwrap_err(),
            IntervalError::MissingField { field: TimeFieldKind::StartHour }
        );
    }

    #[test]
    fn test_empty_end_hour_fails_as_invalid_hour() {
        // hour parsing runs before the remaining emptiness checks
        let input = Input::new(("09", "00"), ("", "00"));
        assert_eq!(
            utc_builder().build(input.params()).unwrap_err(),
            IntervalError::InvalidHour { field: TimeFieldKind::EndHour }
        );
    }

    #[test]
    fn test_empty_minute_fails_as_invalid_minute() {
        let input = Input::new(("09", ""), ("10", "00"));
        assert_eq!(
            utc_builder().build(input.params()).unwrap_err(),
            IntervalError::InvalidMinute { field: TimeFieldKind::StartMinute, max: 59 }
        );
    }

    #[test]
    fn test_non_numeric_text_is_rejected() {
        for bad in ["7a", "+7", "-1", "1.5", "one"] {
            let input = Input::new((bad, "00"), ("10", "00"));
            assert_eq!(
                utc_builder().build(input.params()).unwrap_err(),
                IntervalError::InvalidHour { field: TimeFieldKind::StartHour },
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn test_whitespace_around_digits_is_accepted() {
        let input = Input::new((" 9", "05 "), ("10", "0"));
        let interval = utc_builder().build(input.params()).unwrap();
        assert_eq!(interval.duration_seconds(), 55 * 60);
    }

    #[test]
    fn test_end_minute_checked_after_start_minute() {
        let input = Input::new(("09", "75"), ("10", "80"));
        assert_eq!(
            utc_builder().build(input.params()).unwrap_err(),
            IntervalError::InvalidMinute { field: TimeFieldKind::StartMinute, max: 59 }
        );

        let input = Input::new(("09", "15"), ("10", "80"));
        assert_eq!(
            utc_builder().build(input.params()).unwrap_err(),
            IntervalError::InvalidMinute { field: TimeFieldKind::EndMinute, max: 59 }
        );
    }

    #[test]
    fn test_minute_sixty_rejected_by_strict_policy() {
        let input = Input::new(("09", "60"), ("11", "00"));
        assert_eq!(
            utc_builder().build(input.params()).unwrap_err(),
            IntervalError::InvalidMinute { field: TimeFieldKind::StartMinute, max: 59 }
        );
    }

    #[test]
    fn test_minute_sixty_rolls_into_next_hour_when_lenient() {
        let builder = utc_builder().with_minute_policy(MinutePolicy::Lenient);
        let input = Input::new(("09", "60"), ("11", "00"));
        let interval = builder.build(input.params()).unwrap();
        assert_eq!(interval.start(), Utc.with_ymd_and_hms(2024, 3, 13, 10, 0, 0).unwrap());
        assert_eq!(interval.duration_seconds(), 3600);

        let input = Input::new(("09", "61"), ("11", "00"));
        assert_eq!(
            builder.build(input.params()).unwrap_err(),
            IntervalError::InvalidMinute { field: TimeFieldKind::StartMinute, max: 60 }
        );
    }

    #[test]
    fn test_configured_minimum_duration() {
        let builder = utc_builder().with_min_duration_seconds(15 * 60);
        let input = Input::new(("09", "00"), ("09", "10"));
        assert_eq!(
            builder.build(input.params()).unwrap_err(),
            IntervalError::DurationTooShort { seconds: 600, min_seconds: 900 }
        );

        let input = Input::new(("09", "00"), ("09", "15"));
        assert!(builder.build(input.params()).is_ok());
    }

    #[test]
    fn test_minimum_duration_cannot_drop_below_a_minute() {
        let builder = utc_builder().with_min_duration_seconds(0);
        let input = Input::new(("09", "00"), ("09", "00"));
        assert!(matches!(
            builder.build(input.params()).unwrap_err(),
            IntervalError::DurationTooShort { min_seconds: 60, .. }
        ));
    }

    #[test]
    fn test_local_times_are_normalized_to_utc() {
        let builder = IntervalBuilder::new(Asia::Seoul);
        let input = Input::new(("23", "30"), ("00", "15"));
        let interval = builder.build(input.params()).unwrap();

        assert_eq!(interval.start(), Utc.with_ymd_and_hms(2024, 3, 13, 14, 30, 0).unwrap());
        assert_eq!(interval.end(), Utc.with_ymd_and_hms(2024, 3, 13, 15, 15, 0).unwrap());
        assert_eq!(interval.duration_seconds(), 2700);
    }

    #[test]
    fn test_daylight_saving_gap_is_rejected() {
        // 2024-03-10 02:30 does not exist in New York
        let builder = IntervalBuilder::new(America::New_York);
        let mut input = Input::new(("02", "30"), ("03", "30"));
        input.reference_date = date(2024, 3, 9);
        assert_eq!(
            builder.build(input.params()).unwrap_err(),
            IntervalError::NonexistentLocalTime { field: TimeFieldKind::StartHour }
        );
    }

    #[test]
    fn test_daylight_saving_fold_uses_earlier_instant() {
        // 2024-11-03 01:30 happens twice in New York; the EDT one is first
        let builder = IntervalBuilder::new(America::New_York);
        let mut input = Input::new(("01", "30"), ("02", "00"));
        input.reference_date = date(2024, 11, 2);
        let interval = builder.build(input.params()).unwrap();

        assert_eq!(interval.start(), Utc.with_ymd_and_hms(2024, 11, 3, 5, 30, 0).unwrap());
        assert_eq!(interval.end(), Utc.with_ymd_and_hms(2024, 11, 3, 7, 0, 0).unwrap());
        assert_eq!(interval.duration_seconds(), 5400);
    }

    #[test]
    fn test_every_valid_result_is_positive_and_at_least_a_minute() {
        let builder = utc_builder();
        let hours = ["00", "03", "04", "05", "06", "12", "23"];
        let minutes = ["00", "01", "30", "59"];
        let owner = OwnerId::new("uid");
        let activity = selection();

        for sh in hours {
            for sm in minutes {
                for eh in hours {
                    for em in minutes {
                        let params = IntervalParams {
                            activity: Some(&activity),
                            start_hour: sh,
                            start_minute: sm,
                            end_hour: eh,
                            end_minute: em,
                            reference_date: date(2024, 3, 13),
                            owner_id: &owner,
                        };
                        if let Ok(interval) = builder.build(params) {
                            assert!(interval.end() > interval.start());
                            assert!(interval.duration_seconds() >= 60);
                            assert_eq!(
                                interval.duration_seconds(),
                                (interval.end() - interval.start()).num_seconds()
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_from_config_rejects_unknown_timezone() {
        let config =
            ScheduleConfig { timezone: "Nowhere/Else".to_string(), ..ScheduleConfig::default() };
        assert!(IntervalBuilder::from_config(&config).is_err());

        let config = ScheduleConfig {
            timezone: "Asia/Seoul".to_string(),
            minute_policy: MinutePolicy::Lenient,
            min_duration_seconds: 120,
        };
        let builder = IntervalBuilder::from_config(&config).unwrap();
        assert_eq!(builder.timezone(), Asia::Seoul);
        assert_eq!(builder.minute_policy(), MinutePolicy::Lenient);
    }
}
