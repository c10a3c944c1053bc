//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Schedule-day layout
/// Local hour at which a schedule-day begins (and the previous one ends).
pub const SCHEDULE_DAY_START_HOUR: u32 = 5;
pub const HOURS_PER_DAY: u32 = 24;
pub const SLOTS_PER_HOUR_ROW: usize = 6;
pub const MINUTES_PER_SLOT: u32 = 10;

// Interval validation
pub const MAX_HOUR: u32 = 23;
pub const STRICT_MAX_MINUTE: u32 = 59;
pub const LENIENT_MAX_MINUTE: u32 = 60;
/// Shortest interval that may ever be recorded.
pub const MIN_INTERVAL_SECONDS: i64 = 60;

// Form behaviour
/// Characters after which a time field is considered complete.
pub const TIME_FIELD_WIDTH: usize = 2;
pub const DEFAULT_MINUTE_TEXT: &str = "00";
pub const DEFAULT_ACTIVITY_COLOR: &str = "#696969";
pub const EMPTY_ACTIVITY_TITLE: &str = "No todos written yet";

// Account form
pub const MIN_EMAIL_LENGTH: usize = 5;
pub const MIN_PASSWORD_LENGTH: usize = 8;

// Configuration defaults
pub const DEFAULT_TIMEZONE: &str = "UTC";
pub const DEFAULT_LOG_LEVEL: &str = "info";
