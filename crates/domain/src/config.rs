//! Configuration management

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LOG_LEVEL, DEFAULT_TIMEZONE, LENIENT_MAX_MINUTE, MIN_INTERVAL_SECONDS,
    STRICT_MAX_MINUTE,
};
use crate::errors::{Result, TimelogError};
use crate::impl_domain_str_conversions;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How interval timestamps are composed and checked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// IANA timezone the user's wall-clock entries are interpreted in.
    pub timezone: String,
    pub minute_policy: MinutePolicy,
    /// Values below [`MIN_INTERVAL_SECONDS`] are raised to it.
    pub min_duration_seconds: i64,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    pub json: bool,
}

/// Accepted upper bound for minute fields.
///
/// `Strict` allows 0..=59. `Lenient` also accepts 60, which rolls over into
/// the following hour, for clients that relied on that older behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MinutePolicy {
    #[default]
    Strict,
    Lenient,
}

impl_domain_str_conversions!(MinutePolicy {
    Strict => "strict",
    Lenient => "lenient",
});

impl MinutePolicy {
    /// Largest minute value accepted under this policy
    #[must_use]
    pub const fn max_minute(self) -> u32 {
        match self {
            Self::Strict => STRICT_MAX_MINUTE,
            Self::Lenient => LENIENT_MAX_MINUTE,
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            minute_policy: MinutePolicy::Strict,
            min_duration_seconds: MIN_INTERVAL_SECONDS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), json: false }
    }
}

impl ScheduleConfig {
    /// Parse the configured timezone name
    ///
    /// # Errors
    /// Returns `TimelogError::Config` if the name is not a known IANA zone.
    pub fn tz(&self) -> Result<Tz> {
        self.timezone.trim().parse::<Tz>().map_err(|e| {
            TimelogError::Config(format!("Invalid timezone '{}': {}", self.timezone, e))
        })
    }

    /// Effective minimum duration, never below the global floor
    #[must_use]
    pub fn effective_min_duration_seconds(&self) -> i64 {
        self.min_duration_seconds.max(MIN_INTERVAL_SECONDS)
    }
}
