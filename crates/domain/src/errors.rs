//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{SignUpField, TimeFieldKind};

/// Main error type for Timelog
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TimelogError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Interval rejected: {0}")]
    Interval(#[from] IntervalError),
}

/// Result type alias for Timelog operations
pub type Result<T> = std::result::Result<T, TimelogError>;

/// Why a timeline submission was refused.
///
/// Every variant is recoverable by the user editing the form and submitting
/// again. The first failing rule wins; failures are never aggregated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntervalError {
    #[error("no activity selected")]
    MissingActivity,

    #[error("{} is empty", .field.label())]
    MissingField { field: TimeFieldKind },

    #[error("{} must be a whole hour between 0 and 23", .field.label())]
    InvalidHour { field: TimeFieldKind },

    #[error("{} must be a whole minute between 0 and {max}", .field.label())]
    InvalidMinute { field: TimeFieldKind, max: u32 },

    #[error("{} falls outside the supported calendar range", .field.label())]
    DateOutOfRange { field: TimeFieldKind },

    #[error("{} does not exist in the schedule timezone on that date", .field.label())]
    NonexistentLocalTime { field: TimeFieldKind },

    #[error("interval lasts {seconds}s, shorter than the {min_seconds}s minimum")]
    DurationTooShort { seconds: i64, min_seconds: i64 },
}

impl IntervalError {
    /// Message suitable for a toast shown to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingActivity => "Please select a todo".to_string(),
            Self::MissingField { field } => format!("Please enter the {}", field.label()),
            Self::InvalidHour { .. } => "Hours can be set from 0 to 23".to_string(),
            Self::InvalidMinute { max, .. } => format!("Minutes can be set from 0 to {max}"),
            Self::DateOutOfRange { .. } => "This date cannot be recorded".to_string(),
            Self::NonexistentLocalTime { field } => {
                format!("The {} does not exist on this date", field.label())
            }
            Self::DurationTooShort { min_seconds, .. } if min_seconds % 60 == 0 => {
                let minutes = min_seconds / 60;
                let unit = if minutes == 1 { "minute" } else { "minutes" };
                format!("Only records of {minutes} {unit} or longer can be saved")
            }
            Self::DurationTooShort { min_seconds, .. } => {
                format!("Only records of {min_seconds} seconds or longer can be saved")
            }
        }
    }

    /// The input the caller should move focus back to, if any.
    #[must_use]
    pub const fn focus_field(&self) -> Option<TimeFieldKind> {
        match self {
            Self::MissingField { field }
            | Self::InvalidHour { field }
            | Self::InvalidMinute { field, .. }
            | Self::DateOutOfRange { field }
            | Self::NonexistentLocalTime { field } => Some(*field),
            Self::MissingActivity | Self::DurationTooShort { .. } => None,
        }
    }
}

/// Why a todo could not be written.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoError {
    #[error("todo title is empty")]
    EmptyTitle,

    #[error("selected date has no representable start in the user's timezone")]
    StartDateUnavailable,
}

impl TodoError {
    /// Message suitable for a toast shown to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyTitle => "Please enter a todo".to_string(),
            Self::StartDateUnavailable => "Todos cannot be written for this date".to_string(),
        }
    }
}

/// Why a sign-up form was refused before reaching the identity provider.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignUpError {
    #[error("Not a valid email address")]
    InvalidEmail,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl SignUpError {
    /// The input the caller should move focus back to.
    #[must_use]
    pub const fn field(&self) -> SignUpField {
        match self {
            Self::InvalidEmail => SignUpField::Email,
            Self::PasswordTooShort => SignUpField::Password,
            Self::PasswordMismatch => SignUpField::ConfirmPassword,
        }
    }
}
