//! User-facing notices
//!
//! A notice is handed to the notification collaborator and forgotten; there
//! is no acknowledgement.

use serde::{Deserialize, Serialize};

use crate::impl_domain_str_conversions;

/// Visual weight of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    #[default]
    Info,
    Success,
    Error,
}

impl_domain_str_conversions!(NoticeKind {
    Info => "info",
    Success => "success",
    Error => "error",
});

/// Where on screen a notice should appear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NoticePosition {
    #[default]
    Top,
    Bottom,
}

impl_domain_str_conversions!(NoticePosition {
    Top => "top",
    Bottom => "bottom",
});

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub position: NoticePosition,
}

impl Notice {
    /// Informational notice pinned to the top of the screen
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, message: message.into(), position: NoticePosition::Top }
    }
}
