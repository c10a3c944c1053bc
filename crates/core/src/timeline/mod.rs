//! Manually logged timelines
//!
//! The builder turns raw form text into a validated [`TimeInterval`]; the
//! service wires it to the activity lookup, persistence and notification
//! ports.
//!
//! [`TimeInterval`]: timelog_domain::TimeInterval

pub mod builder;
pub mod form;
pub mod ports;
pub mod schedule;
pub mod selected_date;
pub mod service;

pub use service::{Submission, TimelineService};
