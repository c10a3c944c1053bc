//! Wall clock backed by the operating system

use chrono::{DateTime, Utc};
use timelog_core::Clock;

/// Reads the current time from the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
