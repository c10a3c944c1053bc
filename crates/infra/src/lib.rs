//! # Timelog Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Configuration loading (environment, TOML, JSON)
//! - Tracing subscriber setup
//! - In-memory adapters for the timeline ports
//! - Application context wiring
//!
//! ## Architecture
//! - Implements traits defined in `timelog-core`
//! - Depends on `timelog-domain` and `timelog-core`
//! - Contains all "impure" code (I/O, clocks, global subscribers)

pub mod adapters;
pub mod config;
pub mod context;
pub mod observability;

// Re-export commonly used items
pub use adapters::{InMemoryActivityCatalog, InMemoryTimelineStore, SystemClock, TracingNotifier};
pub use context::AppContext;
pub use observability::init_tracing;
