//! Adapters implementing the `timelog-core` timeline ports

pub mod activity_catalog;
pub mod clock;
pub mod notifier;
pub mod timeline_store;

pub use activity_catalog::InMemoryActivityCatalog;
pub use clock::SystemClock;
pub use notifier::TracingNotifier;
pub use timeline_store::InMemoryTimelineStore;
