//! Display helpers shared by the timeline screens

pub mod format;
