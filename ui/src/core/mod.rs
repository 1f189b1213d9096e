//! Platform-agnostic helpers shared by views: configuration, formatting and timers.

pub mod config;
pub mod format;
pub mod timing;
