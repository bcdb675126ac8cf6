//! Core module: record model, GPA aggregation, sessions, and reports

pub mod config;
pub mod input;
pub mod metrics;
pub mod models;
pub mod report;
pub mod session;

/// Returns the current version of the `GpaTracker` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
