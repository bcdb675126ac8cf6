//! Shared library for `GpaTracker`
//! Contains the record model, GPA aggregation, and reporting used by the CLI

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};
