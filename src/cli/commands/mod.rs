//! CLI command handlers for `GpaTracker`.
//!
//! Each command is implemented in its own submodule.

pub mod calc;
pub mod config;
pub mod report;
pub mod session;

use gpa_tracker::core::input::load_record;
use gpa_tracker::core::models::AcademicRecord;
use gpa_tracker::{info, warn};
use std::path::Path;

/// Load a record file, logging every parse issue as a warning
fn load_record_logged(path: &Path, prefix: &str) -> Result<AcademicRecord, String> {
    let parsed = load_record(path, prefix)
        .map_err(|e| format!("✗ Failed to load {}: {e}", path.display()))?;

    for issue in &parsed.issues {
        warn!("{}: {issue}", path.display());
    }
    info!(
        "Loaded {} semesters from {} ({} issues)",
        parsed.record.len(),
        path.display(),
        parsed.issues.len()
    );

    Ok(parsed.record)
}
