//! JSON report generator

use crate::core::report::{ReportContext, ReportGenerator};
use serde_json::json;
use std::error::Error;

/// Writes the summary figures next to the record they were computed from
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let document = json!({
            "title": ctx.title,
            "source": ctx.source,
            "summary": ctx.summary,
            "record": ctx.record.to_json(),
        });
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
