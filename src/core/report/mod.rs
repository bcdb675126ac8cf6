//! Report generation for academic records
//!
//! Reports summarise a record (CGPA, per-semester GPA, course tables) in a
//! file format chosen by the user.

pub mod formats;

use crate::core::metrics::{self, RecordSummary};
use crate::core::models::AcademicRecord;
use std::error::Error;
use std::path::Path;

pub use formats::{JsonReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Holds the record alongside its computed summary so every format renders
/// the same numbers.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Report heading
    pub title: &'a str,
    /// Where the record came from (file path or "session")
    pub source: &'a str,
    /// The record being reported
    pub record: &'a AcademicRecord,
    /// Figures computed from `record`
    pub summary: RecordSummary,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context, computing the summary from `record`
    #[must_use]
    pub fn new(title: &'a str, source: &'a str, record: &'a AcademicRecord) -> Self {
        Self {
            title,
            source,
            record,
            summary: metrics::summarize(record),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Pick the generator for a format
#[must_use]
pub fn generator_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}
