//! Markdown report generator
//!
//! Renders the `templates/summary.md` askama template. Tables render well in
//! GitHub, GitLab, and VS Code previews.

use crate::core::metrics::SemesterSummary;
use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

/// Template data for a single course row
struct CourseRow {
    name: String,
    credits: String,
    grade: String,
    counted: &'static str,
}

/// Template data for one semester: summary figures plus its rows
struct SemesterSection {
    id: String,
    course_count: usize,
    credits: String,
    gpa: String,
    courses: Vec<CourseRow>,
}

#[derive(Template)]
#[template(path = "summary.md", escape = "none")]
struct SummaryTemplate<'a> {
    title: &'a str,
    source: &'a str,
    cgpa: String,
    progress: String,
    semester_count: usize,
    course_count: usize,
    credits: String,
    semesters: Vec<SemesterSection>,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn build_template<'a>(ctx: &'a ReportContext) -> SummaryTemplate<'a> {
        let semesters = ctx
            .record
            .semesters()
            .iter()
            .zip(&ctx.summary.semesters)
            .map(|(semester, summary)| Self::section(summary, semester))
            .collect();

        SummaryTemplate {
            title: ctx.title,
            source: ctx.source,
            cgpa: format!("{:.2}", ctx.summary.cgpa),
            progress: format!("{:.0}%", ctx.summary.progress * 100.0),
            semester_count: ctx.summary.semester_count,
            course_count: ctx.summary.course_count,
            credits: format!("{:.1}", ctx.summary.credits),
            semesters,
        }
    }

    fn section(
        summary: &SemesterSummary,
        semester: &crate::core::models::Semester,
    ) -> SemesterSection {
        // Draft rows stay out of the course table
        let courses = semester
            .courses
            .iter()
            .filter(|c| c.is_named())
            .map(|c| CourseRow {
                name: escape_cell(c.name.trim()),
                credits: format!("{:.1}", c.credit_hours),
                grade: format!("{:.2}", c.grade_points),
                counted: if c.is_weighted() { "yes" } else { "no" },
            })
            .collect();

        SemesterSection {
            id: escape_cell(&summary.id),
            course_count: summary.course_count,
            credits: format!("{:.1}", summary.credits),
            gpa: format!("{:.2}", summary.gpa),
            courses,
        }
    }
}

/// Keep user text from breaking table cells
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::build_template(ctx).render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{AcademicRecord, Course};

    fn sample_record() -> AcademicRecord {
        let mut record = AcademicRecord::new();
        record.insert_semester(
            "Semester 1",
            vec![Course::new("Calculus I", 3.0, 4.0), Course::blank()],
        );
        record.insert_semester(
            "Semester 2",
            vec![Course::new("Physics | Lab", 1.0, 2.0), Course::new("Seminar", 0.0, 4.0)],
        );
        record
    }

    #[test]
    fn test_render_contains_overview() {
        let record = sample_record();
        let ctx = ReportContext::new("My Grades", "grades.json", &record);
        let output = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(output.starts_with("# My Grades"));
        assert!(output.contains("| CGPA | 3.50 / 4.00 |"));
        assert!(output.contains("| Semesters | 2 |"));
        assert!(output.contains("| Courses | 3 |"));
        assert!(output.contains("| Credits | 4.0 |"));
        assert!(output.contains("| Progress | 88% |"));
    }

    #[test]
    fn test_render_semester_rows() {
        let record = sample_record();
        let ctx = ReportContext::new("My Grades", "grades.json", &record);
        let output = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(output.contains("| Semester 1 | 1 | 3.0 | 4.00 |"));
        assert!(output.contains("| Semester 2 | 2 | 1.0 | 2.00 |"));
        assert!(output.contains("| Physics \\| Lab | 1.0 | 2.00 | yes |"));
        assert!(output.contains("| Seminar | 0.0 | 4.00 | no |"));
    }

    #[test]
    fn test_render_empty_record() {
        let record = AcademicRecord::new();
        let ctx = ReportContext::new("Empty", "session", &record);
        let output = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(output.contains("No semesters recorded."));
        assert!(output.contains("| CGPA | 0.00 / 4.00 |"));
    }
}
