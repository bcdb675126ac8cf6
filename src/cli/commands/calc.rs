//! Calc command handler
//!
//! Loads each record file and prints per-semester GPA with the overall CGPA.

use super::load_record_logged;
use gpa_tracker::config::Config;
use gpa_tracker::core::metrics::{self, RecordSummary};
use gpa_tracker::core::models::AcademicRecord;
use gpa_tracker::{error, verbose};
use std::io::{self, Write};
use std::path::PathBuf;

/// Run the calc command over every input file.
///
/// A file that fails to load is reported and skipped; the rest still run.
pub fn run(input_files: &[PathBuf], config: &Config) {
    let mut failures = 0;
    for input_file in input_files {
        match load_record_logged(input_file, &config.semesters.name_prefix) {
            Ok(record) => {
                verbose!("Computing {}", input_file.display());
                println!("\n=== {} ===", input_file.display());
                if let Err(e) = write_summary(&mut io::stdout().lock(), &record) {
                    error!("Failed to print summary: {e}");
                }
            }
            Err(e) => {
                error!("{e}");
                eprintln!("{e}");
                failures += 1;
            }
        }
    }

    if failures == 0 {
        println!("\n✓ Processed {} file(s)", input_files.len());
    } else {
        eprintln!("✗ {failures} of {} file(s) failed", input_files.len());
        std::process::exit(1);
    }
}

/// Write the semester table and record totals
///
/// # Errors
/// Returns an error if writing to `out` fails
pub fn write_summary(out: &mut impl Write, record: &AcademicRecord) -> io::Result<()> {
    let summary = metrics::summarize(record);
    write_semester_table(out, &summary)?;
    writeln!(out)?;
    writeln!(out, "CGPA:      {:.2} / 4.00", summary.cgpa)?;
    writeln!(out, "Semesters: {}", summary.semester_count)?;
    writeln!(out, "Courses:   {}", summary.course_count)?;
    writeln!(out, "Credits:   {:.1}", summary.credits)?;
    Ok(())
}

fn write_semester_table(out: &mut impl Write, summary: &RecordSummary) -> io::Result<()> {
    if summary.semesters.is_empty() {
        return writeln!(out, "(no semesters)");
    }

    let width = summary
        .semesters
        .iter()
        .map(|s| s.id.chars().count())
        .max()
        .unwrap_or(0)
        .max("Semester".len());

    writeln!(
        out,
        "{:<width$}  {:>7}  {:>7}  {:>4}",
        "Semester", "Courses", "Credits", "GPA"
    )?;
    for semester in &summary.semesters {
        writeln!(
            out,
            "{:<width$}  {:>7}  {:>7.1}  {:>4.2}",
            semester.id, semester.course_count, semester.credits, semester.gpa
        )?;
    }
    Ok(())
}
