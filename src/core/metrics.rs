//! GPA and CGPA aggregation
//!
//! Pure functions over typed course rows. Only named rows with positive
//! credit hours carry weight; the course and credit counters only require a
//! name. Nothing here caches, so callers simply re-run these after every
//! mutation.

use crate::core::models::{AcademicRecord, Course, MAX_GRADE_POINTS};
use serde::Serialize;

/// Round to `places` decimal places, halves away from zero
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

/// Credit-weighted grade average over any sequence of rows.
///
/// Result is `0.0` when no row carries weight, otherwise the ratio clamped to
/// `0.0..=4.0` and rounded to two decimals.
#[must_use]
pub fn weighted_gpa<'a, I>(courses: I) -> f64
where
    I: IntoIterator<Item = &'a Course>,
{
    let (total_credits, total_points) = courses
        .into_iter()
        .filter(|c| c.is_weighted())
        .fold((0.0, 0.0), |(credits, points), c| {
            (credits + c.credit_hours, points + c.quality_points())
        });

    if total_credits <= 0.0 {
        return 0.0;
    }

    let ratio = total_points / total_credits;
    if ratio.is_nan() {
        return 0.0;
    }
    round_to(ratio.clamp(0.0, MAX_GRADE_POINTS), 2)
}

/// GPA for a single semester's rows
#[must_use]
pub fn semester_gpa(courses: &[Course]) -> f64 {
    weighted_gpa(courses)
}

/// Cumulative GPA across every row of every semester.
///
/// Rows are pooled before averaging, so a semester with more credits weighs
/// proportionally more than one with fewer.
#[must_use]
pub fn cumulative_gpa(record: &AcademicRecord) -> f64 {
    weighted_gpa(record.courses())
}

/// Number of named rows in one semester
#[must_use]
pub fn course_count(courses: &[Course]) -> usize {
    courses.iter().filter(|c| c.is_named()).count()
}

/// Sum of credit hours over named rows in one semester, unrounded
#[must_use]
pub fn credit_count(courses: &[Course]) -> f64 {
    courses
        .iter()
        .filter(|c| c.is_named())
        .map(|c| c.credit_hours)
        .sum()
}

/// Number of named rows across the record, including zero-credit rows
#[must_use]
pub fn total_course_count(record: &AcademicRecord) -> usize {
    record.courses().filter(|c| c.is_named()).count()
}

/// Credit hours over named rows across the record, rounded to one decimal
#[must_use]
pub fn total_credit_count(record: &AcademicRecord) -> f64 {
    let total: f64 = record
        .courses()
        .filter(|c| c.is_named())
        .map(|c| c.credit_hours)
        .sum();
    round_to(total, 1)
}

/// Per-semester figures for summaries and reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterSummary {
    /// Semester identifier
    pub id: String,
    /// Semester GPA
    pub gpa: f64,
    /// Named rows in the semester
    pub course_count: usize,
    /// Credit hours over named rows
    pub credits: f64,
}

/// Whole-record figures: the dashboard numbers plus one row per semester
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSummary {
    /// Cumulative GPA
    pub cgpa: f64,
    /// Number of semesters, including empty ones
    pub semester_count: usize,
    /// Named rows across all semesters
    pub course_count: usize,
    /// Credit hours across all semesters, rounded to one decimal
    pub credits: f64,
    /// CGPA as a fraction of the top of the scale, in `0.0..=1.0`
    pub progress: f64,
    /// One entry per semester, in record order
    pub semesters: Vec<SemesterSummary>,
}

/// Compute the summary for one semester
#[must_use]
pub fn summarize_semester(id: &str, courses: &[Course]) -> SemesterSummary {
    SemesterSummary {
        id: id.to_string(),
        gpa: semester_gpa(courses),
        course_count: course_count(courses),
        credits: credit_count(courses),
    }
}

/// Compute every figure shown for a record
#[must_use]
pub fn summarize(record: &AcademicRecord) -> RecordSummary {
    let cgpa = cumulative_gpa(record);
    RecordSummary {
        cgpa,
        semester_count: record.len(),
        course_count: total_course_count(record),
        credits: total_credit_count(record),
        progress: (cgpa / MAX_GRADE_POINTS).min(1.0),
        semesters: record
            .semesters()
            .iter()
            .map(|s| summarize_semester(&s.id, &s.courses))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_inputs_are_zero() {
        assert!(approx(semester_gpa(&[]), 0.0));
        assert!(approx(cumulative_gpa(&AcademicRecord::new()), 0.0));
        assert_eq!(total_course_count(&AcademicRecord::new()), 0);
        assert!(approx(total_credit_count(&AcademicRecord::new()), 0.0));
    }

    #[test]
    fn test_blank_name_excluded() {
        assert!(approx(semester_gpa(&[Course::new("", 3.0, 4.0)]), 0.0));
        assert!(approx(semester_gpa(&[Course::new("  \t", 3.0, 4.0)]), 0.0));
    }

    #[test]
    fn test_zero_credits_excluded() {
        assert!(approx(semester_gpa(&[Course::new("X", 0.0, 4.0)]), 0.0));
        assert!(approx(semester_gpa(&[Course::new("X", -2.0, 4.0)]), 0.0));
    }

    #[test]
    fn test_credit_weighting() {
        let courses = [Course::new("A", 3.0, 4.0), Course::new("B", 1.0, 2.0)];
        assert!(approx(semester_gpa(&courses), 3.5));
    }

    #[test]
    fn test_rounds_to_two_places() {
        let courses = [
            Course::new("A", 3.0, 4.0),
            Course::new("B", 3.0, 3.0),
            Course::new("C", 3.0, 3.0),
        ];
        // 30 / 9 = 3.333...
        assert!(approx(semester_gpa(&courses), 3.33));
    }

    #[test]
    fn test_duplicate_names_are_summed() {
        let courses = [Course::new("A", 3.0, 4.0), Course::new("A", 3.0, 2.0)];
        assert!(approx(semester_gpa(&courses), 3.0));
    }

    #[test]
    fn test_clamps_above_scale() {
        let courses = [Course::new("A", 3.0, 5.5)];
        assert!(approx(semester_gpa(&courses), 4.0));
    }

    #[test]
    fn test_clamps_below_zero() {
        let courses = [Course::new("A", 3.0, -1.0), Course::new("B", 1.0, 1.0)];
        assert!(approx(semester_gpa(&courses), 0.0));
    }

    #[test]
    fn test_hand_built_non_finite_rows_stay_in_range() {
        let nan_grade = Course {
            name: "A".to_string(),
            credit_hours: 3.0,
            grade_points: f64::NAN,
        };
        assert!(approx(semester_gpa(&[nan_grade]), 0.0));

        let infinite_credit = Course {
            name: "B".to_string(),
            credit_hours: f64::INFINITY,
            grade_points: 3.0,
        };
        let gpa = semester_gpa(&[infinite_credit]);
        assert!((0.0..=4.0).contains(&gpa));
    }

    #[test]
    fn test_cgpa_weights_by_credits_not_semesters() {
        let mut record = AcademicRecord::new();
        record.insert_semester("Semester 1", vec![Course::new("A", 3.0, 4.0)]);
        record.insert_semester("Semester 2", vec![Course::new("B", 1.0, 2.0)]);

        let naive = (semester_gpa(&record.semesters()[0].courses)
            + semester_gpa(&record.semesters()[1].courses))
            / 2.0;
        assert!(approx(naive, 3.0));
        assert!(approx(cumulative_gpa(&record), 3.5));
    }

    #[test]
    fn test_cgpa_tolerates_empty_semesters() {
        let mut record = AcademicRecord::new();
        record.insert_semester("Empty", Vec::new());
        record.insert_semester("Drafts", vec![Course::blank(), Course::blank()]);
        assert!(approx(cumulative_gpa(&record), 0.0));
    }

    #[test]
    fn test_counters_keep_zero_credit_named_rows() {
        let mut record = AcademicRecord::new();
        record.insert_semester(
            "Fall",
            vec![
                Course::new("Seminar", 0.0, 4.0),
                Course::new("Chemistry", 3.5, 3.0),
                Course::new("", 4.0, 4.0),
            ],
        );

        assert_eq!(total_course_count(&record), 2);
        assert!(approx(total_credit_count(&record), 3.5));
        assert!(approx(cumulative_gpa(&record), 3.0));
    }

    #[test]
    fn test_total_credit_count_rounds_to_one_place() {
        let mut record = AcademicRecord::new();
        record.insert_semester(
            "Fall",
            vec![Course::new("A", 1.33, 4.0), Course::new("B", 1.33, 4.0)],
        );
        assert!(approx(total_credit_count(&record), 2.7));
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let mut record = AcademicRecord::new();
        record.insert_semester("Fall", vec![Course::new("A", 3.0, 3.7)]);
        record.insert_semester("Spring", vec![Course::new("B", 4.0, 2.3)]);

        let first = summarize(&record);
        let second = summarize(&record);
        assert_eq!(first, second);
    }

    #[test]
    fn test_summarize() {
        let mut record = AcademicRecord::new();
        record.insert_semester("Fall", vec![Course::new("A", 3.0, 4.0)]);
        record.insert_semester("Spring", vec![Course::new("B", 1.0, 2.0), Course::blank()]);

        let summary = summarize(&record);
        assert!(approx(summary.cgpa, 3.5));
        assert_eq!(summary.semester_count, 2);
        assert_eq!(summary.course_count, 2);
        assert!(approx(summary.credits, 4.0));
        assert!(approx(summary.progress, 0.875));
        assert_eq!(summary.semesters.len(), 2);
        assert_eq!(summary.semesters[1].id, "Spring");
        assert!(approx(summary.semesters[1].gpa, 2.0));
        assert_eq!(summary.semesters[1].course_count, 1);
    }
}
