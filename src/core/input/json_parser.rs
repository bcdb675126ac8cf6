//! JSON parser for academic records
//!
//! This is the only place untyped data enters the crate. Every row that is a
//! JSON object becomes a [`Course`]; anything that had to be coerced along the
//! way is reported as a [`ParseIssue`] instead of failing the whole load.

use crate::core::models::course::{finite_or_zero, parse_number};
use crate::core::models::{AcademicRecord, Course, CourseField};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

/// Accepted keys for the course name, canonical first
const NAME_KEYS: [&str; 2] = ["name", "Course Name"];
/// Accepted keys for credit hours, canonical first
const CREDIT_KEYS: [&str; 2] = ["credit_hours", "Credit Hours"];
/// Accepted keys for grade points, canonical first
const GRADE_KEYS: [&str; 2] = ["grade_points", "Grade Points"];

/// Something that was skipped or coerced while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Semester the issue belongs to, if any
    pub semester: Option<String>,
    /// Zero-based row index within the semester, if any
    pub row: Option<usize>,
    /// Human-readable description
    pub message: String,
}

impl ParseIssue {
    fn new(semester: Option<&str>, row: Option<usize>, message: String) -> Self {
        Self {
            semester: semester.map(str::to_string),
            row,
            message,
        }
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.semester, self.row) {
            (Some(semester), Some(row)) => write!(f, "{semester}, row {}: {}", row + 1, self.message),
            (Some(semester), None) => write!(f, "{semester}: {}", self.message),
            (None, Some(row)) => write!(f, "row {}: {}", row + 1, self.message),
            (None, None) => write!(f, "{}", self.message),
        }
    }
}

/// Typed rows parsed from one course list
#[derive(Debug, Clone, Default)]
pub struct ParsedCourses {
    /// Courses in input order; rows that were not objects are omitted
    pub courses: Vec<Course>,
    /// Problems encountered along the way
    pub issues: Vec<ParseIssue>,
}

/// A typed record parsed from the semester-keyed JSON shape
#[derive(Debug, Clone)]
pub struct ParsedRecord {
    /// The resulting record, semesters in input key order
    pub record: AcademicRecord,
    /// Problems encountered along the way
    pub issues: Vec<ParseIssue>,
}

/// Parse one course row.
///
/// # Returns
/// The course plus notes about any coerced fields
///
/// # Errors
/// Returns an error message if `value` is not a JSON object
pub fn parse_course(value: &Value) -> Result<(Course, Vec<String>), String> {
    let obj = value
        .as_object()
        .ok_or_else(|| format!("expected a course object, found {}", kind_of(value)))?;

    let mut notes = Vec::new();
    let name = coerce_name(obj, &mut notes);
    let credit_hours = coerce_number(obj, &CREDIT_KEYS, CourseField::CreditHours, &mut notes);
    let grade_points = coerce_number(obj, &GRADE_KEYS, CourseField::GradePoints, &mut notes);

    // Kept as given; aggregation clamps the result
    for (field, value) in [
        (CourseField::CreditHours, credit_hours),
        (CourseField::GradePoints, grade_points),
    ] {
        if let Err(reason) = field.check_range(value) {
            notes.push(reason);
        }
    }

    Ok((Course::new(name, credit_hours, grade_points), notes))
}

/// Parse a list of course rows.
///
/// A value that is not an array yields no courses and a single issue.
#[must_use]
pub fn parse_courses(value: &Value) -> ParsedCourses {
    parse_rows(None, value)
}

fn parse_rows(semester: Option<&str>, value: &Value) -> ParsedCourses {
    let mut parsed = ParsedCourses::default();

    let Some(rows) = value.as_array() else {
        parsed.issues.push(ParseIssue::new(
            semester,
            None,
            format!("expected a list of courses, found {}", kind_of(value)),
        ));
        return parsed;
    };

    for (idx, row) in rows.iter().enumerate() {
        match parse_course(row) {
            Ok((course, notes)) => {
                parsed.courses.push(course);
                parsed.issues.extend(
                    notes
                        .into_iter()
                        .map(|note| ParseIssue::new(semester, Some(idx), note)),
                );
            }
            Err(message) => {
                parsed
                    .issues
                    .push(ParseIssue::new(semester, Some(idx), format!("{message}; row skipped")));
            }
        }
    }

    parsed
}

/// Parse the semester-keyed record shape.
///
/// # Arguments
/// * `value` - JSON object mapping semester id to a list of course rows
/// * `prefix` - Label for semesters generated later in the session
#[must_use]
pub fn parse_record(value: &Value, prefix: &str) -> ParsedRecord {
    let mut record = AcademicRecord::with_prefix(prefix);
    let mut issues = Vec::new();

    let Some(semesters) = value.as_object() else {
        issues.push(ParseIssue::new(
            None,
            None,
            format!("expected an object keyed by semester, found {}", kind_of(value)),
        ));
        return ParsedRecord { record, issues };
    };

    for (id, rows) in semesters {
        let parsed = parse_rows(Some(id), rows);
        record.insert_semester(id.clone(), parsed.courses);
        issues.extend(parsed.issues);
    }

    ParsedRecord { record, issues }
}

/// Parse a record from JSON text
///
/// # Errors
/// Returns an error if `text` is not valid JSON
pub fn parse_record_str(text: &str, prefix: &str) -> Result<ParsedRecord, serde_json::Error> {
    let value: Value = serde_json::from_str(text)?;
    Ok(parse_record(&value, prefix))
}

/// Load a record from a JSON file
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid JSON
pub fn load_record<P: AsRef<Path>>(path: P, prefix: &str) -> Result<ParsedRecord, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_record_str(&content, prefix)?)
}

fn lookup<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| obj.get(*key))
}

fn coerce_name(obj: &Map<String, Value>, notes: &mut Vec<String>) -> String {
    match lookup(obj, &NAME_KEYS) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => {
            notes.push(format!("name: {} is not text, using blank", kind_of(other)));
            String::new()
        }
    }
}

fn coerce_number(
    obj: &Map<String, Value>,
    keys: &[&str],
    field: CourseField,
    notes: &mut Vec<String>,
) -> f64 {
    match lookup(obj, keys) {
        None | Some(Value::Null) => 0.0,
        Some(Value::Number(n)) => n.as_f64().map_or(0.0, finite_or_zero),
        Some(Value::String(s)) if s.trim().is_empty() => 0.0,
        Some(Value::String(s)) => parse_number(s).unwrap_or_else(|| {
            notes.push(format!("{field}: '{s}' is not a number, using 0"));
            0.0
        }),
        Some(other) => {
            notes.push(format!("{field}: {} is not a number, using 0", kind_of(other)));
            0.0
        }
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
