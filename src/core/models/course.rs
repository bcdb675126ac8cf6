//! Course model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest grade point value on the scale.
pub const MAX_GRADE_POINTS: f64 = 4.0;

/// Most credit hours a single course row may carry.
pub const MAX_CREDIT_HOURS: f64 = 10.0;

/// Represents one course row within a semester
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Course {
    /// Course name (e.g., "Data Structures"). Blank names mark draft rows.
    pub name: String,

    /// Credit hours (can be fractional). Rows with zero credits carry no weight.
    pub credit_hours: f64,

    /// Grade points earned, expected within `0.0..=4.0`
    pub grade_points: f64,
}

impl Course {
    /// Create a new course
    ///
    /// Non-finite numeric values are stored as `0.0`.
    ///
    /// # Arguments
    /// * `name` - Course name
    /// * `credit_hours` - Credit hours (can be fractional)
    /// * `grade_points` - Grade points earned
    #[must_use]
    pub fn new(name: impl Into<String>, credit_hours: f64, grade_points: f64) -> Self {
        Self {
            name: name.into(),
            credit_hours: finite_or_zero(credit_hours),
            grade_points: finite_or_zero(grade_points),
        }
    }

    /// A draft row: empty name, no credits, no grade
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Whether the row has a non-blank name and therefore counts as a course
    #[must_use]
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Whether the row participates in credit-weighted averages
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.is_named() && self.credit_hours > 0.0
    }

    /// Credit hours multiplied by grade points
    #[must_use]
    pub fn quality_points(&self) -> f64 {
        self.credit_hours * self.grade_points
    }

    /// Apply a single-field edit in place
    pub fn apply_edit(&mut self, edit: CourseEdit) {
        match edit {
            CourseEdit::Name(name) => self.name = name,
            CourseEdit::CreditHours(hours) => self.credit_hours = finite_or_zero(hours),
            CourseEdit::GradePoints(points) => self.grade_points = finite_or_zero(points),
        }
    }
}

/// Maps `NaN` and infinities to `0.0`
#[must_use]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Editable fields of a course row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    /// The course name
    Name,
    /// Credit hours
    CreditHours,
    /// Grade points
    GradePoints,
}

impl CourseField {
    /// Accepted bounds for a numeric field; `None` for the name
    #[must_use]
    pub const fn bounds(self) -> Option<(f64, f64)> {
        match self {
            Self::Name => None,
            Self::CreditHours => Some((0.0, MAX_CREDIT_HOURS)),
            Self::GradePoints => Some((0.0, MAX_GRADE_POINTS)),
        }
    }

    /// Check a numeric value against [`bounds`](Self::bounds).
    ///
    /// # Errors
    /// Returns a message naming the field and its range when `value` falls
    /// outside it
    pub fn check_range(self, value: f64) -> Result<(), String> {
        match self.bounds() {
            Some((low, high)) if !(low..=high).contains(&value) => Err(format!(
                "{self} must be within {low} to {high}, got {value}"
            )),
            _ => Ok(()),
        }
    }
}

impl FromStr for CourseField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" | "course" | "course_name" => Ok(Self::Name),
            "credits" | "credit" | "hours" | "credit_hours" => Ok(Self::CreditHours),
            "grade" | "points" | "gp" | "grade_points" => Ok(Self::GradePoints),
            _ => Err(format!("Unknown course field: {s}")),
        }
    }
}

impl fmt::Display for CourseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::CreditHours => write!(f, "credit_hours"),
            Self::GradePoints => write!(f, "grade_points"),
        }
    }
}

/// A single-field update to a course row
#[derive(Debug, Clone, PartialEq)]
pub enum CourseEdit {
    /// Replace the name
    Name(String),
    /// Replace credit hours
    CreditHours(f64),
    /// Replace grade points
    GradePoints(f64),
}

impl CourseEdit {
    /// Build an edit for `field` from raw text.
    ///
    /// Numeric fields that fail to parse become `0.0`, the same coercion the
    /// JSON boundary applies.
    #[must_use]
    pub fn from_text(field: CourseField, value: &str) -> Self {
        match field {
            CourseField::Name => Self::Name(value.to_string()),
            CourseField::CreditHours => Self::CreditHours(parse_number(value).unwrap_or(0.0)),
            CourseField::GradePoints => Self::GradePoints(parse_number(value).unwrap_or(0.0)),
        }
    }

    /// Check that a numeric edit stays on the scale
    ///
    /// # Errors
    /// Returns a message when credit hours fall outside `0..=10` or grade
    /// points outside `0..=4`
    pub fn validate(&self) -> Result<(), String> {
        match *self {
            Self::Name(_) => Ok(()),
            Self::CreditHours(value) | Self::GradePoints(value) => {
                self.field().check_range(value)
            }
        }
    }

    /// The field this edit touches
    #[must_use]
    pub const fn field(&self) -> CourseField {
        match self {
            Self::Name(_) => CourseField::Name,
            Self::CreditHours(_) => CourseField::CreditHours,
            Self::GradePoints(_) => CourseField::GradePoints,
        }
    }
}

/// Parse trimmed text as a finite `f64`
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
