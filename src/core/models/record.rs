//! Academic record model: every semester the user has entered

use super::{Course, CourseEdit, Semester};
use serde_json::{Map, Value};

/// Label used for generated semester identifiers when none is configured
pub const DEFAULT_SEMESTER_PREFIX: &str = "Semester";

/// In-memory store of semesters, keyed by unique identifier and kept in
/// insertion order.
///
/// Generated identifiers come from a counter that only moves forward and
/// skips names already present, so deleting a semester and adding another
/// can never reuse a key that still holds data.
#[derive(Debug, Clone, PartialEq)]
pub struct AcademicRecord {
    semesters: Vec<Semester>,
    next_number: u64,
    prefix: String,
}

impl Default for AcademicRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl AcademicRecord {
    /// Create an empty record using the default "Semester" label
    #[must_use]
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_SEMESTER_PREFIX)
    }

    /// Create an empty record whose generated semesters are named `"<prefix> N"`
    ///
    /// A blank prefix falls back to the default label.
    #[must_use]
    pub fn with_prefix(prefix: &str) -> Self {
        let prefix = prefix.trim();
        Self {
            semesters: Vec::new(),
            next_number: 1,
            prefix: if prefix.is_empty() {
                DEFAULT_SEMESTER_PREFIX.to_string()
            } else {
                prefix.to_string()
            },
        }
    }

    /// Label used for generated semester identifiers
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of semesters
    #[must_use]
    pub fn len(&self) -> usize {
        self.semesters.len()
    }

    /// Whether the record holds no semesters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.semesters.is_empty()
    }

    /// Semesters in insertion order
    #[must_use]
    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    /// Every course row of every semester, in display order
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.semesters.iter().flat_map(|s| s.courses.iter())
    }

    /// Look up a semester by identifier
    #[must_use]
    pub fn semester(&self, id: &str) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.id == id)
    }

    fn semester_mut(&mut self, id: &str) -> Option<&mut Semester> {
        self.semesters.iter_mut().find(|s| s.id == id)
    }

    /// Whether a semester with this identifier exists
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.semester(id).is_some()
    }

    /// Append a new semester holding one blank row.
    ///
    /// # Returns
    /// The generated identifier, guaranteed not to collide with any existing one
    pub fn add_semester(&mut self) -> String {
        let id = self.next_free_id();
        self.semesters.push(Semester::with_blank_row(id.clone()));
        id
    }

    fn next_free_id(&mut self) -> String {
        loop {
            let candidate = format!("{} {}", self.prefix, self.next_number);
            self.next_number += 1;
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }

    /// Store `courses` under `id`.
    ///
    /// An existing semester keeps its position and has its rows replaced;
    /// otherwise the semester is appended.
    pub fn insert_semester(&mut self, id: impl Into<String>, courses: Vec<Course>) {
        let id = id.into();
        if let Some(existing) = self.semester_mut(&id) {
            existing.courses = courses;
        } else {
            self.semesters.push(Semester { id, courses });
        }
    }

    /// Remove a semester and all of its rows.
    ///
    /// # Returns
    /// `true` if a semester was removed; `false` if `id` was not present
    pub fn delete_semester(&mut self, id: &str) -> bool {
        let before = self.semesters.len();
        self.semesters.retain(|s| s.id != id);
        self.semesters.len() != before
    }

    /// Append a blank row to a semester.
    ///
    /// # Returns
    /// The new row's index, or `None` if the semester does not exist
    pub fn add_course(&mut self, id: &str) -> Option<usize> {
        self.semester_mut(id).map(Semester::add_course)
    }

    /// Edit one field of one row in place.
    ///
    /// # Returns
    /// `false` when the semester is unknown or the row index is stale
    pub fn update_course(&mut self, id: &str, row: usize, edit: CourseEdit) -> bool {
        self.semester_mut(id)
            .is_some_and(|semester| semester.update_course(row, edit))
    }

    /// Remove one row by position. Stale indices are ignored.
    pub fn delete_course(&mut self, id: &str, row: usize) -> Option<Course> {
        self.semester_mut(id)
            .and_then(|semester| semester.remove_course(row))
    }

    /// Remove every semester and restart identifier numbering
    pub fn reset(&mut self) {
        self.semesters.clear();
        self.next_number = 1;
    }

    /// Resolve user input to a semester identifier.
    ///
    /// Exact identifiers win; a bare number `N` resolves to `"<prefix> N"`
    /// when that semester exists.
    #[must_use]
    pub fn resolve_id(&self, input: &str) -> Option<String> {
        let input = input.trim();
        if self.contains(input) {
            return Some(input.to_string());
        }
        input
            .parse::<u64>()
            .ok()
            .map(|n| format!("{} {n}", self.prefix))
            .filter(|id| self.contains(id))
    }

    /// Serialize into the semester-keyed JSON shape
    /// (`{"<id>": [{"name", "credit_hours", "grade_points"}, ...]}`)
    #[must_use]
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .semesters
            .iter()
            .map(|s| {
                let rows = s
                    .courses
                    .iter()
                    .map(|c| serde_json::to_value(c).unwrap_or(Value::Null))
                    .collect();
                (s.id.clone(), Value::Array(rows))
            })
            .collect();
        Value::Object(map)
    }
}
