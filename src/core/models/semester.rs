//! Semester model

use super::{Course, CourseEdit};
use serde::{Deserialize, Serialize};

/// A named group of course rows, kept in display order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Semester {
    /// Unique identifier within an academic record (e.g., "Semester 2")
    pub id: String,

    /// Course rows in the order they were entered
    pub courses: Vec<Course>,
}

impl Semester {
    /// Create an empty semester
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            courses: Vec::new(),
        }
    }

    /// Create a semester with a single blank row, ready for editing
    #[must_use]
    pub fn with_blank_row(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            courses: vec![Course::blank()],
        }
    }

    /// Append a blank row and return its index
    pub fn add_course(&mut self) -> usize {
        self.courses.push(Course::blank());
        self.courses.len() - 1
    }

    /// Edit one field of the row at `index`.
    ///
    /// # Returns
    /// `false` if `index` is out of range; nothing is changed in that case
    pub fn update_course(&mut self, index: usize, edit: CourseEdit) -> bool {
        self.courses.get_mut(index).is_some_and(|course| {
            course.apply_edit(edit);
            true
        })
    }

    /// Remove the row at `index`, or `None` if the index is stale
    pub fn remove_course(&mut self, index: usize) -> Option<Course> {
        (index < self.courses.len()).then(|| self.courses.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_blank_row() {
        let semester = Semester::with_blank_row("Semester 1");
        assert_eq!(semester.id, "Semester 1");
        assert_eq!(semester.courses, vec![Course::blank()]);
    }

    #[test]
    fn test_add_course_returns_index() {
        let mut semester = Semester::new("Fall");
        assert_eq!(semester.add_course(), 0);
        assert_eq!(semester.add_course(), 1);
        assert_eq!(semester.courses.len(), 2);
    }

    #[test]
    fn test_update_course_in_range() {
        let mut semester = Semester::with_blank_row("Fall");
        assert!(semester.update_course(0, CourseEdit::Name("Chemistry".to_string())));
        assert_eq!(semester.courses[0].name, "Chemistry");
    }

    #[test]
    fn test_update_course_stale_index_is_noop() {
        let mut semester = Semester::with_blank_row("Fall");
        let before = semester.clone();
        assert!(!semester.update_course(3, CourseEdit::CreditHours(3.0)));
        assert_eq!(semester, before);
    }

    #[test]
    fn test_remove_course() {
        let mut semester = Semester::new("Fall");
        semester.courses.push(Course::new("A", 3.0, 4.0));
        semester.courses.push(Course::new("B", 1.0, 2.0));

        let removed = semester.remove_course(0);
        assert_eq!(removed.map(|c| c.name), Some("A".to_string()));
        assert_eq!(semester.courses.len(), 1);
        assert_eq!(semester.courses[0].name, "B");
    }

    #[test]
    fn test_remove_course_stale_index() {
        let mut semester = Semester::with_blank_row("Fall");
        assert!(semester.remove_course(1).is_none());
        assert!(semester.remove_course(usize::MAX).is_none());
        assert_eq!(semester.courses.len(), 1);
    }
}
