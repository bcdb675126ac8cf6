//! Data models for `GpaTracker`

pub mod course;
pub mod record;
pub mod semester;

pub use course::{Course, CourseEdit, CourseField, MAX_CREDIT_HOURS, MAX_GRADE_POINTS};
pub use record::{AcademicRecord, DEFAULT_SEMESTER_PREFIX};
pub use semester::Semester;
