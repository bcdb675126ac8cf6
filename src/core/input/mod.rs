//! Loading academic records from external data

pub mod json_parser;

pub use json_parser::{
    load_record, parse_course, parse_courses, parse_record, parse_record_str, ParseIssue,
    ParsedCourses, ParsedRecord,
};
