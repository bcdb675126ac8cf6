//! Session actions
//!
//! The interactive front end owns one [`AcademicRecord`] and feeds it typed
//! [`Action`]s through [`apply`]. Actions that cannot be carried out leave the
//! record untouched and say so in the returned [`Outcome`]; they never fail.

use crate::core::models::{AcademicRecord, CourseEdit, CourseField};
use std::fmt;

/// A single user-initiated change to the record
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Append a new semester with one blank row
    AddSemester,
    /// Remove a semester and its rows
    DeleteSemester(String),
    /// Append a blank row to a semester
    AddCourse(String),
    /// Change one field of one row; out-of-range numbers are refused
    EditCourse {
        /// Semester identifier (or its number)
        semester: String,
        /// Zero-based row index
        row: usize,
        /// The new field value
        edit: CourseEdit,
    },
    /// Remove one row
    DeleteCourse {
        /// Semester identifier (or its number)
        semester: String,
        /// Zero-based row index
        row: usize,
    },
    /// Remove every semester
    Reset,
}

/// Result of applying an [`Action`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The record changed; the message describes how
    Changed(String),
    /// Nothing changed; the message says why
    Unchanged(String),
}

impl Outcome {
    /// Whether the record was modified
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Changed(msg) | Self::Unchanged(msg) => f.write_str(msg),
        }
    }
}

/// Apply one action to the record
pub fn apply(record: &mut AcademicRecord, action: Action) -> Outcome {
    match action {
        Action::AddSemester => {
            let id = record.add_semester();
            Outcome::Changed(format!("Added {id}"))
        }
        Action::DeleteSemester(input) => match record.resolve_id(&input) {
            Some(id) if record.delete_semester(&id) => Outcome::Changed(format!("Deleted {id}")),
            _ => unknown_semester(&input),
        },
        Action::AddCourse(input) => {
            let Some(id) = record.resolve_id(&input) else {
                return unknown_semester(&input);
            };
            match record.add_course(&id) {
                Some(row) => Outcome::Changed(format!("Added row {} to {id}", row + 1)),
                None => unknown_semester(&input),
            }
        }
        Action::EditCourse {
            semester,
            row,
            edit,
        } => {
            let Some(id) = record.resolve_id(&semester) else {
                return unknown_semester(&semester);
            };
            if let Err(reason) = edit.validate() {
                return Outcome::Unchanged(reason);
            }
            let field = edit.field();
            if record.update_course(&id, row, edit) {
                Outcome::Changed(format!("Updated {field} of {id}, row {}", row + 1))
            } else {
                stale_row(&id, row)
            }
        }
        Action::DeleteCourse { semester, row } => {
            let Some(id) = record.resolve_id(&semester) else {
                return unknown_semester(&semester);
            };
            match record.delete_course(&id, row) {
                Some(_) => Outcome::Changed(format!("Deleted row {} of {id}", row + 1)),
                None => stale_row(&id, row),
            }
        }
        Action::Reset => {
            if record.is_empty() {
                Outcome::Unchanged("Nothing to reset".to_string())
            } else {
                record.reset();
                Outcome::Changed("Cleared all semesters".to_string())
            }
        }
    }
}

fn unknown_semester(input: &str) -> Outcome {
    Outcome::Unchanged(format!("No semester named '{input}'"))
}

fn stale_row(id: &str, row: usize) -> Outcome {
    Outcome::Unchanged(format!("{id} has no row {}", row + 1))
}

/// One line of session input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Mutate the record
    Apply(Action),
    /// Print the summary table
    Show,
    /// Print the record in its JSON shape
    Json,
    /// Print the command reference
    Help,
    /// Leave the session
    Quit,
}

/// Command reference printed by `help`
pub const HELP: &str = "\
Commands (rows are numbered from 1; quote ids that contain spaces):
  add-semester                          add a semester with one blank row
  del-semester <id>                     delete a semester
  add-course <id>                       append a blank row
  edit <id> <row> <field> <value>       field: name | credits (0-10) | grade (0-4)
  del-course <id> <row>                 delete a row
  reset                                 delete every semester
  show                                  print GPA summary
  json                                  print the record as JSON
  help                                  print this help
  quit                                  leave the session
A bare number N as <id> refers to the generated semester with that number.";

/// Parse one line of session input.
///
/// # Errors
/// Returns a usage message when the line is not a recognised command or its
/// arguments are missing or malformed
pub fn parse_command(line: &str) -> Result<Command, String> {
    let tokens = tokenize(line)?;
    let Some((verb, args)) = tokens.split_first() else {
        return Err("Empty command; type 'help' for a list".to_string());
    };

    match verb.to_lowercase().as_str() {
        "add-semester" | "add-sem" => {
            expect_args(args, 0, "add-semester")?;
            Ok(Command::Apply(Action::AddSemester))
        }
        "del-semester" | "del-sem" => {
            expect_args(args, 1, "del-semester <id>")?;
            Ok(Command::Apply(Action::DeleteSemester(args[0].clone())))
        }
        "add-course" => {
            expect_args(args, 1, "add-course <id>")?;
            Ok(Command::Apply(Action::AddCourse(args[0].clone())))
        }
        "edit" => {
            if args.len() < 3 {
                return Err("Usage: edit <id> <row> <field> <value>".to_string());
            }
            let row = parse_row(&args[1])?;
            let field: CourseField = args[2].parse()?;
            let value = args[3..].join(" ");
            Ok(Command::Apply(Action::EditCourse {
                semester: args[0].clone(),
                row,
                edit: CourseEdit::from_text(field, &value),
            }))
        }
        "del-course" => {
            expect_args(args, 2, "del-course <id> <row>")?;
            Ok(Command::Apply(Action::DeleteCourse {
                semester: args[0].clone(),
                row: parse_row(&args[1])?,
            }))
        }
        "reset" => Ok(Command::Apply(Action::Reset)),
        "show" => Ok(Command::Show),
        "json" => Ok(Command::Json),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("Unknown command '{other}'; type 'help' for a list")),
    }
}

fn expect_args(args: &[String], count: usize, usage: &str) -> Result<(), String> {
    if args.len() == count {
        Ok(())
    } else {
        Err(format!("Usage: {usage}"))
    }
}

/// Convert a 1-based row number from user input into an index
fn parse_row(text: &str) -> Result<usize, String> {
    text.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| format!("Invalid row number '{text}'; rows start at 1"))
}

/// Split on whitespace, keeping double-quoted segments together
fn tokenize(line: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() || quoted {
                    tokens.push(std::mem::take(&mut current));
                }
                quoted = false;
            }
            c => current.push(c),
        }
    }

    if in_quotes {
        return Err("Unclosed quote".to_string());
    }
    if !current.is_empty() || quoted {
        tokens.push(current);
    }
    Ok(tokens)
}
