//! Integration tests for session command parsing and application

use gpa_tracker::core::metrics::{cumulative_gpa, total_course_count};
use gpa_tracker::core::models::AcademicRecord;
use gpa_tracker::core::session::{apply, parse_command, Action, Command, Outcome};

/// Run each line as a session command, returning the outcomes of applied actions
fn run(record: &mut AcademicRecord, lines: &[&str]) -> Vec<Outcome> {
    lines
        .iter()
        .map(|line| match parse_command(line) {
            Ok(Command::Apply(action)) => apply(record, action),
            other => panic!("'{line}' is not an action: {other:?}"),
        })
        .collect()
}

#[test]
fn test_build_record_from_commands() {
    let mut record = AcademicRecord::new();
    let outcomes = run(
        &mut record,
        &[
            "add-semester",
            "edit 1 1 name \"Calculus I\"",
            "edit 1 1 credits 3",
            "edit 1 1 grade 4",
            "add-semester",
            "edit \"Semester 2\" 1 name Physics",
            "edit 2 1 credits 1",
            "edit 2 1 grade 2",
        ],
    );

    assert!(outcomes.iter().all(Outcome::is_changed));
    assert_eq!(record.semester("Semester 1").unwrap().courses[0].name, "Calculus I");
    assert_eq!(cumulative_gpa(&record), 3.5);
    assert_eq!(total_course_count(&record), 2);
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let mut record = AcademicRecord::new();
    run(&mut record, &["add-sem", "add-sem", "del-semester 2", "add-sem"]);

    let ids: Vec<&str> = record.semesters().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["Semester 1", "Semester 3"]);
}

#[test]
fn test_stale_targets_leave_record_unchanged() {
    let mut record = AcademicRecord::new();
    run(&mut record, &["add-sem"]);
    let before = record.clone();

    let outcomes = run(
        &mut record,
        &[
            "del-semester 7",
            "add-course Nowhere",
            "edit 1 5 name Ghost",
            "del-course 1 3",
        ],
    );

    assert!(outcomes.iter().all(|o| !o.is_changed()));
    assert_eq!(record, before);
}

#[test]
fn test_unparseable_edit_value_becomes_zero() {
    let mut record = AcademicRecord::new();
    run(
        &mut record,
        &["add-sem", "edit 1 1 credits 3", "edit 1 1 credits lots"],
    );
    assert_eq!(record.semester("Semester 1").unwrap().courses[0].credit_hours, 0.0);
}

#[test]
fn test_off_scale_edits_are_refused() {
    let mut record = AcademicRecord::new();
    run(&mut record, &["add-sem", "edit 1 1 name A", "edit 1 1 credits 3", "edit 1 1 grade 3"]);
    let before = record.clone();

    let outcomes = run(&mut record, &["edit 1 1 grade 7", "edit 1 1 credits -3"]);

    assert!(outcomes.iter().all(|o| !o.is_changed()));
    assert!(outcomes[0].to_string().contains("within 0 to 4"));
    assert!(outcomes[1].to_string().contains("within 0 to 10"));
    assert_eq!(record, before);
    assert_eq!(cumulative_gpa(&record), 3.0);
}

#[test]
fn test_reset_then_numbering_restarts() {
    let mut record = AcademicRecord::new();
    run(&mut record, &["add-sem", "add-sem", "reset"]);
    assert!(record.is_empty());

    assert_eq!(apply(&mut record, Action::Reset), Outcome::Unchanged("Nothing to reset".to_string()));
    run(&mut record, &["add-sem"]);
    assert!(record.contains("Semester 1"));
}

#[test]
fn test_non_action_commands() {
    assert_eq!(parse_command("show"), Ok(Command::Show));
    assert_eq!(parse_command("JSON"), Ok(Command::Json));
    assert_eq!(parse_command("?"), Ok(Command::Help));
    assert_eq!(parse_command("exit"), Ok(Command::Quit));
    assert!(parse_command("edit 1").is_err());
    assert!(parse_command("edit 1 1 name \"open").is_err());
}
