//! Session command handler
//!
//! Reads one command per line and applies it to an in-memory record. The
//! summary is reprinted after every change so the numbers always reflect the
//! current rows.

use super::calc::write_summary;
use super::load_record_logged;
use gpa_tracker::config::Config;
use gpa_tracker::core::models::AcademicRecord;
use gpa_tracker::core::session::{apply, parse_command, Command, HELP};
use gpa_tracker::{debug, error, info};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Run an interactive session on stdin/stdout.
pub fn run(load: Option<&Path>, config: &Config) {
    let prefix = &config.semesters.name_prefix;
    let record = match load {
        Some(path) => match load_record_logged(path, prefix) {
            Ok(record) => record,
            Err(e) => {
                error!("{e}");
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        None => AcademicRecord::with_prefix(prefix),
    };

    println!("GPA session. Type 'help' for commands, 'quit' to leave.");
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = drive(record, stdin.lock(), &mut stdout.lock(), true) {
        error!("Session I/O failed: {e}");
        eprintln!("✗ Session I/O failed: {e}");
        std::process::exit(1);
    }
}

/// Feed every line of `input` to the record until `quit` or end of input.
///
/// Returns the final record.
///
/// # Errors
/// Returns an error if reading input or writing output fails
pub fn drive(
    mut record: AcademicRecord,
    input: impl BufRead,
    out: &mut impl Write,
    prompt: bool,
) -> io::Result<AcademicRecord> {
    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Apply(action)) => {
                debug!("Session action: {action:?}");
                let outcome = apply(&mut record, action);
                if outcome.is_changed() {
                    info!("{outcome}");
                    writeln!(out, "✓ {outcome}")?;
                    write_summary(out, &record)?;
                } else {
                    writeln!(out, "✗ {outcome}")?;
                }
            }
            Ok(Command::Show) => write_summary(out, &record)?,
            Ok(Command::Json) => {
                let text = serde_json::to_string_pretty(&record.to_json())
                    .map_err(io::Error::other)?;
                writeln!(out, "{text}")?;
            }
            Ok(Command::Help) => writeln!(out, "{HELP}")?,
            Ok(Command::Quit) => break,
            Err(msg) => writeln!(out, "✗ {msg}")?,
        }
    }
    Ok(record)
}
