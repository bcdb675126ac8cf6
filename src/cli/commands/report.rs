//! Report command handler
//!
//! Writes a Markdown or JSON summary of a record file.

use super::load_record_logged;
use crate::args::ReportFormatArg;
use gpa_tracker::config::Config;
use gpa_tracker::core::report::{generator_for, ReportContext, ReportFormat};
use gpa_tracker::{error, info};
use std::path::{Path, PathBuf};

impl From<ReportFormatArg> for ReportFormat {
    fn from(arg: ReportFormatArg) -> Self {
        match arg {
            ReportFormatArg::Markdown => Self::Markdown,
            ReportFormatArg::Json => Self::Json,
        }
    }
}

/// Run the report command.
///
/// # Arguments
/// * `input_file` - Path to the record JSON file
/// * `output_file` - Optional output path
/// * `format` - Report format
/// * `title` - Optional heading; defaults to the input file stem
/// * `config` - Configuration containing the default reports directory
pub fn run(
    input_file: &Path,
    output_file: Option<&Path>,
    format: ReportFormatArg,
    title: Option<&str>,
    config: &Config,
) {
    match generate_report(input_file, output_file, format.into(), title, config) {
        Ok(path) => println!("✓ Report generated: {}", path.display()),
        Err(err) => {
            error!("Report generation failed for {}: {err}", input_file.display());
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn generate_report(
    input_file: &Path,
    output_file: Option<&Path>,
    format: ReportFormat,
    title: Option<&str>,
    config: &Config,
) -> Result<PathBuf, String> {
    let record = load_record_logged(input_file, &config.semesters.name_prefix)?;

    let stem = file_stem(input_file);
    let output_path = output_file.map_or_else(
        || default_output_path(&config.paths.reports_dir, &stem, format),
        Path::to_path_buf,
    );

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            format!("✗ Failed to create reports directory {}: {e}", parent.display())
        })?;
    }

    let source = input_file.display().to_string();
    let ctx = ReportContext::new(title.unwrap_or(&stem), &source, &record);
    generator_for(format)
        .generate(&ctx, &output_path)
        .map_err(|e| format!("✗ Failed to write {}: {e}", output_path.display()))?;

    info!("Wrote {format} report to {}", output_path.display());
    Ok(output_path)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("record")
        .to_string()
}

/// `<reports_dir>/<stem>_summary.<ext>`, falling back to the working directory
fn default_output_path(reports_dir: &str, stem: &str, format: ReportFormat) -> PathBuf {
    let dir = if reports_dir.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(reports_dir)
    };
    dir.join(format!("{stem}_summary.{}", format.extension()))
}
