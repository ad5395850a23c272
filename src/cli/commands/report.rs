//! Report command handler
//!
//! Generates GPA breakdown reports in Markdown or HTML.

use gpa_calc::config::Config;
use gpa_calc::core::compute_gpa;
use gpa_calc::core::engine::GpaResult;
use gpa_calc::core::models::Student;
use gpa_calc::core::policy::GpaPolicy;
use gpa_calc::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use gpa_calc::core::roster::Roster;
use logger::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command
pub fn run(
    roster_path: &Path,
    registration_no: &str,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) {
    if let Err(e) = generate(roster_path, registration_no, output_file, format_str, config) {
        error!("Report generation failed for '{registration_no}': {e}");
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

fn generate(
    roster_path: &Path,
    registration_no: &str,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<(), String> {
    let roster = Roster::load(roster_path)?;
    let student = roster
        .student(registration_no)
        .ok_or_else(|| format!("Student not found: '{registration_no}'"))?;

    let policy = config.policy.to_policy();
    let result = compute_gpa(&student.courses, &policy);

    let report_path = write_report(student, &policy, &result, output_file, format_str, config)?;
    println!("✓ Report generated: {}", report_path.display());
    Ok(())
}

/// Render a breakdown report and write it to disk.
///
/// With no explicit output path, the report lands in the configured reports
/// directory as `<registration_no>.<ext>`.
///
/// # Errors
/// Returns an error for an unknown format or a failed write
pub fn write_report(
    student: &Student,
    policy: &GpaPolicy,
    result: &GpaResult,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str)?;

    let output_path = match output_file {
        Some(path) => path.to_path_buf(),
        None => {
            let reports_dir = PathBuf::from(&config.paths.reports_dir);
            std::fs::create_dir_all(&reports_dir).map_err(|e| {
                format!(
                    "Failed to create reports directory {}: {e}",
                    reports_dir.display()
                )
            })?;
            reports_dir.join(format!(
                "{}.{}",
                student.registration_no,
                format.extension()
            ))
        }
    };

    let ctx = ReportContext::new(student, policy, result);
    let generator: Box<dyn ReportGenerator> = match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    };

    generator
        .generate(&ctx, &output_path)
        .map_err(|e| format!("Failed to write report {}: {e}", output_path.display()))?;

    info!("Report written to {}", output_path.display());
    Ok(output_path)
}
