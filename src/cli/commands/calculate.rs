//! Calculate command handler
//!
//! Computes a student's GPA, prints a breakdown summary, writes the scalar
//! back to the roster file, and optionally emits a report.

use gpa_calc::config::Config;
use gpa_calc::core::compute_gpa;
use gpa_calc::core::engine::{CountStatus, GpaResult};
use gpa_calc::core::policy::GpaPolicy;
use gpa_calc::core::roster::{CourseSource, GpaSink, Roster};
use logger::{error, info, verbose};
use std::path::Path;

use super::report::write_report;

/// Per-run options for the calculate command
#[derive(Debug, Default)]
pub struct Options {
    /// Skip the GPA write-back
    pub no_save: bool,
    /// Also generate a report in this format (markdown, html)
    pub report: Option<String>,
    /// Override the configured credit cap
    pub credit_cap: Option<f64>,
    /// Override the configured minimum eligible level
    pub min_level: Option<u8>,
    /// Override the configured maximum eligible level
    pub max_level: Option<u8>,
}

/// Run the calculate command
pub fn run(roster_path: &Path, registration_no: &str, options: &Options, config: &Config) {
    if let Err(e) = calculate(roster_path, registration_no, options, config) {
        error!("GPA calculation failed for '{registration_no}': {e}");
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

/// Resolve the effective policy: config file values plus per-run CLI overrides
fn effective_policy(options: &Options, config: &Config) -> GpaPolicy {
    let mut policy = config.policy.to_policy();
    if let Some(cap) = options.credit_cap {
        policy.credit_cap = cap;
    }
    if let Some(min) = options.min_level {
        policy.min_eligible_level = min;
    }
    if let Some(max) = options.max_level {
        policy.max_eligible_level = max;
    }
    policy
}

/// Load, compute, persist, report
fn calculate(
    roster_path: &Path,
    registration_no: &str,
    options: &Options,
    config: &Config,
) -> Result<(), String> {
    let mut roster = Roster::load(roster_path)?;
    let policy = effective_policy(options, config);

    let result = compute_gpa(roster.courses_for(registration_no)?, &policy);

    info!(
        "Computed GPA {:.2} for '{registration_no}' ({} counted courses)",
        result.gpa,
        result.breakdown.selected_courses.len()
    );

    print_summary(registration_no, &result, &policy);

    if options.no_save {
        verbose!("Skipping roster write-back (--no-save)");
    } else {
        // The engine is pure; persisting the scalar is this caller's job.
        roster.record_gpa(registration_no, result.gpa)?;
        roster.save(roster_path)?;
        println!("✓ GPA saved to {}", roster_path.display());
    }

    if let Some(format_str) = &options.report {
        let student = roster
            .student(registration_no)
            .ok_or_else(|| format!("Student not found: '{registration_no}'"))?;
        let report_path = write_report(student, &policy, &result, None, format_str, config)?;
        println!("✓ Report generated: {}", report_path.display());
    }

    Ok(())
}

/// Print the breakdown summary to stdout
fn print_summary(registration_no: &str, result: &GpaResult, policy: &GpaPolicy) {
    let breakdown = &result.breakdown;

    println!("\n=== GPA for {registration_no} ===\n");
    println!(
        "GPA: {:.2} (cap {:.0} credits)",
        result.gpa, policy.credit_cap
    );
    println!(
        "Eligible courses: {} | Counted: {} | Credits used: {:.1}",
        breakdown.eligible_courses.len(),
        breakdown.selected_courses.len(),
        breakdown.total_credits_used
    );

    if breakdown.selected_courses.is_empty() {
        println!("\nNo courses counted toward the GPA");
        return;
    }

    println!();
    for entry in &breakdown.selected_courses {
        let status = match entry.status {
            CountStatus::Full => String::new(),
            CountStatus::Partial => format!(" [partial: {:.1} credits]", entry.credits_used),
        };
        println!(
            "  {:<10} {:<5} x {:>5.1} cr = {:>6.2} pts{status}",
            entry.course.course_code, entry.course.grade, entry.credits_used, entry.weighted_points
        );
    }

    println!(
        "\nWeighted points: {:.2}",
        breakdown.total_weighted_points
    );
    if breakdown.excess_points.abs() > f64::EPSILON {
        println!(
            "Over-cap excess points (counted in GPA): {:.2}",
            breakdown.excess_points
        );
    }
}
