//! Breakdown report generation
//!
//! Renders a computed GPA result into a human-readable report (Markdown or
//! HTML) showing which courses counted, at what credit weight, and why.

pub mod formats;

use std::error::Error;
use std::path::Path;

use crate::core::engine::GpaResult;
use crate::core::models::Student;
use crate::core::policy::GpaPolicy;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Aggregates everything a template needs to render one student's GPA
/// breakdown.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// The student the report is about
    pub student: &'a Student,
    /// The policy the GPA was computed under
    pub policy: &'a GpaPolicy,
    /// The computed GPA and breakdown
    pub result: &'a GpaResult,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(student: &'a Student, policy: &'a GpaPolicy, result: &'a GpaResult) -> Self {
        Self {
            student,
            policy,
            result,
        }
    }

    /// Total courses on the transcript, eligible or not
    #[must_use]
    pub const fn total_courses(&self) -> usize {
        self.student.courses.len()
    }

    /// Number of courses that passed the eligibility filter
    #[must_use]
    pub const fn eligible_count(&self) -> usize {
        self.result.breakdown.eligible_courses.len()
    }

    /// Number of courses that actually counted toward the GPA
    #[must_use]
    pub const fn selected_count(&self) -> usize {
        self.result.breakdown.selected_courses.len()
    }

    /// Whether a partial split left over-cap points outside the course table
    #[must_use]
    pub fn has_excess(&self) -> bool {
        self.result.breakdown.excess_points.abs() > f64::EPSILON
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    fn render(&self, ctx: &ReportContext) -> String;

    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        std::fs::write(output_path, self.render(ctx))?;
        Ok(())
    }
}
