//! Markdown report generator
//!
//! Generates GPA breakdown reports in Markdown format. These render well in
//! GitHub, GitLab, and VS Code.

use crate::core::engine::CountStatus;
use crate::core::report::{ReportContext, ReportGenerator};
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let breakdown = &ctx.result.breakdown;
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{registration_no}}", &ctx.student.registration_no);
        output = output.replace("{{gpa}}", &format!("{:.2}", ctx.result.gpa));
        output = output.replace("{{credit_cap}}", &format!("{:.0}", ctx.policy.credit_cap));
        output = output.replace("{{min_level}}", &ctx.policy.min_eligible_level.to_string());
        output = output.replace("{{max_level}}", &ctx.policy.max_eligible_level.to_string());
        output = output.replace("{{total_courses}}", &ctx.total_courses().to_string());
        output = output.replace("{{eligible_count}}", &ctx.eligible_count().to_string());
        output = output.replace("{{selected_count}}", &ctx.selected_count().to_string());
        output = output.replace(
            "{{total_credits_used}}",
            &format!("{:.1}", breakdown.total_credits_used),
        );
        output = output.replace(
            "{{total_weighted_points}}",
            &format!("{:.2}", breakdown.total_weighted_points),
        );

        // The over-cap excess is attached to no course row, so it gets its
        // own summary line whenever a partial split occurred.
        let excess_row = if ctx.has_excess() {
            format!(
                "| Over-cap excess points (in GPA numerator) | {:.2} |\n",
                breakdown.excess_points
            )
        } else {
            String::new()
        };
        output = output.replace("{{excess_row}}\n", &excess_row);

        output = output.replace("{{selected_table}}", &Self::selected_table(ctx));
        output = output.replace("{{eligible_table}}", &Self::eligible_table(ctx));

        output
    }

    /// Generate the counted-courses table
    fn selected_table(ctx: &ReportContext) -> String {
        let selected = &ctx.result.breakdown.selected_courses;
        if selected.is_empty() {
            return "_No courses counted._".to_string();
        }

        let mut table = String::new();
        table.push_str(
            "| Code | Name | Grade | Level | Credits used | Grade point | Weighted points | Status |\n",
        );
        table.push_str("|---|---|---|---|---|---|---|---|\n");

        for entry in selected {
            let status = match entry.status {
                CountStatus::Full => "full",
                CountStatus::Partial => "partial",
            };
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} | {:.1} | {:.1} | {:.2} | {} |",
                entry.course.course_code,
                entry.course.course_name,
                entry.course.grade,
                entry.course.level,
                entry.credits_used,
                entry.grade_point,
                entry.weighted_points,
                status
            );
        }

        table
    }

    /// Generate the eligible-courses table
    fn eligible_table(ctx: &ReportContext) -> String {
        let eligible = &ctx.result.breakdown.eligible_courses;
        if eligible.is_empty() {
            return "_No eligible courses._".to_string();
        }

        let mut table = String::new();
        table.push_str("| Code | Name | Grade | Level | Credits | Compulsory |\n");
        table.push_str("|---|---|---|---|---|---|\n");

        for course in eligible {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} | {:.1} | {} |",
                course.course_code,
                course.course_name,
                course.grade,
                course.level,
                course.credits,
                if course.is_compulsory { "yes" } else { "no" }
            );
        }

        table
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> String {
        self.render_template(ctx)
    }
}
