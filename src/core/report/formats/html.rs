//! HTML report generator
//!
//! Generates self-contained HTML breakdown reports with embedded CSS.

use crate::core::engine::CountStatus;
use crate::core::report::{ReportContext, ReportGenerator};
use std::fmt::Write;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Escape the HTML-significant characters in user-supplied text
    fn escape(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let breakdown = &ctx.result.breakdown;
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace(
            "{{registration_no}}",
            &Self::escape(&ctx.student.registration_no),
        );
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

        let excess_row = if ctx.has_excess() {
            format!(
                "  <tr><td>Over-cap excess points (in GPA numerator)</td><td>{:.2}</td></tr>\n",
                breakdown.excess_points
            )
        } else {
            String::new()
        };
        output = output.replace("{{excess_row}}\n", &excess_row);

        output = output.replace("{{selected_rows}}\n", &Self::selected_rows(ctx));
        output = output.replace("{{eligible_rows}}\n", &Self::eligible_rows(ctx));

        output
    }

    /// Generate `<tr>` rows for the counted-courses table
    fn selected_rows(ctx: &ReportContext) -> String {
        let mut rows = String::new();

        for entry in &ctx.result.breakdown.selected_courses {
            let (status, row_class) = match entry.status {
                CountStatus::Full => ("full", ""),
                CountStatus::Partial => ("partial", " class=\"partial\""),
            };
            let _ = writeln!(
                rows,
                "  <tr{}><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td><td>{:.1}</td><td>{:.2}</td><td>{}</td></tr>",
                row_class,
                Self::escape(&entry.course.course_code),
                Self::escape(&entry.course.course_name),
                Self::escape(&entry.course.grade),
                entry.course.level,
                entry.credits_used,
                entry.grade_point,
                entry.weighted_points,
                status
            );
        }

        rows
    }

    /// Generate `<tr>` rows for the eligible-courses table
    fn eligible_rows(ctx: &ReportContext) -> String {
        let mut rows = String::new();

        for course in &ctx.result.breakdown.eligible_courses {
            let _ = writeln!(
                rows,
                "  <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td><td>{}</td></tr>",
                Self::escape(&course.course_code),
                Self::escape(&course.course_name),
                Self::escape(&course.grade),
                course.level,
                course.credits,
                if course.is_compulsory { "yes" } else { "no" }
            );
        }

        rows
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> String {
        self.render_template(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::compute_gpa;
    use crate::core::models::{Course, Student};
    use crate::core::policy::GpaPolicy;

    #[test]
    fn test_render_is_self_contained_html() {
        let policy = GpaPolicy::default();
        let mut student = Student::new("IT21018794".to_string());
        student.add_course(Course::new(
            "IT2030".to_string(),
            "Object Oriented Programming".to_string(),
            "B+".to_string(),
            4,
        ));
        let result = compute_gpa(&student.courses, &policy);
        let ctx = ReportContext::new(&student, &policy, &result);

        let rendered = HtmlReporter::new().render(&ctx);

        assert!(rendered.starts_with("<!DOCTYPE html>"));
        assert!(rendered.contains("IT21018794"));
        assert!(rendered.contains("IT2030"));
        assert!(rendered.contains("</html>"));
    }

    #[test]
    fn test_course_names_are_escaped() {
        let policy = GpaPolicy::default();
        let mut student = Student::new("IT21018794".to_string());
        student.add_course(Course::new(
            "IT2030".to_string(),
            "Data <Structures> & Algorithms".to_string(),
            "A".to_string(),
            4,
        ));
        let result = compute_gpa(&student.courses, &policy);
        let ctx = ReportContext::new(&student, &policy, &result);

        let rendered = HtmlReporter::new().render(&ctx);

        assert!(rendered.contains("Data &lt;Structures&gt; &amp; Algorithms"));
        assert!(!rendered.contains("Data <Structures>"));
    }
}
