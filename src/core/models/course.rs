//! Course model

use serde::{Deserialize, Serialize};

/// Default credit weight for a course when the record omits it
const DEFAULT_CREDITS: f64 = 3.0;

/// Represents one completed enrollment record on a student's transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course code (e.g., "IT1010")
    pub course_code: String,

    /// Course display name (e.g., "Introduction to Programming")
    pub course_name: String,

    /// Letter grade token (e.g., "A-", "B+"); unrecognized tokens score 0.0
    pub grade: String,

    /// Course level (only a configured range, by default 4-7, counts toward the GPA)
    pub level: u8,

    /// Credit weight (can be fractional; defaults to 3.0 when unspecified)
    #[serde(default = "default_credits")]
    pub credits: f64,

    /// Whether the course is compulsory in the programme (used in priority ordering)
    #[serde(default = "default_compulsory")]
    pub is_compulsory: bool,
}

fn default_credits() -> f64 {
    DEFAULT_CREDITS
}

const fn default_compulsory() -> bool {
    true
}

impl Course {
    /// Create a new course record
    ///
    /// # Arguments
    /// * `course_code` - Short course identifier
    /// * `course_name` - Full display name
    /// * `grade` - Letter grade token
    /// * `level` - Course level
    #[must_use]
    pub const fn new(course_code: String, course_name: String, grade: String, level: u8) -> Self {
        Self {
            course_code,
            course_name,
            grade,
            level,
            credits: DEFAULT_CREDITS,
            is_compulsory: true,
        }
    }

    /// Set the credit weight, builder-style
    #[must_use]
    pub const fn with_credits(mut self, credits: f64) -> Self {
        self.credits = credits;
        self
    }

    /// Set the compulsory flag, builder-style
    #[must_use]
    pub const fn with_compulsory(mut self, is_compulsory: bool) -> Self {
        self.is_compulsory = is_compulsory;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation_defaults() {
        let course = Course::new(
            "IT1010".to_string(),
            "Introduction to Programming".to_string(),
            "A".to_string(),
            4,
        );

        assert_eq!(course.course_code, "IT1010");
        assert_eq!(course.course_name, "Introduction to Programming");
        assert_eq!(course.grade, "A");
        assert_eq!(course.level, 4);
        assert!((course.credits - 3.0).abs() < f64::EPSILON);
        assert!(course.is_compulsory);
    }

    #[test]
    fn test_builder_style_overrides() {
        let course = Course::new(
            "IT2110".to_string(),
            "Probability and Statistics".to_string(),
            "B+".to_string(),
            5,
        )
        .with_credits(4.5)
        .with_compulsory(false);

        assert!((course.credits - 4.5).abs() < f64::EPSILON);
        assert!(!course.is_compulsory);
    }

    #[test]
    fn test_serde_defaults_for_missing_fields() {
        let toml_str = r#"
course_code = "IT3030"
course_name = "Software Engineering"
grade = "A-"
level = 5
"#;
        let course: Course = toml::from_str(toml_str).expect("Failed to parse course");

        assert!((course.credits - 3.0).abs() < f64::EPSILON);
        assert!(course.is_compulsory);
    }
}
