//! Academic policy: the tunable parameters of the GPA calculation

use serde::{Deserialize, Serialize};

use crate::core::grade_scale::GradeScale;
use crate::core::models::Course;

/// Policy parameters for [`crate::core::compute_gpa`]
///
/// Defaults match the institutional rules: levels 4-7 count, `-` and `RX`
/// grades are excluded, and at most 90 credits count toward the GPA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GpaPolicy {
    /// Lowest course level eligible for the GPA (inclusive)
    pub min_eligible_level: u8,
    /// Highest course level eligible for the GPA (inclusive)
    pub max_eligible_level: u8,
    /// Grade tokens that disqualify a course regardless of level
    pub excluded_grades: Vec<String>,
    /// Maximum number of credits counted toward the GPA
    pub credit_cap: f64,
    /// Grade token to grade-point mapping
    pub grade_scale: GradeScale,
}

impl Default for GpaPolicy {
    fn default() -> Self {
        Self {
            min_eligible_level: 4,
            max_eligible_level: 7,
            excluded_grades: vec!["-".to_string(), "RX".to_string()],
            credit_cap: 90.0,
            grade_scale: GradeScale::standard(),
        }
    }
}

impl GpaPolicy {
    /// Whether `course` counts toward the GPA under this policy
    #[must_use]
    pub fn is_eligible(&self, course: &Course) -> bool {
        course.level >= self.min_eligible_level
            && course.level <= self.max_eligible_level
            && !self.excluded_grades.iter().any(|g| g == &course.grade)
    }
}
