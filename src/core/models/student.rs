//! Student model

use serde::{Deserialize, Serialize};

use crate::core::engine::{compute_gpa, GpaResult};
use crate::core::models::Course;
use crate::core::policy::GpaPolicy;

/// A student record: registration number, course list, and a cached GPA
///
/// The cached `gpa` is only updated by [`Student::recalculate_gpa`]; editing
/// the course list never touches it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique registration number (e.g., "IT21018794")
    pub registration_no: String,

    /// Cached GPA from the last recalculation (0.0 until first calculated)
    #[serde(default)]
    pub gpa: f64,

    /// Completed courses, in enrollment order
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Student {
    /// Create a new student with an empty course list
    #[must_use]
    pub const fn new(registration_no: String) -> Self {
        Self {
            registration_no,
            gpa: 0.0,
            courses: Vec::new(),
        }
    }

    /// Append a course to the transcript
    ///
    /// Does not recalculate the cached GPA.
    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Recompute the GPA under `policy`, update the cached value, and return
    /// the full result with breakdown
    pub fn recalculate_gpa(&mut self, policy: &GpaPolicy) -> GpaResult {
        let result = compute_gpa(&self.courses, policy);
        self.gpa = result.gpa;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_creation() {
        let student = Student::new("IT21018794".to_string());

        assert_eq!(student.registration_no, "IT21018794");
        assert!(student.courses.is_empty());
        assert!(student.gpa.abs() < f64::EPSILON);
    }

    #[test]
    fn test_add_course_does_not_touch_gpa() {
        let mut student = Student::new("IT21018794".to_string());
        student.gpa = 3.2;

        student.add_course(Course::new(
            "IT1010".to_string(),
            "Introduction to Programming".to_string(),
            "A".to_string(),
            4,
        ));

        assert_eq!(student.courses.len(), 1);
        assert!((student.gpa - 3.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_recalculate_updates_cached_gpa() {
        let mut student = Student::new("IT21018794".to_string());
        student.add_course(
            Course::new(
                "IT4010".to_string(),
                "Research Project".to_string(),
                "A".to_string(),
                6,
            )
            .with_credits(90.0),
        );

        let result = student.recalculate_gpa(&GpaPolicy::default());

        assert!((student.gpa - 4.0).abs() < f64::EPSILON);
        assert!((result.gpa - student.gpa).abs() < f64::EPSILON);
    }
}
