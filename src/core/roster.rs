//! Student roster: the course record source and GPA persistence sink
//!
//! The engine itself is pure; these are the collaborator contracts around
//! it. [`Roster`] is a TOML-file-backed implementation holding an ordered
//! student list, used by the CLI for lookup and GPA write-back.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::models::{Course, Student};

/// Supplies the ordered course list for a student
pub trait CourseSource {
    /// Look up the completed courses for `registration_no`
    ///
    /// # Errors
    /// Returns an error if the student is unknown
    fn courses_for(&self, registration_no: &str) -> Result<&[Course], String>;
}

/// Accepts a computed GPA scalar for write-back
pub trait GpaSink {
    /// Store `gpa` against `registration_no`
    ///
    /// # Errors
    /// Returns an error if the student is unknown
    fn record_gpa(&mut self, registration_no: &str, gpa: f64) -> Result<(), String>;
}

/// An ordered collection of students, loadable from and savable to a TOML file
///
/// The file format is a list of `[[students]]` tables, each with nested
/// `[[students.courses]]` tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// Students in file order
    #[serde(default)]
    students: Vec<Student>,
}

impl Roster {
    /// Create an empty roster
    #[must_use]
    pub const fn new() -> Self {
        Self {
            students: Vec::new(),
        }
    }

    /// Parse a roster from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Invalid roster file: {e}"))
    }

    /// Load a roster from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read roster {}: {e}", path.display()))?;
        Self::from_toml(&contents)
    }

    /// Save the roster back to a TOML file
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize roster: {e}"))?;
        fs::write(path, toml_str)
            .map_err(|e| format!("Failed to write roster {}: {e}", path.display()))
    }

    /// All students, in file order
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Find a student by registration number
    #[must_use]
    pub fn student(&self, registration_no: &str) -> Option<&Student> {
        self.students
            .iter()
            .find(|s| s.registration_no == registration_no)
    }

    /// Find a student by registration number, mutably
    pub fn student_mut(&mut self, registration_no: &str) -> Option<&mut Student> {
        self.students
            .iter_mut()
            .find(|s| s.registration_no == registration_no)
    }

    /// Append a student to the roster
    pub fn add_student(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Number of students on the roster
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the roster has no students
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl CourseSource for Roster {
    fn courses_for(&self, registration_no: &str) -> Result<&[Course], String> {
        self.student(registration_no)
            .map(|s| s.courses.as_slice())
            .ok_or_else(|| format!("Student not found: '{registration_no}'"))
    }
}

impl GpaSink for Roster {
    fn record_gpa(&mut self, registration_no: &str, gpa: f64) -> Result<(), String> {
        let student = self
            .student_mut(registration_no)
            .ok_or_else(|| format!("Student not found: '{registration_no}'"))?;
        student.gpa = gpa;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Course;

    fn sample_roster() -> Roster {
        let mut roster = Roster::new();
        let mut student = Student::new("IT21018794".to_string());
        student.add_course(Course::new(
            "IT1010".to_string(),
            "Introduction to Programming".to_string(),
            "A".to_string(),
            4,
        ));
        roster.add_student(student);
        roster
    }

    #[test]
    fn test_lookup_by_registration_no() {
        let roster = sample_roster();

        assert!(roster.student("IT21018794").is_some());
        assert!(roster.student("IT99999999").is_none());
    }

    #[test]
    fn test_courses_for_unknown_student_errors() {
        let roster = sample_roster();

        let err = roster.courses_for("IT99999999").unwrap_err();
        assert!(err.contains("IT99999999"));
    }

    #[test]
    fn test_record_gpa_updates_cached_value() {
        let mut roster = sample_roster();

        roster.record_gpa("IT21018794", 3.67).unwrap();
        let student = roster.student("IT21018794").unwrap();
        assert!((student.gpa - 3.67).abs() < f64::EPSILON);
    }

    #[test]
    fn test_toml_roundtrip() {
        let toml_str = r#"
[[students]]
registration_no = "IT21018794"
gpa = 3.2

[[students.courses]]
course_code = "IT1010"
course_name = "Introduction to Programming"
grade = "A"
level = 4
credits = 4.0
is_compulsory = true
"#;

        let roster = Roster::from_toml(toml_str).expect("Failed to parse roster");
        assert_eq!(roster.len(), 1);

        let student = roster.student("IT21018794").unwrap();
        assert!((student.gpa - 3.2).abs() < f64::EPSILON);
        assert_eq!(student.courses.len(), 1);
        assert_eq!(student.courses[0].course_code, "IT1010");
    }
}
