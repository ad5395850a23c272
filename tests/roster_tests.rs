//! Integration tests for roster loading, lookup, and GPA write-back

use gpa_calc::core::models::{Course, Student};
use gpa_calc::core::roster::{CourseSource, GpaSink, Roster};
use gpa_calc::core::GpaPolicy;
use tempfile::TempDir;

fn sample_roster() -> Roster {
    let mut roster = Roster::new();

    let mut first = Student::new("IT21018794".to_string());
    first.add_course(
        Course::new(
            "IT4010".to_string(),
            "Research Project".to_string(),
            "A".to_string(),
            6,
        )
        .with_credits(8.0),
    );
    first.add_course(Course::new(
        "IT1010".to_string(),
        "Introduction to Programming".to_string(),
        "A".to_string(),
        1,
    ));
    roster.add_student(first);

    roster.add_student(Student::new("IT21020000".to_string()));
    roster
}

#[test]
fn save_then_load_roundtrip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("roster.toml");

    let roster = sample_roster();
    roster.save(&path).expect("Failed to save roster");

    let loaded = Roster::load(&path).expect("Failed to load roster");
    assert_eq!(loaded, roster);
}

#[test]
fn load_missing_file_reports_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("absent.toml");

    let err = Roster::load(&path).unwrap_err();
    assert!(err.contains("absent.toml"));
}

#[test]
fn load_rejects_malformed_toml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("roster.toml");
    std::fs::write(&path, "[[students]]\nnot a roster").expect("Failed to write file");

    assert!(Roster::load(&path).is_err());
}

#[test]
fn course_source_contract() {
    let roster = sample_roster();

    let courses = roster.courses_for("IT21018794").unwrap();
    assert_eq!(courses.len(), 2);

    let empty = roster.courses_for("IT21020000").unwrap();
    assert!(empty.is_empty());

    assert!(roster.courses_for("IT99999999").is_err());
}

#[test]
fn gpa_sink_write_back_persists() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("roster.toml");

    let mut roster = sample_roster();
    let policy = GpaPolicy::default();

    let result = {
        let student = roster.student_mut("IT21018794").unwrap();
        student.recalculate_gpa(&policy)
    };
    roster.record_gpa("IT21018794", result.gpa).unwrap();
    roster.save(&path).expect("Failed to save roster");

    let reloaded = Roster::load(&path).expect("Failed to load roster");
    let student = reloaded.student("IT21018794").unwrap();
    assert!((student.gpa - result.gpa).abs() < f64::EPSILON);
    // Other students untouched
    assert!(reloaded.student("IT21020000").unwrap().gpa.abs() < f64::EPSILON);
}

#[test]
fn parses_roster_with_serde_defaults() {
    // credits and is_compulsory omitted: 3.0 and true per the course schema
    let toml_str = r#"
[[students]]
registration_no = "IT21018794"

[[students.courses]]
course_code = "IT4010"
course_name = "Research Project"
grade = "A"
level = 5
"#;

    let roster = Roster::from_toml(toml_str).expect("Failed to parse roster");
    let student = roster.student("IT21018794").unwrap();

    assert!(student.gpa.abs() < f64::EPSILON);
    assert!((student.courses[0].credits - 3.0).abs() < f64::EPSILON);
    assert!(student.courses[0].is_compulsory);
}
