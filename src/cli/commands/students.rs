//! Students and show command handlers
//!
//! Roster listing (registration number + cached GPA) and single-student
//! transcript display.

use gpa_calc::core::models::Student;
use gpa_calc::core::roster::Roster;
use logger::error;
use std::path::Path;

/// Run the students command: list every student on the roster
pub fn run_list(roster_path: &Path) {
    let roster = match Roster::load(roster_path) {
        Ok(roster) => roster,
        Err(e) => {
            error!("Failed to load roster {}: {e}", roster_path.display());
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    if roster.is_empty() {
        println!("No students on roster {}", roster_path.display());
        return;
    }

    println!("{:<16} {:>6}  {}", "Registration No", "GPA", "Courses");
    for student in roster.students() {
        println!(
            "{:<16} {:>6.2}  {}",
            student.registration_no,
            student.gpa,
            student.courses.len()
        );
    }
}

/// Run the show command: print one student's course list
pub fn run_show(roster_path: &Path, registration_no: &str) {
    let roster = match Roster::load(roster_path) {
        Ok(roster) => roster,
        Err(e) => {
            error!("Failed to load roster {}: {e}", roster_path.display());
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    let Some(student) = roster.student(registration_no) else {
        eprintln!("✗ Student not found: '{registration_no}'");
        std::process::exit(1);
    };

    print_transcript(student);
}

/// Print a student's transcript as a fixed-width table
fn print_transcript(student: &Student) {
    println!(
        "Student {} (cached GPA {:.2}, {} courses)\n",
        student.registration_no,
        student.gpa,
        student.courses.len()
    );

    if student.courses.is_empty() {
        println!("No courses on record");
        return;
    }

    println!(
        "{:<10} {:<40} {:>5} {:>5} {:>7}  {}",
        "Code", "Name", "Grade", "Level", "Credits", "Compulsory"
    );
    for course in &student.courses {
        println!(
            "{:<10} {:<40} {:>5} {:>5} {:>7.1}  {}",
            course.course_code,
            course.course_name,
            course.grade,
            course.level,
            course.credits,
            if course.is_compulsory { "yes" } else { "no" }
        );
    }
}
