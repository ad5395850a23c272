//! Core module: the GPA engine and the domain types it operates on

pub mod engine;
pub mod grade_scale;
pub mod models;
pub mod policy;
pub mod report;
pub mod roster;

pub use engine::{compute_gpa, Breakdown, CountStatus, GpaResult, SelectedCourse};
pub use grade_scale::GradeScale;
pub use policy::GpaPolicy;
