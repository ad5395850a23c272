//! Data models for `GpaCalc`

pub mod course;
pub mod student;

pub use course::Course;
pub use student::Student;
