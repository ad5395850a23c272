//! Shared library for `GpaCalc`
//! Contains the GPA engine, roster handling, reporting, and configuration
//! used by the CLI.

pub mod config;
pub mod core;

/// Returns the current version of the `GpaCalc` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
