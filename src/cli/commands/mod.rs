//! CLI command handlers for `GpaCalc`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod calculate;
pub mod config;
pub mod report;
pub mod students;
