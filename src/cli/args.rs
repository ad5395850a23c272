//! CLI argument definitions for `GpaCalc`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gpa_calc::config::ConfigOverrides;
use logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `credit_cap`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// List the students on a roster with their cached GPAs.
    Students {
        /// Path to the roster TOML file
        #[arg(value_name = "ROSTER")]
        roster: PathBuf,
    },
    /// Show one student's course list.
    Show {
        /// Path to the roster TOML file
        #[arg(value_name = "ROSTER")]
        roster: PathBuf,

        /// Student registration number
        #[arg(value_name = "REG_NO")]
        registration_no: String,
    },
    /// Calculate a student's GPA and write it back to the roster.
    ///
    /// Prints a breakdown summary; persists the GPA unless --no-save is given.
    Calculate {
        /// Path to the roster TOML file
        #[arg(value_name = "ROSTER")]
        roster: PathBuf,

        /// Student registration number
        #[arg(value_name = "REG_NO")]
        registration_no: String,

        /// Do not write the computed GPA back to the roster file
        #[arg(long)]
        no_save: bool,

        /// Also generate a report in the specified format (markdown, html)
        #[arg(long, value_name = "FORMAT")]
        report: Option<String>,

        /// Override the configured credit cap for this run
        #[arg(long, value_name = "CREDITS")]
        credit_cap: Option<f64>,

        /// Override the configured minimum eligible level for this run
        #[arg(long, value_name = "LEVEL")]
        min_level: Option<u8>,

        /// Override the configured maximum eligible level for this run
        #[arg(long, value_name = "LEVEL")]
        max_level: Option<u8>,
    },
    /// Generate a GPA breakdown report for a student.
    Report {
        /// Path to the roster TOML file
        #[arg(value_name = "ROSTER")]
        roster: PathBuf,

        /// Student registration number
        #[arg(value_name = "REG_NO")]
        registration_no: String,

        /// Output file path (optional; defaults to the reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gpacalc",
    about = "GpaCalc command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config roster directory
    #[arg(long = "config-rosters-dir", value_name = "DIR")]
    pub config_rosters_dir: Option<PathBuf>,

    /// Override config roster directory (short form)
    #[arg(long = "rosters-dir", value_name = "DIR")]
    pub rosters_dir: Option<PathBuf>,

    /// Override config reports output directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports output directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--reports-dir`) take precedence over long-form
    /// flags (e.g., `--config-reports-dir`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None`
    /// means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            rosters_dir: self
                .rosters_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_rosters_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_reports_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_rosters_dir: None,
            rosters_dir: None,
            config_reports_dir: None,
            reports_dir: None,
            command: Command::Config { subcommand: None },
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli().to_config_overrides();

        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.rosters_dir.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli();
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.rosters_dir = Some(PathBuf::from("/rosters"));
        cli.reports_dir = Some(PathBuf::from("/reports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.rosters_dir, Some("/rosters".to_string()));
        assert_eq!(overrides.reports_dir, Some("/reports".to_string()));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let mut cli = bare_cli();
        cli.config_rosters_dir = Some(PathBuf::from("/long/rosters"));
        cli.rosters_dir = Some(PathBuf::from("/short/rosters"));
        cli.config_reports_dir = Some(PathBuf::from("/long/reports"));
        cli.reports_dir = Some(PathBuf::from("/short/reports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.rosters_dir, Some("/short/rosters".to_string()));
        assert_eq!(overrides.reports_dir, Some("/short/reports".to_string()));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let mut cli = bare_cli();
        cli.config_rosters_dir = Some(PathBuf::from("/long/rosters"));
        cli.config_reports_dir = Some(PathBuf::from("/long/reports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.rosters_dir, Some("/long/rosters".to_string()));
        assert_eq!(overrides.reports_dir, Some("/long/reports".to_string()));
    }
}
