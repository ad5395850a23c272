//! Configuration module for `GpaCalc`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::GpaPolicy;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

/// Configuration keys recognized by [`Config::get`], [`Config::set`], and
/// [`Config::unset`]
pub const KNOWN_KEYS: [&str; 9] = [
    "level",
    "file",
    "verbose",
    "rosters_dir",
    "reports_dir",
    "min_level",
    "max_level",
    "credit_cap",
    "excluded_grades",
];

/// Error message for an unrecognized configuration key
fn unknown_key(key: &str) -> String {
    format!(
        "Unknown config key: '{key}' (valid keys: {})",
        KNOWN_KEYS.join(", ")
    )
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for roster files
    #[serde(default)]
    pub rosters_dir: String,
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Academic-policy configuration
///
/// Zero / empty fields mean "unset" and fall back to the built-in policy
/// defaults when converted with [`PolicyConfig::to_policy`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Lowest GPA-eligible course level (inclusive)
    #[serde(default)]
    pub min_level: u8,
    /// Highest GPA-eligible course level (inclusive)
    #[serde(default)]
    pub max_level: u8,
    /// Maximum credits counted toward the GPA
    #[serde(default)]
    pub credit_cap: f64,
    /// Grade tokens excluded from the GPA
    #[serde(default)]
    pub excluded_grades: Vec<String>,
}

impl PolicyConfig {
    /// Build a [`GpaPolicy`] from this config, falling back to the built-in
    /// defaults for unset fields (the grade scale is always the standard one;
    /// substitute scales programmatically when needed)
    #[must_use]
    pub fn to_policy(&self) -> GpaPolicy {
        let defaults = GpaPolicy::default();
        GpaPolicy {
            min_eligible_level: if self.min_level == 0 {
                defaults.min_eligible_level
            } else {
                self.min_level
            },
            max_eligible_level: if self.max_level == 0 {
                defaults.max_eligible_level
            } else {
                self.max_level
            },
            credit_cap: if self.credit_cap > 0.0 {
                self.credit_cap
            } else {
                defaults.credit_cap
            },
            excluded_grades: if self.excluded_grades.is_empty() {
                defaults.excluded_grades
            } else {
                self.excluded_grades.clone()
            },
            grade_scale: defaults.grade_scale,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Academic-policy settings
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override roster directory
    pub rosters_dir: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$GPACALC` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/gpacalc`
    /// - macOS: `~/Library/Application Support/gpacalc`
    /// - Windows: `%APPDATA%\gpacalc`
    #[must_use]
    pub fn get_gpacalc_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gpacalc")
    }

    /// Get the user config file path
    ///
    /// return config.toml for release
    ///        dconfig.toml for debug
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        #[cfg(debug_assertions)]
        {
            Self::get_gpacalc_dir().join("dconfig.toml")
        }
        #[cfg(not(debug_assertions))]
        {
            Self::get_gpacalc_dir().join("config.toml")
        }
    }

    /// Expand `$GPACALC` variable in a string
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$GPACALC") {
            let gpacalc_dir = Self::get_gpacalc_dir();
            value.replace("$GPACALC", gpacalc_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Merge missing fields from defaults into this config
    /// Returns true if any fields were added
    #[allow(clippy::useless_let_if_seq)]
    fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        // Merge logging fields - only if they're empty (use defaults for empty values)
        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        // Merge paths fields
        if self.paths.rosters_dir.is_empty() && !defaults.paths.rosters_dir.is_empty() {
            self.paths
                .rosters_dir
                .clone_from(&defaults.paths.rosters_dir);
            changed = true;
        }
        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        // Merge policy fields - zero / empty means unset
        if self.policy.min_level == 0 && defaults.policy.min_level != 0 {
            self.policy.min_level = defaults.policy.min_level;
            changed = true;
        }
        if self.policy.max_level == 0 && defaults.policy.max_level != 0 {
            self.policy.max_level = defaults.policy.max_level;
            changed = true;
        }
        if self.policy.credit_cap <= 0.0 && defaults.policy.credit_cap > 0.0 {
            self.policy.credit_cap = defaults.policy.credit_cap;
            changed = true;
        }
        if self.policy.excluded_grades.is_empty() && !defaults.policy.excluded_grades.is_empty() {
            self.policy
                .excluded_grades
                .clone_from(&defaults.policy.excluded_grades);
            changed = true;
        }

        changed
    }

    /// Initialize config from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        // Expand variables in config values
        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.rosters_dir = Self::expand_variables(&config.paths.rosters_dir);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Initialize config from defaults (TOML string)
    ///
    /// # Panics
    /// Panics if the compiled-in defaults TOML cannot be parsed
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load config from user config file, creating it from defaults on first run
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    // Merge any missing fields from defaults
                    if config.merge_defaults(&defaults) {
                        // Save the updated config with new fields
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            // First run: create directory and config file from defaults
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }

            let _ = defaults.save();

            return defaults;
        }

        defaults
    }

    /// Apply CLI overrides to this config (runtime only; not persisted)
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file = Self::expand_variables(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(rosters_dir) = &overrides.rosters_dir {
            self.paths.rosters_dir = Self::expand_variables(rosters_dir);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir = Self::expand_variables(reports_dir);
        }
    }

    /// Save config to user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be saved
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "rosters_dir" => Some(self.paths.rosters_dir.clone()),
            "reports_dir" => Some(self.paths.reports_dir.clone()),
            "min_level" => Some(self.policy.min_level.to_string()),
            "max_level" => Some(self.policy.max_level.to_string()),
            "credit_cap" => Some(self.policy.credit_cap.to_string()),
            "excluded_grades" => Some(self.policy.excluded_grades.join(",")),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is invalid
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "rosters_dir" => self.paths.rosters_dir = value.to_string(),
            "reports_dir" => self.paths.reports_dir = value.to_string(),
            "min_level" => {
                self.policy.min_level = value
                    .parse::<u8>()
                    .map_err(|_| format!("Invalid level value for 'min_level': '{value}'"))?;
            }
            "max_level" => {
                self.policy.max_level = value
                    .parse::<u8>()
                    .map_err(|_| format!("Invalid level value for 'max_level': '{value}'"))?;
            }
            "credit_cap" => {
                self.policy.credit_cap = value
                    .parse::<f64>()
                    .map_err(|_| format!("Invalid numeric value for 'credit_cap': '{value}'"))?;
            }
            "excluded_grades" => {
                self.policy.excluded_grades = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is unknown
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "rosters_dir" => self
                .paths
                .rosters_dir
                .clone_from(&defaults.paths.rosters_dir),
            "reports_dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "min_level" => self.policy.min_level = defaults.policy.min_level,
            "max_level" => self.policy.max_level = defaults.policy.max_level,
            "credit_cap" => self.policy.credit_cap = defaults.policy.credit_cap,
            "excluded_grades" => self
                .policy
                .excluded_grades
                .clone_from(&defaults.policy.excluded_grades),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// # Errors
    /// Returns an error if the config file cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  rosters_dir = \"{}\"", self.paths.rosters_dir)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[policy]")?;
        writeln!(f, "  min_level = {}", self.policy.min_level)?;
        writeln!(f, "  max_level = {}", self.policy.max_level)?;
        writeln!(f, "  credit_cap = {}", self.policy.credit_cap)?;
        writeln!(
            f,
            "  excluded_grades = [{}]",
            self.policy
                .excluded_grades
                .iter()
                .map(|g| format!("\"{g}\""))
                .collect::<Vec<_>>()
                .join(", ")
        )?;

        Ok(())
    }
}
