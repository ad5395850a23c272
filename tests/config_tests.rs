//! Integration tests for configuration management

use gpa_calc::config::{Config, ConfigOverrides, KNOWN_KEYS};

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.rosters_dir.is_empty(),
        "Default rosters_dir should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert_eq!(config.policy.min_level, 4);
    assert_eq!(config.policy.max_level, 7);
    assert!((config.policy.credit_cap - 90.0).abs() < f64::EPSILON);
    assert_eq!(config.policy.excluded_grades, vec!["-", "RX"]);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
rosters_dir = "./rosters"
reports_dir = "./reports"

[policy]
min_level = 3
max_level = 6
credit_cap = 60.0
excluded_grades = ["W"]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.rosters_dir, "./rosters");
    assert_eq!(config.paths.reports_dir, "./reports");
    assert_eq!(config.policy.min_level, 3);
    assert_eq!(config.policy.max_level, 6);
    assert!((config.policy.credit_cap - 60.0).abs() < f64::EPSILON);
    assert_eq!(config.policy.excluded_grades, vec!["W"]);
}

#[test]
fn test_policy_section_is_optional() {
    let toml_str = r#"
[logging]
level = "warn"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");
    // Unset policy fields fall back to built-in defaults on conversion
    let policy = config.policy.to_policy();

    assert_eq!(policy.min_eligible_level, 4);
    assert_eq!(policy.max_eligible_level, 7);
    assert!((policy.credit_cap - 90.0).abs() < f64::EPSILON);
    assert_eq!(policy.excluded_grades, vec!["-", "RX"]);
}

#[test]
fn test_to_policy_uses_configured_values() {
    let toml_str = r#"
[logging]
level = "warn"

[policy]
min_level = 2
max_level = 5
credit_cap = 45.0
excluded_grades = ["-", "RX", "W"]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");
    let policy = config.policy.to_policy();

    assert_eq!(policy.min_eligible_level, 2);
    assert_eq!(policy.max_eligible_level, 5);
    assert!((policy.credit_cap - 45.0).abs() < f64::EPSILON);
    assert_eq!(policy.excluded_grades, vec!["-", "RX", "W"]);
}

#[test]
fn test_apply_overrides() {
    let mut config = Config::from_defaults();
    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        file: Some("/tmp/gpacalc.log".to_string()),
        verbose: Some(true),
        rosters_dir: Some("/data/rosters".to_string()),
        reports_dir: Some("/data/reports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, "/tmp/gpacalc.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.rosters_dir, "/data/rosters");
    assert_eq!(config.paths.reports_dir, "/data/reports");
}

#[test]
fn test_get_and_set_roundtrip() {
    let mut config = Config::from_defaults();

    config.set("level", "info").unwrap();
    assert_eq!(config.get("level"), Some("info".to_string()));

    config.set("credit_cap", "120").unwrap();
    assert_eq!(config.get("credit_cap"), Some("120".to_string()));

    config.set("excluded_grades", "-, RX, W").unwrap();
    assert_eq!(config.get("excluded_grades"), Some("-,RX,W".to_string()));

    assert!(config.get("nonsense").is_none());
}

#[test]
fn test_set_rejects_invalid_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("min_level", "four").is_err());
    assert!(config.set("credit_cap", "lots").is_err());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_unset_restores_defaults() {
    let defaults = Config::from_defaults();
    let mut config = Config::from_defaults();

    config.set("max_level", "9").unwrap();
    config.unset("max_level", &defaults).unwrap();
    assert_eq!(config.policy.max_level, defaults.policy.max_level);

    assert!(config.unset("unknown_key", &defaults).is_err());
}

#[test]
fn test_unknown_key_error_names_the_valid_keys() {
    let defaults = Config::from_defaults();
    let mut config = Config::from_defaults();

    let set_err = config.set("cap", "90").unwrap_err();
    assert!(set_err.contains("'cap'"));
    assert!(set_err.contains("valid keys"));
    assert!(set_err.contains("credit_cap"));
    assert!(set_err.contains("excluded_grades"));

    let unset_err = config.unset("grade_scale", &defaults).unwrap_err();
    assert!(unset_err.contains("'grade_scale'"));
    assert!(unset_err.contains("valid keys"));

    // Every advertised key is actually readable
    for key in KNOWN_KEYS {
        assert!(config.get(key).is_some(), "key '{key}' should resolve");
    }
}

#[test]
fn test_display_includes_all_sections() {
    let config = Config::from_defaults();
    let shown = config.to_string();

    assert!(shown.contains("[logging]"));
    assert!(shown.contains("[paths]"));
    assert!(shown.contains("[policy]"));
    assert!(shown.contains("credit_cap"));
}
