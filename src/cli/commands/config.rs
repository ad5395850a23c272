//! Config command handler
//!
//! Reads and edits the persisted `config.toml` by key. Keys cover logging
//! (`level`, `file`, `verbose`), paths (`rosters_dir`, `reports_dir`), and
//! the GPA policy (`min_level`, `max_level`, `credit_cap`,
//! `excluded_grades`).

use crate::args::ConfigSubcommand;
use gpa_calc::config::{Config, KNOWN_KEYS};
use std::io::{self, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => show_all(config),
        Some(ConfigSubcommand::Get { key: Some(key) }) => show_key(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => set_key(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset_key(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

/// Print every section followed by the file the values come from
fn show_all(config: &Config) {
    println!("\n=== Configuration ===\n");
    print!("{config}");
    println!("\nConfig file: {}", Config::get_config_file_path().display());
}

/// Print one value, or the list of keys the tool understands
fn show_key(config: &Config, key: &str) {
    match config.get(key) {
        Some(value) => println!("{value}"),
        None => {
            eprintln!("Unknown config key: '{key}'");
            eprintln!("Valid keys: {}", KNOWN_KEYS.join(", "));
            std::process::exit(1);
        }
    }
}

fn set_key(config: &mut Config, key: &str, value: &str) {
    if let Err(e) = config.set(key, value) {
        fail(&e);
    }
    persist(config);
    println!("✓ Set {key} = {value}");
}

fn unset_key(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(e) = config.unset(key, defaults) {
        fail(&e);
    }
    persist(config);
    println!("✓ Reset {key} to default");
}

/// Delete the config file after an interactive confirmation naming it
fn reset() {
    let config_file = Config::get_config_file_path();
    if !config_file.exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!(
        "Reset {} to defaults? This deletes the file. (y/n): ",
        config_file.display()
    );
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    let answer = response.trim();

    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        if let Err(e) = Config::reset() {
            fail(&format!("Failed to remove config file: {e}"));
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}

fn persist(config: &Config) {
    if let Err(e) = config.save() {
        fail(&format!("Failed to save config: {e}"));
    }
}

fn fail(message: &str) -> ! {
    eprintln!("✗ {message}");
    std::process::exit(1);
}
