//! Command-line interface entry point for `GpaCalc`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use gpa_calc::config::Config;
use logger::{enable_debug, enable_verbose, info, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // Determine effective runtime log level: CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| config.logging.level.parse::<Level>().ok())
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    // Verbose: enable if CLI flag OR config has verbose=true
    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // Initialize file logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    // Handle subcommands
    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Students { roster } => {
            commands::students::run_list(&roster);
        }
        Command::Show {
            roster,
            registration_no,
        } => {
            commands::students::run_show(&roster, &registration_no);
        }
        Command::Calculate {
            roster,
            registration_no,
            no_save,
            report,
            credit_cap,
            min_level,
            max_level,
        } => {
            let options = commands::calculate::Options {
                no_save,
                report,
                credit_cap,
                min_level,
                max_level,
            };
            commands::calculate::run(&roster, &registration_no, &options, &config);
        }
        Command::Report {
            roster,
            registration_no,
            output,
            format,
        } => {
            commands::report::run(
                &roster,
                &registration_no,
                output.as_deref(),
                &format,
                &config,
            );
        }
    }
}
