//! Command-line interface entry point for `StudentGen`

mod args;
mod commands;
mod validate;

use args::{Cli, Command};
use clap::Parser;
use student_gen::config::Config;
use student_gen::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use student_gen::{error, info};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

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

    // Session-only flags resolve here and never reach the persisted config
    let seed = args.session_seed(&config);
    let demo_students = args.session_demo_students(&config);

    match args.command {
        Command::Config { subcommand } => {
            if let Err(e) = commands::config::run(subcommand, &mut config, &defaults) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Command::Session => {
            let mut registrar = commands::session::build_registrar(seed, demo_students);
            info!("Session started (seed={seed:?}, demo_students={demo_students})");
            if let Err(e) = commands::session::run(&mut registrar) {
                error!("Session ended with I/O error: {e}");
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
        }
    }
}
