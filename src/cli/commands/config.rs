//! Config command handler

use crate::args::ConfigSubcommand;
use std::io::{self, BufRead, Write};
use student_gen::config::Config;
use student_gen::{error, info};

/// Dispatch config subcommands
///
/// # Errors
/// Returns a printable message when a key is unknown, a value does not parse or
/// the config file cannot be written.
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => {
            config.set(&key, &value)?;
            persist(config)?;
            println!("✓ Set {key} = {value}");
            Ok(())
        }
        Some(ConfigSubcommand::Unset { key }) => {
            config.unset(&key, defaults)?;
            persist(config)?;
            println!("✓ Reset {key} to default");
            Ok(())
        }
        Some(ConfigSubcommand::Reset) => {
            let stdin = io::stdin();
            reset(&mut stdin.lock(), &mut io::stdout())
        }
    }
}

fn show(config: &Config, key: Option<&str>) -> Result<(), String> {
    match key {
        Some(k) => {
            let value = config
                .get(k)
                .ok_or_else(|| format!("Unknown config key: '{k}'"))?;
            println!("{value}");
        }
        None => {
            println!("\n=== Configuration ===\n");
            print!("{config}");
        }
    }
    Ok(())
}

fn persist(config: &Config) -> Result<(), String> {
    config.save().map_err(|e| {
        error!("Failed to save config: {e}");
        format!("Failed to save config: {e}")
    })?;
    info!("Config saved to {}", Config::get_config_file_path().display());
    Ok(())
}

fn reset<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        writeln!(out, "✓ Config is already at defaults").map_err(|e| e.to_string())?;
        return Ok(());
    }

    write!(out, "Are you sure you want to reset config to defaults? (y/n): ")
        .and_then(|()| out.flush())
        .map_err(|e| e.to_string())?;

    let mut response = String::new();
    input.read_line(&mut response).map_err(|e| e.to_string())?;

    if confirmed(&response) {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        writeln!(out, "✓ Config reset to defaults").map_err(|e| e.to_string())?;
    } else {
        writeln!(out, "✗ Reset cancelled").map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn confirmed(response: &str) -> bool {
    let answer = response.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
