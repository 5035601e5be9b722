//! Configuration module for `StudentGen`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("assets/DefaultConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("assets/DefaultConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory in path values
const DIR_VARIABLE: &str = "$STUDENT_GEN";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path; empty logs to the terminal
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Grading configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradingConfig {
    /// Seed for generated grades; 0 seeds from system entropy
    #[serde(default)]
    pub seed: u64,
}

/// Interactive session configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Pre-register the demo students when a session starts
    #[serde(default)]
    pub demo_students: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Grading settings
    #[serde(default)]
    pub grading: GradingConfig,
    /// Session settings
    #[serde(default)]
    pub session: SessionConfig,
}

/// Optional CLI overrides for configuration values
///
/// Only settings that `config set` may persist belong here. Per-run session
/// flags are resolved by the caller and never touch a `Config`.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
}

impl Config {
    /// Get the `$STUDENT_GEN` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/studentgen`
    /// - macOS: `~/Library/Application Support/studentgen`
    /// - Windows: `%APPDATA%\studentgen`
    #[must_use]
    pub fn get_studentgen_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("studentgen")
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds.
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_studentgen_dir().join(CONFIG_FILE_NAME)
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are filled.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values; nothing is written to disk.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
    }

    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_studentgen_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// `$STUDENT_GEN` in the log file path is expanded to the config directory.
    /// Missing fields use their serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;
        config.logging.file = Self::expand_variables(&config.logging.file);
        Ok(config)
    }

    /// Load configuration from the compiled-in defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create it from defaults on first run
    ///
    /// Fields missing from an existing file are filled from defaults and the file
    /// is rewritten. Any read or parse failure falls back to defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            let _ = defaults.save();
            return defaults;
        }

        let Ok(content) = fs::read_to_string(&config_file) else {
            return defaults;
        };
        match Self::from_toml(&content) {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save();
                }
                config
            }
            Err(_) => defaults,
        }
    }

    /// Save configuration to the user config file, creating its directory
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or the file cannot be written
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
    ///
    /// Supported keys: `level`, `file`, `verbose`, `seed`, `demo_students`.
    ///
    /// # Returns
    /// `None` if the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "seed" => Some(self.grading.seed.to_string()),
            "demo_students" | "demo-students" => Some(self.session.demo_students.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be parsed
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                value
                    .parse::<crate::logger::Level>()
                    .map_err(|e| format!("Invalid value for 'level': {e}"))?;
                self.logging.level = value.to_ascii_lowercase();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "seed" => {
                self.grading.seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed value: '{value}'"))?;
            }
            "demo_students" | "demo-students" => {
                self.session.demo_students = value.parse::<bool>().map_err(|_| {
                    format!("Invalid boolean value for 'demo_students': '{value}'")
                })?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset a single configuration value to its default
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "seed" => self.grading.seed = defaults.grading.seed,
            "demo_students" | "demo-students" => {
                self.session.demo_students = defaults.session.demo_students;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Delete the config file so the next [`load()`](Config::load) recreates it
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Grading seed, `None` when grades should come from system entropy
    #[must_use]
    pub const fn grading_seed(&self) -> Option<u64> {
        match self.grading.seed {
            0 => None,
            seed => Some(seed),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[grading]")?;
        writeln!(f, "  seed = {}", self.grading.seed)?;

        writeln!(f, "\n[session]")?;
        writeln!(f, "  demo_students = {}", self.session.demo_students)?;

        Ok(())
    }
}
