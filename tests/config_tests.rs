//! Integration tests for configuration management

use student_gen::config::{Config, ConfigOverrides};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(config.session.demo_students);
    assert_eq!(config.grading.seed, 0);
    assert!(config.grading_seed().is_none());
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[grading]
seed = 1234

[session]
demo_students = false
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.grading.seed, 1234);
    assert_eq!(config.grading_seed(), Some(1234));
    assert!(!config.session.demo_students);
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.grading.seed, 0);
    assert!(!config.session.demo_students);
}

#[test]
fn test_config_rejects_bad_types() {
    let toml_str = r#"
[logging]
level = "info"

[grading]
seed = "not a number"
"#;

    assert!(Config::from_toml(toml_str).is_err());
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$STUDENT_GEN/test.log"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("studentgen"));
    assert!(!config.logging.file.contains("$STUDENT_GEN"));
    assert!(config.logging.file.ends_with("test.log"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "DEBUG").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);

    config.set("seed", "99").expect("Failed to set seed");
    assert_eq!(config.grading_seed(), Some(99));

    config
        .set("demo-students", "false")
        .expect("Failed to set demo students");
    assert_eq!(config.get("demo_students").unwrap(), "false");

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
    assert!(config.set("level", "loud").is_err());
    assert!(config.set("seed", "-1").is_err());
    assert!(config.set("verbose", "maybe").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    config.set("seed", "5").expect("Failed to set seed");

    config
        .unset("level", &defaults)
        .expect("Failed to unset level");
    config.unset("seed", &defaults).expect("Failed to unset seed");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.grading.seed, defaults.grading.seed);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_serialized_round_trip_through_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("seed", "77").expect("Failed to set seed");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.grading.seed, 77);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
}

#[test]
fn test_config_overrides_leave_session_settings_unsaved() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::from_defaults();
    config.apply_overrides(&ConfigOverrides {
        verbose: Some(false),
        ..Default::default()
    });
    config.set("verbose", "false").expect("Failed to set verbose");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_path, toml_str).expect("Failed to write config");
    let saved = Config::from_toml(&fs::read_to_string(&config_path).unwrap()).unwrap();

    assert_eq!(saved.grading.seed, 0);
    assert!(saved.session.demo_students);
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.clone();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..Default::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, before.logging.file);
    assert_eq!(config.grading.seed, before.grading.seed);
}

#[test]
fn test_config_display_format() {
    let display_str = format!("{}", Config::from_defaults());

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[grading]"));
    assert!(display_str.contains("[session]"));
    assert!(display_str.contains("demo_students"));
}

#[test]
fn test_merge_defaults_fills_empty_level() {
    let toml_str = r#"
[logging]
level = ""
file = "/my/custom/path.log"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.logging.file, "/my/custom/path.log");
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    assert!(!config.merge_defaults(&defaults));
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
}

#[test]
fn test_get_studentgen_dir() {
    let dir = Config::get_studentgen_dir();

    assert!(dir.to_string_lossy().contains("studentgen"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
