//! Integration tests for configuration management

use qrate::config::{Config, ConfigOverrides};

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.api.endpoint.is_empty(),
        "Default endpoint should not be empty"
    );
    assert!(
        !config.paths.session_file.is_empty(),
        "Default session_file should not be empty"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[api]
endpoint = "https://reviews.example.com"

[paths]
session_file = "/tmp/session.toml"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse config");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.api.endpoint, "https://reviews.example.com");
    assert_eq!(config.paths.session_file, "/tmp/session.toml");
}

#[test]
fn test_config_from_toml_missing_sections() {
    let toml_str = r#"
[logging]
level = "warn"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial config");
    assert_eq!(config.logging.level, "warn");
    assert!(config.api.endpoint.is_empty());
    assert!(config.paths.session_file.is_empty());
}

#[test]
fn test_config_expands_qrate_variable() {
    let toml_str = r#"
[logging]
level = "warn"
file = "$QRATE/logs/qrate.log"

[paths]
session_file = "$QRATE/session.toml"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse config");
    assert!(
        !config.logging.file.contains("$QRATE"),
        "Log file path should be expanded"
    );
    assert!(
        !config.paths.session_file.contains("$QRATE"),
        "Session file path should be expanded"
    );
    assert!(config.paths.session_file.ends_with("session.toml"));
}

#[test]
fn test_merge_defaults_fills_only_empty_fields() {
    let mut config = Config::from_toml(
        r#"
[logging]
level = "debug"
"#,
    )
    .expect("Failed to parse config");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(changed, "Merging into a sparse config should report changes");
    // User setting preserved, missing fields filled
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.api.endpoint, defaults.api.endpoint);
    assert_eq!(config.paths.session_file, defaults.paths.session_file);
}

#[test]
fn test_apply_overrides() {
    let mut config = Config::from_defaults();
    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        verbose: Some(true),
        endpoint: Some("http://localhost:9999".to_string()),
        ..ConfigOverrides::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.verbose);
    assert_eq!(config.api.endpoint, "http://localhost:9999");
}

#[test]
fn test_get_set_unset_round_trip() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config
        .set("endpoint", "https://staging.example.com")
        .expect("set endpoint");
    assert_eq!(
        config.get("endpoint"),
        Some("https://staging.example.com".to_string())
    );

    config.unset("endpoint", &defaults).expect("unset endpoint");
    assert_eq!(config.get("endpoint"), Some(defaults.api.endpoint.clone()));
}

#[test]
fn test_set_rejects_unknown_key_and_bad_boolean() {
    let mut config = Config::from_defaults();

    assert!(config.set("no_such_key", "x").is_err());
    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("verbose", "true").is_ok());
}

#[test]
fn test_session_file_path_falls_back_to_config_dir() {
    let mut config = Config::from_defaults();
    config.paths.session_file = String::new();

    let path = config.session_file_path();
    assert!(path.ends_with("session.toml"));
}
