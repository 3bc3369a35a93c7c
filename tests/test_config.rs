// Configuration tests
// Author: Gabriel Demetrios Lafis

use std::io::Write;

use log::LevelFilter;
use tempfile::NamedTempFile;

use record_pipeline::utils::{AppError, Config};

fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.log_level_filter(), LevelFilter::Warn);
    assert_eq!(config.source.path, None);
    assert!(config.run.styles.is_empty());
}

#[test]
fn test_yaml_config() {
    let file = temp_file(
        ".yaml",
        "logging:\n  level: debug\nsource:\n  path: users.csv\nrun:\n  styles: [1, 5]\n",
    );

    let config = Config::from_file(file.path()).unwrap();

    assert_eq!(config.log_level_filter(), LevelFilter::Debug);
    assert_eq!(config.source.path.as_deref(), Some("users.csv"));
    assert_eq!(config.source.format, None);
    assert_eq!(config.run.styles, vec![1, 5]);
}

#[test]
fn test_json_config_partial() {
    let file = temp_file(".json", r#"{ "logging": { "level": "TRACE" } }"#);

    let config = Config::from_file(file.path()).unwrap();

    assert_eq!(config.log_level_filter(), LevelFilter::Trace);
    assert_eq!(config.source, Config::default().source);
    assert_eq!(config.run, Config::default().run);
}

#[test]
fn test_unknown_level_falls_back_to_warn() {
    let mut config = Config::default();
    config.logging.level = "verbose".to_string();

    assert_eq!(config.log_level_filter(), LevelFilter::Warn);
}

#[test]
fn test_unsupported_config_format() {
    let file = temp_file(".toml", "[logging]\nlevel = \"info\"\n");

    match Config::from_file(file.path()) {
        Err(AppError::Config(msg)) => assert!(msg.contains("Unsupported")),
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn test_invalid_config_contents() {
    let file = temp_file(".json", "{ not json");

    assert!(matches!(Config::from_file(file.path()), Err(AppError::Config(_))));
}
