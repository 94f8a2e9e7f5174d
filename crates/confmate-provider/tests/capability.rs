//! End-to-end exercise of the capability surface the way a
//! logging-configuration consumer would drive it.

use chrono::TimeDelta;
use confmate_provider::{ConfigError, Configuration, TreeConfig};
use confmate_tree::{Table, infinite_duration};
use pretty_assertions::assert_eq;

/// Settings a logger-setup routine would read.
struct LoggerSettings {
    level: String,
    buffered: bool,
    flush_interval: TimeDelta,
    max_file_size: i128,
    sinks: Vec<String>,
}

/// Generic consumer: reads through the trait, not the concrete type.
fn read_logger_settings<C: Configuration>(config: &C) -> LoggerSettings {
    LoggerSettings {
        level: config.get_string("logger.level", Some("info")),
        buffered: config.get_boolean("logger.buffered", None),
        flush_interval: config
            .get_time_duration_infinite_not_allowed("logger.flush_interval", None),
        max_file_size: config.get_byte_size("logger.max_file_size"),
        sinks: config.get_string_list("logger.sinks"),
    }
}

fn logger_tree() -> Table {
    let mut logger = Table::new();
    logger.insert("level", "debug");
    logger.insert("buffered", true);
    logger.insert("flush_interval", TimeDelta::seconds(2));
    logger.insert("max_file_size", 1_073_741_824i64);
    logger.insert("sinks", vec!["stdout".to_string(), "file".to_string()]);
    let mut root = Table::new();
    root.insert("logger", logger);
    root
}

#[test]
fn consumer_reads_through_the_trait() {
    let tree = logger_tree();
    let config = TreeConfig::new(Some(&tree)).expect("config");

    let settings = read_logger_settings(&config);
    assert_eq!(settings.level, "debug");
    assert_eq!(settings.buffered, true);
    assert_eq!(settings.flush_interval, TimeDelta::seconds(2));
    assert_eq!(settings.max_file_size, 1_073_741_824i128);
    assert_eq!(settings.sinks, vec!["stdout".to_string(), "file".to_string()]);
}

#[test]
fn consumer_defaults_apply_on_an_empty_tree() {
    let tree = Table::new();
    let config = TreeConfig::new(Some(&tree)).expect("config");

    let settings = read_logger_settings(&config);
    assert_eq!(settings.level, "info");
    assert_eq!(settings.buffered, false);
    assert_eq!(settings.flush_interval, TimeDelta::zero());
    assert_eq!(settings.max_file_size, 0);
    assert_eq!(settings.sinks, Vec::<String>::new());
    assert!(config.is_empty());
}

#[test]
fn parse_string_is_an_identity_confirmation() {
    let tree = logger_tree();
    let config = TreeConfig::new(Some(&tree)).expect("config");

    // Consumers that insist on an explicit parse step pass a dummy
    // payload; the instance comes back unchanged.
    let confirmed = config.parse_string("/* ignored */");
    assert_eq!(confirmed.get_string("logger.level", None), "debug");
}

#[test]
fn unsupported_operations_signal_caller_bugs() {
    let tree = logger_tree();
    let other = logger_tree();
    let config = TreeConfig::new(Some(&tree)).expect("config");
    let fallback = TreeConfig::new(Some(&other)).expect("fallback");

    assert_eq!(
        config.with_fallback(&fallback).unwrap_err(),
        ConfigError::Unsupported("with_fallback")
    );
    assert_eq!(
        config.load_config("logger.json").unwrap_err(),
        ConfigError::Unsupported("load_config")
    );
}

#[test]
fn display_renders_the_settings_snapshot() {
    let tree = logger_tree();
    let config = TreeConfig::new(Some(&tree)).expect("config");

    let rendered = config.to_string();
    assert!(rendered.contains("logger"));
    assert!(rendered.contains("level"));
}

#[test]
fn subtree_views_share_the_capability_surface() {
    let tree = logger_tree();
    let config = TreeConfig::new(Some(&tree)).expect("config");

    let logger = config.get_subtree("logger").expect("logger view");
    assert_eq!(logger.get_string("level", None), "debug");
    assert!(logger.has_path("sinks"));
    assert!(!logger.is_empty());

    let mut keys = logger.keys();
    keys.sort();
    assert_eq!(
        keys,
        vec!["buffered", "flush_interval", "level", "max_file_size", "sinks"]
    );
}

#[test]
#[should_panic(expected = "infinite time duration not allowed")]
fn consumer_aborts_on_an_infinite_flush_interval() {
    let mut logger = Table::new();
    logger.insert("flush_interval", infinite_duration());
    let mut root = Table::new();
    root.insert("logger", logger);
    let config = TreeConfig::new(Some(&root)).expect("config");

    read_logger_settings(&config);
}
