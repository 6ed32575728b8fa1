//! `get_logger` behavior through the public API.

use std::sync::Arc;
use std::thread;

use logtemplate::format::ansi;
use logtemplate::sink::SinkKind;
use logtemplate::{LoggerOptions, NameMode, Severity};

mod common;

#[test]
fn test_sinks_attached_once_per_root() {
    let (registry, _capture) = common::registry_with(&[]);
    let dir = tempfile::tempdir().unwrap();
    let options = LoggerOptions::default()
        .root_name("app")
        .log_path(dir.path().join("app.log"));

    registry.get_logger("app.net", &options).unwrap();
    registry.get_logger("app.net", &options).unwrap();
    registry.get_logger("app.db", &options).unwrap();

    let root = registry.logger("app");
    let kinds: Vec<_> = root.sinks().iter().map(|s| s.kind()).collect();
    assert_eq!(kinds, vec![SinkKind::Console, SinkKind::RotatingFile]);
}

#[test]
fn test_concurrent_first_use_attaches_once() {
    let (registry, _capture) = common::registry_with(&[]);
    let registry = Arc::new(registry);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = registry.clone();
            thread::spawn(move || {
                let options = LoggerOptions::default().root_name("svc");
                registry.get_logger(&format!("svc.worker{i}"), &options).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.logger("svc").sink_count(), 1);
}

#[test]
fn test_empty_log_path_means_console_only() {
    let (registry, _capture) = common::registry_with(&[]);
    let options = LoggerOptions::default().root_name("app").log_path("");

    registry.get_logger("app", &options).unwrap();
    assert_eq!(registry.logger("app").sink_count(), 1);
}

#[test]
fn test_unopenable_log_file_is_an_error() {
    let (registry, _capture) = common::registry_with(&[]);
    let dir = tempfile::tempdir().unwrap();
    let options = LoggerOptions::default()
        .root_name("app")
        .log_path(dir.path().join("no_such_dir").join("app.log"));

    let err = registry.get_logger("app.net", &options).unwrap_err();
    assert!(matches!(err, logtemplate::Error::Io { .. }));
    assert_eq!(registry.logger("app").sink_count(), 0);
}

#[test]
fn test_lines_use_name_mode() {
    let (registry, capture) = common::registry_with(&[]);
    let options = LoggerOptions::default()
        .root_name("alpha")
        .name_mode(NameMode::Short)
        .colorize(false);

    let logger = registry.get_logger("alpha.beta.gamma", &options).unwrap();
    logger.info("ready");
    logger.debug("hidden at INFO");

    let lines = capture.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(" - a.b.gamma - INFO - ready"), "{}", lines[0]);
}

#[test]
fn test_critical_line_colors() {
    let (registry, capture) = common::registry_with(&[]);
    let logger = registry
        .get_logger("app.core", &LoggerOptions::default().root_name("app"))
        .unwrap();

    logger.critical("meltdown");

    let text = capture.text();
    assert!(text.starts_with(ansi::WHITE_ON_RED));
    assert!(text.ends_with(&format!("meltdown{}\n", ansi::RESET)));
    assert_eq!(text.matches(ansi::RESET).count(), 1);
    assert!(text.contains(" - core - CRITICAL - "));
}

#[test]
fn test_level_env_precedence() {
    let (registry, _capture) = common::registry_with(&[
        ("DEFAULT_LOG_LEVEL", "error"),
        ("NET_LOG_LEVEL", "debug"),
    ]);
    let base = LoggerOptions::default().root_name("app").level("warning");

    let net = registry
        .get_logger("app.net", &base.clone().level_env("NET_LOG_LEVEL"))
        .unwrap();
    let db = registry
        .get_logger("app.db", &base.clone().level_env("DB_LOG_LEVEL"))
        .unwrap();
    let web = registry.get_logger("app.web", &base).unwrap();

    assert_eq!(net.level(), Some(Severity::Debug));
    assert_eq!(db.level(), Some(Severity::Error));
    assert_eq!(web.level(), Some(Severity::Warning));
}

#[test]
fn test_logger_under_other_root_reaches_top_sinks() {
    let (registry, capture) = common::registry_with(&[]);
    let options = LoggerOptions::default().colorize(false);

    // Root name "" initializes the top logger itself.
    let logger = registry.get_logger("tool.scan", &options).unwrap();
    logger.info("scanning");

    assert_eq!(registry.root().sink_count(), 1);
    assert_eq!(capture.lines().len(), 1);
}
