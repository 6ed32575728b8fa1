//! `tracing` events routed into registry loggers.

use std::sync::Arc;

use logtemplate::layer::RegistryLayer;
use logtemplate::{LoggerOptions, NameMode};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

mod common;

#[test]
fn test_events_reach_sinks_by_target() {
    let (registry, capture) = common::registry_with(&[]);
    let registry = Arc::new(registry);
    registry
        .get_logger(
            "app",
            &LoggerOptions::default()
                .root_name("app")
                .level("debug")
                .name_mode(NameMode::Full)
                .colorize(false),
        )
        .unwrap();

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new("info"))
        .with(RegistryLayer::new(registry.clone()));

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(target: "app::net", user = "bob", attempts = 3, "login");
        tracing::debug!(target: "app::net", "dropped by the env filter");
        tracing::warn!(target: "other::crate", "no sinks on this branch");
    });

    let lines = capture.lines();
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].ends_with(" - app.net - INFO - login user=bob attempts=3"), "{}", lines[0]);
    assert!(registry.contains("app.net"));
}

#[test]
fn test_logger_level_filters_events() {
    let (registry, capture) = common::registry_with(&[]);
    let registry = Arc::new(registry);
    let options = LoggerOptions::default().root_name("svc").colorize(false);
    registry.get_logger("svc.db", &options.clone().level("error")).unwrap();

    let subscriber = tracing_subscriber::registry().with(RegistryLayer::new(registry.clone()));
    tracing::subscriber::with_default(subscriber, || {
        tracing::warn!(target: "svc::db", "slow query");
        tracing::error!(target: "svc::db", "connection lost");
    });

    let lines = capture.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(" - db - ERROR - connection lost"));
}
