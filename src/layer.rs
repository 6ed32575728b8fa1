//! Routing `tracing` events into registry loggers.
//!
//! An event with target `app::net::http` is logged on the logger
//! `app.net.http`, so it is filtered by that logger's level and written to the
//! sinks up its hierarchy.

use std::fmt::{self, Write as _};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::level::Severity;
use crate::registry::LoggerRegistry;

/// Targets of this crate's own diagnostics; never routed back in.
const OWN_TARGET: &str = env!("CARGO_CRATE_NAME");

/// A [`Layer`] that forwards events to a [`LoggerRegistry`].
#[derive(Debug, Clone)]
pub struct RegistryLayer {
    registry: Arc<LoggerRegistry>,
}

impl RegistryLayer {
    pub fn new(registry: Arc<LoggerRegistry>) -> Self {
        Self { registry }
    }
}

/// Dotted logger name for a `tracing` target.
pub fn logger_name_for_target(target: &str) -> String {
    target.replace("::", ".")
}

fn is_own_target(target: &str) -> bool {
    target == OWN_TARGET
        || target
            .strip_prefix(OWN_TARGET)
            .is_some_and(|rest| rest.starts_with("::"))
}

impl<S: Subscriber> Layer<S> for RegistryLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if is_own_target(metadata.target()) {
            return;
        }

        let logger = self.registry.logger(&logger_name_for_target(metadata.target()));
        let severity = Severity::from(*metadata.level());
        if !logger.is_enabled_for(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        logger.log(severity, &visitor.finish());
    }
}

/// Collects the `message` field followed by `key=value` for the rest.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", name, value);
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field.name(), format_args!("{}", value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }
}
