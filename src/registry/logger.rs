//! Named logger handles.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use arc_swap::{ArcSwap, ArcSwapOption};

use crate::level::{Severity, SYSTEM_LOG_LEVEL};
use crate::registry::Record;
use crate::sink::{Clock, Sink};

const UNSET: u8 = 0;

struct Node {
    name: String,
    /// Own threshold, `UNSET` to inherit.
    level: AtomicU8,
    sinks: ArcSwap<Vec<Arc<dyn Sink>>>,
    /// Nearest existing ancestor.
    parent: ArcSwapOption<Node>,
    clock: Arc<dyn Clock>,
}

/// Cheaply cloneable handle to a named logger.
///
/// Records pass the logger's effective level and are then written to the
/// sinks of the logger and of every ancestor.
#[derive(Clone)]
pub struct Logger(Arc<Node>);

impl Logger {
    pub(crate) fn new(name: &str, parent: Option<&Logger>, clock: Arc<dyn Clock>) -> Self {
        Self(Arc::new(Node {
            name: name.to_string(),
            level: AtomicU8::new(UNSET),
            sinks: ArcSwap::from_pointee(Vec::new()),
            parent: ArcSwapOption::new(parent.map(|p| p.0.clone())),
            clock,
        }))
    }

    /// A logger outside any registry.
    #[cfg(test)]
    pub(crate) fn detached(name: &str) -> Self {
        Self::new(name, None, Arc::new(crate::sink::SystemClock))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn parent(&self) -> Option<Logger> {
        self.0.parent.load_full().map(Logger)
    }

    pub(crate) fn set_parent(&self, parent: &Logger) {
        self.0.parent.store(Some(parent.0.clone()));
    }

    /// Own level, if set.
    pub fn level(&self) -> Option<Severity> {
        Severity::from_u8(self.0.level.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, severity: Severity) {
        self.0.level.store(severity.as_u8(), Ordering::Relaxed);
    }

    /// First level set on the way up the hierarchy.
    pub fn effective_level(&self) -> Severity {
        let mut current = Some(self.clone());
        while let Some(logger) = current {
            if let Some(level) = logger.level() {
                return level;
            }
            current = logger.parent();
        }
        SYSTEM_LOG_LEVEL
    }

    pub fn is_enabled_for(&self, severity: Severity) -> bool {
        severity >= self.effective_level()
    }

    pub fn add_sink(&self, sink: Arc<dyn Sink>) {
        self.0.sinks.rcu(|current| {
            let mut next = Vec::clone(current);
            next.push(sink.clone());
            next
        });
    }

    /// Sinks attached directly to this logger.
    pub fn sinks(&self) -> Vec<Arc<dyn Sink>> {
        Vec::clone(&self.0.sinks.load())
    }

    pub fn sink_count(&self) -> usize {
        self.0.sinks.load().len()
    }

    /// Whether this logger or any ancestor has a sink.
    pub fn has_sinks(&self) -> bool {
        let mut current = Some(self.clone());
        while let Some(logger) = current {
            if logger.sink_count() > 0 {
                return true;
            }
            current = logger.parent();
        }
        false
    }

    pub fn log(&self, severity: Severity, message: &str) {
        if !self.is_enabled_for(severity) {
            return;
        }
        let record = Record {
            name: self.name(),
            severity,
            message,
            timestamp: self.0.clock.now(),
        };
        self.dispatch(&record);
    }

    fn dispatch(&self, record: &Record<'_>) {
        let mut current = Some(self.clone());
        while let Some(logger) = current {
            for sink in logger.0.sinks.load().iter() {
                if let Err(e) = sink.emit(record) {
                    tracing::warn!(
                        logger = %record.name,
                        sink = ?sink.kind(),
                        error = %e,
                        "Failed to write log record"
                    );
                }
            }
            current = logger.parent();
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(Severity::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    pub fn critical(&self, message: &str) {
        self.log(Severity::Critical, message);
    }

    /// Whether both handles refer to the same logger.
    pub fn ptr_eq(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.0.name)
            .field("level", &self.level())
            .field("sinks", &self.sink_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::SinkKind;
    use std::io;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct Collect(Mutex<Vec<String>>);

    impl Sink for Collect {
        fn emit(&self, record: &Record<'_>) -> io::Result<()> {
            self.0
                .lock()
                .unwrap()
                .push(format!("{}:{}:{}", record.name, record.severity, record.message));
            Ok(())
        }

        fn kind(&self) -> SinkKind {
            SinkKind::Console
        }
    }

    #[derive(Debug)]
    struct Broken;

    impl Sink for Broken {
        fn emit(&self, _record: &Record<'_>) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "disk gone"))
        }

        fn kind(&self) -> SinkKind {
            SinkKind::RotatingFile
        }
    }

    #[test]
    fn test_level_inherits_from_parent() {
        let parent = Logger::detached("app");
        let child = Logger::new("app.net", Some(&parent), Arc::new(crate::sink::SystemClock));

        assert_eq!(child.level(), None);
        assert_eq!(child.effective_level(), SYSTEM_LOG_LEVEL);

        parent.set_level(Severity::Debug);
        assert_eq!(child.effective_level(), Severity::Debug);

        child.set_level(Severity::Error);
        assert_eq!(child.effective_level(), Severity::Error);
        assert!(!child.is_enabled_for(Severity::Warning));
        assert!(child.is_enabled_for(Severity::Critical));
    }

    #[test]
    fn test_records_propagate_to_ancestor_sinks() {
        let parent = Logger::detached("app");
        let child = Logger::new("app.net", Some(&parent), Arc::new(crate::sink::SystemClock));
        let sink = Arc::new(Collect::default());
        parent.add_sink(sink.clone());
        parent.set_level(Severity::Debug);
        child.set_level(Severity::Info);

        child.debug("dropped");
        child.info("kept");
        parent.debug("parent debug");

        assert!(child.has_sinks());
        assert_eq!(child.sink_count(), 0);
        assert_eq!(
            *sink.0.lock().unwrap(),
            vec!["app.net:INFO:kept".to_string(), "app:DEBUG:parent debug".to_string()]
        );
    }

    #[test]
    fn test_failing_sink_does_not_stop_others() {
        let logger = Logger::detached("app");
        let sink = Arc::new(Collect::default());
        logger.add_sink(Arc::new(Broken));
        logger.add_sink(sink.clone());
        logger.set_level(Severity::Debug);

        logger.error("still delivered");
        assert_eq!(sink.0.lock().unwrap().len(), 1);
        assert_eq!(logger.sinks().len(), 2);
    }
}
