//! The logger registry.

use std::fmt;
use std::io;
use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::LoggingConfig;
use crate::error::Result;
use crate::format::Formatter;
use crate::level::{EnvSource, LevelResolver, ProcessEnv, Severity, SYSTEM_LOG_LEVEL};
use crate::registry::{Logger, LoggerOptions};
use crate::sink::{Clock, ConsoleSink, Sink, SystemClock, TimedRotatingFileSink};

type ConsoleFactory = Box<dyn Fn() -> BoxMakeWriter + Send + Sync>;

/// Creates loggers once per name and hands out shared handles.
///
/// The unnamed logger `""` is the top of every hierarchy. It starts at
/// `WARNING` with no sinks.
pub struct LoggerRegistry {
    root: Logger,
    loggers: DashMap<String, Logger>,
    levels: LevelResolver,
    env: Box<dyn EnvSource>,
    clock: Arc<dyn Clock>,
    console: ConsoleFactory,
    /// Serializes first-time root initialization.
    init_lock: Mutex<()>,
}

impl LoggerRegistry {
    /// Registry on the process environment, wall clock and stdout.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn levels(&self) -> &LevelResolver {
        &self.levels
    }

    pub fn root(&self) -> Logger {
        self.root.clone()
    }

    /// Look up or create `name` without touching sinks or levels.
    pub fn logger(&self, name: &str) -> Logger {
        if name.is_empty() {
            return self.root.clone();
        }
        if let Some(existing) = self.loggers.get(name) {
            return existing.value().clone();
        }

        let parent = self.nearest_ancestor(name);
        let created = Logger::new(name, Some(&parent), self.clock.clone());
        let logger = self.loggers.entry(name.to_string()).or_insert(created).value().clone();
        self.adopt_descendants(&logger);

        tracing::trace!(logger = %name, parent = %parent.name(), "Created logger");
        logger
    }

    /// Whether `name` has been created.
    pub fn contains(&self, name: &str) -> bool {
        name.is_empty() || self.loggers.contains_key(name)
    }

    /// Return the configured logger `name`, initializing the root named in
    /// `options` with sinks on first use.
    ///
    /// Only opening the log file can fail. Unknown level specs degrade to a
    /// fallback level with a warning.
    pub fn get_logger(&self, name: &str, options: &LoggerOptions) -> Result<Logger> {
        let logger = self.logger(name);
        if !logger.has_sinks() {
            self.init_root(options)?;
        }
        let logger = self.logger(name);

        let spec = self
            .levels
            .resolve_spec(self.env.as_ref(), &options.level, options.level_env.as_deref());
        self.levels.set_log_level(&logger, &spec);

        Ok(logger)
    }

    /// Configure the root and every `[loggers]` entry of `config`.
    ///
    /// The root gets the config's `level` / `level_env`; each entry gets its
    /// own explicit level.
    pub fn apply_config(&self, config: &LoggingConfig) -> Result<Vec<Logger>> {
        let base = config.options();
        let mut configured = Vec::with_capacity(config.loggers.len() + 1);
        configured.push(self.get_logger(&config.root_name, &base)?);

        for (name, level) in &config.loggers {
            let mut options = base.clone().level(level.as_str());
            options.level_env = None;
            configured.push(self.get_logger(name, &options)?);
        }

        tracing::debug!(
            root = %config.root_name,
            loggers = config.loggers.len(),
            "Applied logging configuration"
        );
        Ok(configured)
    }

    fn init_root(&self, options: &LoggerOptions) -> Result<()> {
        let _guard = self.init_lock.lock().expect("registry init mutex poisoned");

        let root = self.logger(&options.root_name);
        if root.sink_count() > 0 {
            return Ok(());
        }

        // Build every sink first so a failing file leaves the root untouched.
        let formatter = Formatter::new(options.name_mode, options.colorize);
        let mut sinks: Vec<Arc<dyn Sink>> = Vec::with_capacity(2);
        sinks.push(Arc::new(ConsoleSink::with_writer(formatter.clone(), (self.console)())));
        if let Some(path) = options.file_path() {
            sinks.push(Arc::new(TimedRotatingFileSink::open(
                path,
                formatter,
                options.backup_count,
                self.clock.clone(),
            )?));
        }

        root.set_level(Severity::MIN);
        for sink in sinks {
            root.add_sink(sink);
        }

        tracing::debug!(
            root = %options.root_name,
            name_mode = %options.name_mode,
            log_path = ?options.file_path(),
            "Initialized root logger"
        );
        Ok(())
    }

    fn nearest_ancestor(&self, name: &str) -> Logger {
        let mut current = name;
        while let Some((parent, _)) = current.rsplit_once('.') {
            if let Some(found) = self.loggers.get(parent) {
                return found.value().clone();
            }
            current = parent;
        }
        self.root.clone()
    }

    /// Point existing descendants of `logger` at it when it is closer than
    /// their current parent.
    fn adopt_descendants(&self, logger: &Logger) {
        let prefix = format!("{}.", logger.name());
        for entry in self.loggers.iter() {
            let child = entry.value();
            if !child.name().starts_with(&prefix) {
                continue;
            }
            let closer = child
                .parent()
                .map_or(true, |current| current.name().len() < logger.name().len());
            if closer {
                child.set_parent(logger);
            }
        }
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("loggers", &self.loggers.len())
            .field("levels", &self.levels)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

/// Builder for [`LoggerRegistry`].
#[derive(Default)]
pub struct RegistryBuilder {
    env: Option<Box<dyn EnvSource>>,
    clock: Option<Arc<dyn Clock>>,
    console: Option<ConsoleFactory>,
}

impl RegistryBuilder {
    /// Environment used for `DEFAULT_LOG_LEVEL` and per-logger variables.
    pub fn env(mut self, env: impl EnvSource + 'static) -> Self {
        self.env = Some(Box::new(env));
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Where console sinks write instead of stdout.
    pub fn console_writer<W>(mut self, make_writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Clone + Send + Sync + 'static,
    {
        self.console = Some(Box::new(move || BoxMakeWriter::new(make_writer.clone())));
        self
    }

    pub fn build(self) -> LoggerRegistry {
        let env: Box<dyn EnvSource> = match self.env {
            Some(env) => env,
            None => Box::new(ProcessEnv),
        };
        let clock: Arc<dyn Clock> = match self.clock {
            Some(clock) => clock,
            None => Arc::new(SystemClock),
        };
        let console: ConsoleFactory = match self.console {
            Some(console) => console,
            None => Box::new(|| BoxMakeWriter::new(io::stdout)),
        };

        let root = Logger::new("", None, clock.clone());
        root.set_level(SYSTEM_LOG_LEVEL);

        LoggerRegistry {
            root,
            loggers: DashMap::new(),
            levels: LevelResolver::from_env(env.as_ref()),
            env,
            clock,
            console,
            init_lock: Mutex::new(()),
        }
    }
}
