//! Options for [`LoggerRegistry::get_logger`](crate::registry::LoggerRegistry::get_logger).

use std::path::PathBuf;

use crate::naming::NameMode;
use crate::sink::DEFAULT_BACKUP_COUNT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerOptions {
    /// Level spec used when no `level_env` is given.
    pub level: String,
    /// Environment variable to read the level spec from.
    pub level_env: Option<String>,
    /// Logger that owns the shared sinks.
    pub root_name: String,
    /// Rotating log file; no file sink when `None` or empty.
    pub log_path: Option<PathBuf>,
    pub name_mode: NameMode,
    pub colorize: bool,
    pub backup_count: usize,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            level_env: None,
            root_name: String::new(),
            log_path: None,
            name_mode: NameMode::Leaf,
            colorize: true,
            backup_count: DEFAULT_BACKUP_COUNT,
        }
    }
}

impl LoggerOptions {
    pub fn level(mut self, spec: impl Into<String>) -> Self {
        self.level = spec.into();
        self
    }

    pub fn level_env(mut self, key: impl Into<String>) -> Self {
        self.level_env = Some(key.into());
        self
    }

    pub fn root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    pub fn name_mode(mut self, mode: NameMode) -> Self {
        self.name_mode = mode;
        self
    }

    pub fn colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    pub fn backup_count(mut self, count: usize) -> Self {
        self.backup_count = count;
        self
    }

    /// `log_path` when it names a file.
    pub(crate) fn file_path(&self) -> Option<&PathBuf> {
        self.log_path.as_ref().filter(|p| !p.as_os_str().is_empty())
    }
}
