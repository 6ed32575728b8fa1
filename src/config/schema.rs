//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::naming::NameMode;
use crate::registry::LoggerOptions;
use crate::sink::DEFAULT_BACKUP_COUNT;

/// Root logging configuration.
///
/// ```toml
/// root_name = "app"
/// log_path = "/var/log/app/app.log"
/// name_mode = "short"
///
/// [loggers]
/// "app.net" = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Logger that owns the console and file sinks.
    pub root_name: String,

    /// Rotating log file. Console only when absent or empty.
    pub log_path: Option<PathBuf>,

    /// Display-name rendering (leaf, full, short).
    pub name_mode: NameMode,

    /// Wrap lines in ANSI colors.
    pub colorize: bool,

    /// Rotated files to keep.
    pub backup_count: usize,

    /// Level spec for the root logger.
    pub level: String,

    /// Environment variable overriding `level` for the root logger.
    pub level_env: Option<String>,

    /// Explicit levels per logger name.
    pub loggers: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            root_name: String::new(),
            log_path: None,
            name_mode: NameMode::Leaf,
            colorize: true,
            backup_count: DEFAULT_BACKUP_COUNT,
            level: "INFO".to_string(),
            level_env: None,
            loggers: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Options shared by every logger this config creates.
    pub fn options(&self) -> LoggerOptions {
        LoggerOptions {
            level: self.level.clone(),
            level_env: self.level_env.clone(),
            root_name: self.root_name.clone(),
            log_path: self.log_path.clone(),
            name_mode: self.name_mode,
            colorize: self.colorize,
            backup_count: self.backup_count,
        }
    }
}
