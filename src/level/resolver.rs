//! Level resolution with a deterministic fallback chain.
//!
//! ```text
//! requested spec ──unknown──▶ default spec (DEFAULT_LOG_LEVEL) ──unknown──▶ SYSTEM_LOG_LEVEL
//! ```
//!
//! Every unknown step emits one warning through the logger being configured,
//! after its level has been changed. Nothing here returns an error.

use std::collections::HashMap;
use std::fmt;

use crate::level::Severity;
use crate::registry::Logger;

/// Hardcoded last-resort severity.
pub const SYSTEM_LOG_LEVEL: Severity = Severity::Warning;

/// Environment variable holding the process-wide default level name.
pub const DEFAULT_LOG_LEVEL_ENV: &str = "DEFAULT_LOG_LEVEL";

/// Default level name when [`DEFAULT_LOG_LEVEL_ENV`] is unset.
pub const DEFAULT_LOG_LEVEL_FALLBACK: &str = "INFO";

/// Source of environment variables.
pub trait EnvSource: Send + Sync + fmt::Debug {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Maps level specifications to severities and applies them to loggers.
#[derive(Debug, Clone)]
pub struct LevelResolver {
    /// Uppercased default spec, captured once.
    default_spec: String,
}

impl LevelResolver {
    /// Capture the default level spec from `env`.
    pub fn from_env(env: &dyn EnvSource) -> Self {
        let spec = env
            .var(DEFAULT_LOG_LEVEL_ENV)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL_FALLBACK.to_string());
        Self::with_default_spec(&spec)
    }

    pub fn with_default_spec(spec: &str) -> Self {
        Self {
            default_spec: spec.to_uppercase(),
        }
    }

    /// The captured default spec, uppercased. May name no known severity.
    pub fn default_spec(&self) -> &str {
        &self.default_spec
    }

    /// Pick the spec for a logger: the named environment variable when one is
    /// given (or the default spec if it is unset), the explicit spec otherwise.
    pub fn resolve_spec(&self, env: &dyn EnvSource, level: &str, level_env: Option<&str>) -> String {
        match level_env {
            Some(key) => env.var(key).unwrap_or_else(|| self.default_spec.clone()),
            None => level.to_string(),
        }
    }

    pub fn set_system_log_level(&self, logger: &Logger) {
        logger.set_level(SYSTEM_LOG_LEVEL);
    }

    pub fn set_default_log_level(&self, logger: &Logger) {
        match Severity::from_name(&self.default_spec) {
            Some(severity) => logger.set_level(severity),
            None => {
                self.set_system_log_level(logger);
                logger.warning(&unknown_level(&self.default_spec));
            }
        }
    }

    /// Apply `spec` to `logger`, degrading through the default spec and then
    /// the system level when it is not recognized.
    pub fn set_log_level(&self, logger: &Logger, spec: &str) {
        let upper = spec.to_uppercase();
        match Severity::from_name(&upper) {
            Some(severity) => logger.set_level(severity),
            None => {
                self.set_default_log_level(logger);
                logger.warning(&unknown_level(&upper));
            }
        }
    }
}

impl Default for LevelResolver {
    fn default() -> Self {
        Self::from_env(&ProcessEnv)
    }
}

fn unknown_level(spec: &str) -> String {
    format!("Unknown log level \"{}\"", spec)
}
