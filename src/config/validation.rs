//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate logger names and value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggingConfig → Result<(), Vec<ValidationError>>
//! - Level specs are not checked here; unknown ones degrade at runtime

use std::fmt;

use crate::config::schema::LoggingConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `backup_count` must keep at least one file.
    ZeroBackupCount,
    /// A logger name has an empty segment or edge dot.
    InvalidLoggerName(String),
    /// `level_env` is set to an empty string.
    EmptyLevelEnv,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::ZeroBackupCount => write!(f, "backup_count must be at least 1"),
            ValidationError::InvalidLoggerName(name) => write!(f, "invalid logger name \"{}\"", name),
            ValidationError::EmptyLevelEnv => write!(f, "level_env must not be empty"),
        }
    }
}

/// Validate a configuration, collecting every problem.
pub fn validate_config(config: &LoggingConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.backup_count == 0 {
        errors.push(ValidationError::ZeroBackupCount);
    }

    // The root may be the unnamed top logger; entries must be named.
    if !config.root_name.is_empty() && !is_valid_logger_name(&config.root_name) {
        errors.push(ValidationError::InvalidLoggerName(config.root_name.clone()));
    }
    for name in config.loggers.keys() {
        if !is_valid_logger_name(name) {
            errors.push(ValidationError::InvalidLoggerName(name.clone()));
        }
    }

    if config.level_env.as_deref().is_some_and(|key| key.trim().is_empty()) {
        errors.push(ValidationError::EmptyLevelEnv);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_valid_logger_name(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(|segment| !segment.trim().is_empty())
}
