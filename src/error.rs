//! Crate error type.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::loader::ConfigError;

/// Errors that can occur while building loggers and their sinks.
///
/// Unrecognized level names are never reported here; they degrade to a
/// fallback level instead.
#[derive(Debug, Error)]
pub enum Error {
    /// A sink could not open or prepare its output file.
    #[error("failed to open log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded or was rejected.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
