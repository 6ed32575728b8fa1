//! Output sinks.
//!
//! # Responsibilities
//! - Turn records into lines with a [`Formatter`](crate::format::Formatter)
//! - Deliver lines to the console or a midnight-rotating file
//!
//! # Design Decisions
//! - Sinks report write failures as `io::Error`; loggers log and drop them
//! - Time comes from an injectable [`Clock`] so rotation is testable

pub mod clock;
pub mod console;
pub mod rotating;

use std::fmt;
use std::io;

use crate::registry::Record;

pub use clock::{Clock, ManualClock, SystemClock};
pub use console::ConsoleSink;
pub use rotating::{TimedRotatingFileSink, DEFAULT_BACKUP_COUNT};

/// Kind of output a sink writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Console,
    RotatingFile,
}

/// An output destination attached to a logger.
pub trait Sink: Send + Sync + fmt::Debug {
    fn emit(&self, record: &Record<'_>) -> io::Result<()>;

    fn kind(&self) -> SinkKind;
}
