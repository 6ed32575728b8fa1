//! A single log event.

use chrono::{DateTime, Local};

use crate::level::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    /// Dotted name of the logger the record was emitted on.
    pub name: &'a str,
    pub severity: Severity,
    pub message: &'a str,
    pub timestamp: DateTime<Local>,
}
