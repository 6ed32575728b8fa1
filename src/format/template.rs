//! Line templates and their interpolation.

use std::fmt::Write as _;

use crate::registry::Record;

/// Base line layout. `{name}` is filled with the display name first; the
/// remaining fields are filled per record.
pub const LINE_FORMAT: &str = "{asctime} - {name} - {levelname} - {message}";

/// Timestamp layout for `{asctime}`.
pub const ASCTIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

const NAME_FIELD: &str = "{name}";

/// A template with a `{name}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate(String);

impl FormatTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// `prefix` + template + `suffix`.
    pub fn wrapped(template: &str, prefix: &str, suffix: &str) -> Self {
        Self(format!("{prefix}{template}{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitute the display name, yielding a per-record line format.
    pub fn with_name(&self, name: &str) -> LineFormat {
        LineFormat(self.0.replace(NAME_FIELD, name))
    }
}

/// A template whose name is already resolved. Built fresh for every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFormat(String);

impl LineFormat {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpolate `{asctime}`, `{levelname}` and `{message}`. Unknown
    /// `{...}` groups are kept verbatim.
    pub fn render(&self, record: &Record<'_>) -> String {
        let mut out = String::with_capacity(self.0.len() + record.message.len() + 32);
        let mut rest = self.0.as_str();

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let tail = &rest[open..];
            let Some(close) = tail.find('}') else {
                out.push_str(tail);
                return out;
            };
            match &tail[1..close] {
                "asctime" => {
                    let _ = write!(out, "{}", record.timestamp.format(ASCTIME_FORMAT));
                }
                "levelname" => out.push_str(record.severity.as_str()),
                "message" => out.push_str(record.message),
                _ => out.push_str(&tail[..=close]),
            }
            rest = &tail[close + 1..];
        }
        out.push_str(rest);
        out
    }
}
