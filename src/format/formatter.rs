//! Severity-keyed formatters, plain and colorized.

use crate::format::template::{FormatTemplate, LINE_FORMAT};
use crate::level::Severity;
use crate::naming::NameMode;
use crate::registry::Record;

/// ANSI escape sequences used by the colorized formatter.
pub mod ansi {
    pub const WHITE: &str = "\x1b[97m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const WHITE_ON_RED: &str = "\x1b[41;97m";
    pub const BOLD_BLUE: &str = "\x1b[34;1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color prefix for each severity.
pub fn color_for(severity: Severity) -> &'static str {
    match severity {
        Severity::Debug => ansi::BOLD_BLUE,
        Severity::Info => ansi::WHITE,
        Severity::Warning => ansi::YELLOW,
        Severity::Error => ansi::RED,
        Severity::Critical => ansi::WHITE_ON_RED,
    }
}

/// Formats records into lines. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    mode: NameMode,
    templates: [FormatTemplate; 5],
}

impl Formatter {
    /// Same layout for every severity, no color.
    pub fn plain(mode: NameMode) -> Self {
        Self {
            mode,
            templates: Severity::ALL.map(|_| FormatTemplate::new(LINE_FORMAT)),
        }
    }

    /// Every template wrapped in its severity's color and a reset.
    pub fn colored(mode: NameMode) -> Self {
        Self {
            mode,
            templates: Severity::ALL
                .map(|severity| FormatTemplate::wrapped(LINE_FORMAT, color_for(severity), ansi::RESET)),
        }
    }

    pub fn new(mode: NameMode, colorize: bool) -> Self {
        if colorize {
            Self::colored(mode)
        } else {
            Self::plain(mode)
        }
    }

    pub fn name_mode(&self) -> NameMode {
        self.mode
    }

    pub fn template(&self, severity: Severity) -> &FormatTemplate {
        &self.templates[severity.index()]
    }

    pub fn format(&self, record: &Record<'_>) -> String {
        let name = self.mode.render(record.name);
        self.template(record.severity).with_name(&name).render(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn record(severity: Severity) -> Record<'static> {
        Record {
            name: "alpha.beta.gamma",
            severity,
            message: "disk almost full",
            timestamp: Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    #[test]
    fn test_plain_line() {
        let line = Formatter::plain(NameMode::Short).format(&record(Severity::Warning));
        assert_eq!(line, "2024-01-02 03:04:05,000 - a.b.gamma - WARNING - disk almost full");
    }

    #[test]
    fn test_critical_colors() {
        let line = Formatter::colored(NameMode::Leaf).format(&record(Severity::Critical));
        assert!(line.starts_with("\x1b[41;97m2024-01-02"));
        assert!(line.ends_with("disk almost full\x1b[0m"));
        assert_eq!(line.matches(ansi::RESET).count(), 1);
        assert!(line.contains(" - gamma - CRITICAL - "));
    }

    #[test]
    fn test_each_severity_has_own_color() {
        let formatter = Formatter::colored(NameMode::Full);
        for severity in Severity::ALL {
            let line = formatter.format(&record(severity));
            assert!(line.starts_with(color_for(severity)), "{severity}");
            assert!(line.contains("alpha.beta.gamma"));
        }
    }

    #[test]
    fn test_format_does_not_touch_templates() {
        let formatter = Formatter::colored(NameMode::Leaf);
        let before = formatter.clone();
        formatter.format(&record(Severity::Info));
        assert_eq!(formatter, before);
        assert!(formatter.template(Severity::Info).as_str().contains("{name}"));
    }
}
