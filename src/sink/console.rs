//! Console output.

use std::fmt;
use std::io::{self, Write};

use tracing_subscriber::fmt::MakeWriter;

use crate::format::Formatter;
use crate::registry::Record;
use crate::sink::{Sink, SinkKind};

/// Writes one formatted line per record and flushes it.
pub struct ConsoleSink<W = fn() -> io::Stdout> {
    formatter: Formatter,
    make_writer: W,
}

impl ConsoleSink {
    /// A sink on standard output.
    pub fn stdout(formatter: Formatter) -> Self {
        Self {
            formatter,
            make_writer: io::stdout,
        }
    }
}

impl<W> ConsoleSink<W>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    pub fn with_writer(formatter: Formatter, make_writer: W) -> Self {
        Self { formatter, make_writer }
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }
}

impl<W> fmt::Debug for ConsoleSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("formatter", &self.formatter)
            .finish_non_exhaustive()
    }
}

impl<W> Sink for ConsoleSink<W>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fn emit(&self, record: &Record<'_>) -> io::Result<()> {
        let mut line = self.formatter.format(record);
        line.push('\n');

        let mut writer = self.make_writer.make_writer();
        writer.write_all(line.as_bytes())?;
        writer.flush()
    }

    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }
}
