//! Midnight-rotating file output.
//!
//! # Rotation
//! ```text
//! app.log            ← always the live file
//! app.log.20240314   ← the day that ended at the last rollover
//! app.log.20240313
//! ...                ← at most `backup_count` archives, oldest removed first
//! ```
//!
//! The first rollover is the local midnight following the file's last
//! modification, so a stale file left from an earlier day is archived on the
//! first write of a new day.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};

use crate::error::{Error, Result};
use crate::format::Formatter;
use crate::registry::Record;
use crate::sink::{Clock, Sink, SinkKind};

/// Archives kept by default.
pub const DEFAULT_BACKUP_COUNT: usize = 30;

/// Archive name suffix layout.
pub const SUFFIX_FORMAT: &str = "%Y%m%d";

struct RotationState {
    file: Option<File>,
    rollover_at: DateTime<Local>,
}

pub struct TimedRotatingFileSink {
    path: PathBuf,
    formatter: Formatter,
    backup_count: usize,
    clock: Arc<dyn Clock>,
    state: Mutex<RotationState>,
}

impl TimedRotatingFileSink {
    /// Open `path` for appending.
    pub fn open(
        path: impl Into<PathBuf>,
        formatter: Formatter,
        backup_count: usize,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let path = path.into();
        let last_written = fs::metadata(&path)
            .and_then(|meta| meta.modified())
            .map(DateTime::<Local>::from)
            .unwrap_or_else(|_| clock.now());

        let file = open_append(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), backup_count, "Opened rotating log file");

        Ok(Self {
            path,
            formatter,
            backup_count,
            clock,
            state: Mutex::new(RotationState {
                file: Some(file),
                rollover_at: next_midnight(last_written),
            }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_count(&self) -> usize {
        self.backup_count
    }

    /// Next instant at which a write triggers rotation.
    pub fn rollover_at(&self) -> DateTime<Local> {
        self.state.lock().expect("rotating sink mutex poisoned").rollover_at
    }

    /// Archive name for the day `date`.
    pub fn archive_path(&self, date: NaiveDate) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".");
        name.push(date.format(SUFFIX_FORMAT).to_string());
        PathBuf::from(name)
    }

    /// Archives currently on disk, oldest first.
    pub fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let Some(base) = self.path.file_name().and_then(|n| n.to_str()) else {
            return Ok(Vec::new());
        };
        let prefix = format!("{base}.");

        let mut found = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Some(suffix) = name.strip_prefix(&prefix) {
                if is_backup_suffix(suffix) {
                    found.push(dir.join(name));
                }
            }
        }
        found.sort();
        Ok(found)
    }

    fn roll_over(&self, state: &mut RotationState, now: DateTime<Local>) -> io::Result<()> {
        // Close before renaming.
        state.file.take();

        let archive = self.archive_path(covered_day(state.rollover_at));
        if archive.exists() {
            fs::remove_file(&archive)?;
        }
        if self.path.exists() {
            fs::rename(&self.path, &archive)?;
        }

        let backups = self.backups()?;
        let excess = backups.len().saturating_sub(self.backup_count);
        for old in &backups[..excess] {
            fs::remove_file(old)?;
        }

        state.file = Some(open_append(&self.path)?);
        state.rollover_at = next_midnight(now);

        tracing::debug!(
            path = %self.path.display(),
            archive = %archive.display(),
            removed = excess,
            "Rotated log file"
        );
        Ok(())
    }
}

impl fmt::Debug for TimedRotatingFileSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimedRotatingFileSink")
            .field("path", &self.path)
            .field("backup_count", &self.backup_count)
            .field("formatter", &self.formatter)
            .finish_non_exhaustive()
    }
}

impl Sink for TimedRotatingFileSink {
    fn emit(&self, record: &Record<'_>) -> io::Result<()> {
        let mut line = self.formatter.format(record);
        line.push('\n');

        let now = self.clock.now();
        let mut state = self.state.lock().expect("rotating sink mutex poisoned");
        if now >= state.rollover_at {
            self.roll_over(&mut state, now)?;
        }

        // A failed rollover leaves no handle; reopen.
        if state.file.is_none() {
            state.file = Some(open_append(&self.path)?);
        }
        if let Some(file) = state.file.as_mut() {
            file.write_all(line.as_bytes())?;
            file.flush()?;
        }
        Ok(())
    }

    fn kind(&self) -> SinkKind {
        SinkKind::RotatingFile
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Start of the next local day after `t`.
///
/// Where midnight is skipped by a clock change, the day starts at the first
/// whole hour that exists.
fn next_midnight(t: DateTime<Local>) -> DateTime<Local> {
    let Some(day) = t.date_naive().succ_opt() else {
        return t + Duration::days(1);
    };
    (0..24)
        .filter_map(|hour| day.and_hms_opt(hour, 0, 0))
        .find_map(|start| Local.from_local_datetime(&start).earliest())
        .unwrap_or(t + Duration::days(1))
}

/// Calendar day that ended at `rollover_at`.
///
/// Taken from the calendar rather than by subtracting 24 hours, since days
/// around a clock change are 23 or 25 hours long.
fn covered_day(rollover_at: DateTime<Local>) -> NaiveDate {
    let day = rollover_at.date_naive();
    day.pred_opt().unwrap_or(day)
}

/// `YYYYMMDD`, optionally followed by `.ext`.
fn is_backup_suffix(suffix: &str) -> bool {
    let (date, ext) = match suffix.split_once('.') {
        Some((date, ext)) => (date, Some(ext)),
        None => (suffix, None),
    };
    let date_ok = date.len() == 8 && date.bytes().all(|b| b.is_ascii_digit());
    let ext_ok = ext.map_or(true, |ext| {
        !ext.is_empty() && ext.chars().all(|c| c.is_alphanumeric() || c == '_')
    });
    date_ok && ext_ok
}
