//! Shared utilities for integration tests.

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, TimeZone};
use logtemplate::sink::ManualClock;
use logtemplate::LoggerRegistry;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory console capturing every written byte.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_string).collect()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

pub fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

/// Registry writing its console output into the returned capture.
pub fn registry_with(pairs: &[(&str, &str)]) -> (LoggerRegistry, Capture) {
    let capture = Capture::default();
    let registry = LoggerRegistry::builder()
        .env(env(pairs))
        .console_writer(capture.clone())
        .build();
    (registry, capture)
}

/// Like [`registry_with`] but on a manual clock.
#[allow(dead_code)]
pub fn registry_at(start: DateTime<Local>) -> (LoggerRegistry, Capture, Arc<ManualClock>) {
    let capture = Capture::default();
    let clock = Arc::new(ManualClock::new(start));
    let registry = LoggerRegistry::builder()
        .env(env(&[]))
        .clock(clock.clone())
        .console_writer(capture.clone())
        .build();
    (registry, capture, clock)
}
