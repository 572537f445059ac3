//! In-memory capturing sink implementation.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Mutex;

use crate::sink::LogSink;

/// Which write primitive produced a captured line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Written through the info primitive.
    Info,
    /// Written through the error primitive.
    Error,
}

/// One captured write.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Which write primitive was used.
    pub severity: Severity,
    /// Caller depth the logger passed along.
    pub depth: usize,
    /// Fully assembled line text.
    pub text: String,
}

/// Sink that records every write in memory.
///
/// Substitutes for a real backend in tests: entries keep the severity, the
/// caller depth and the exact line text, and the verbosity threshold can be
/// adjusted at runtime to exercise gating.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use logbridge::sink::{LogSink, MemorySink, Severity};
///
/// let sink = Arc::new(MemorySink::new());
/// sink.error_at_depth(1, "boom");
///
/// let entries = sink.entries();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].severity, Severity::Error);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    verbosity: AtomicU8,
    entries: Mutex<Vec<Entry>>,
}

impl MemorySink {
    /// Capturing sink with verbosity threshold 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capturing sink admitting info lines at levels up to `verbosity`.
    pub fn with_verbosity(verbosity: u8) -> Self {
        Self {
            verbosity: AtomicU8::new(verbosity),
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Adjust the verbosity threshold.
    pub fn set_verbosity(&self, verbosity: u8) {
        self.verbosity.store(verbosity, Ordering::Relaxed);
    }

    /// Snapshot of everything captured so far, in write order.
    pub fn entries(&self) -> Vec<Entry> {
        self.entries.lock().unwrap().clone()
    }

    fn record(&self, severity: Severity, depth: usize, text: &str) {
        self.entries.lock().unwrap().push(Entry {
            severity,
            depth,
            text: text.to_string(),
        });
    }
}

impl LogSink for MemorySink {
    fn enabled(&self, level: u8) -> bool {
        level <= self.verbosity.load(Ordering::Relaxed)
    }

    fn info_at_depth(&self, depth: usize, text: &str) {
        self.record(Severity::Info, depth, text);
    }

    fn error_at_depth(&self, depth: usize, text: &str) {
        self.record(Severity::Error, depth, text);
    }
}
