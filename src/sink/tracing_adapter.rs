//! Tracing library sink implementation.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::sink::LogSink;

/// Sink that delegates to the `tracing` crate.
///
/// Bridges the line-oriented sink contract to the `tracing` ecosystem, so
/// assembled lines flow through whatever subscriber the process installed
/// (see [`logging::init`](crate::logging::init)). Info lines emit at
/// `tracing`'s INFO level regardless of their verbosity level - the numeric
/// threshold only gates whether they emit at all - and error lines emit at
/// ERROR.
///
/// The verbosity threshold lives inside the sink as a single atomic shared
/// by every logger handle. `tracing` callsites are static, so the caller
/// depth is advisory for this backend; source attribution falls to the
/// subscriber.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use logbridge::sink::{LogSink, TracingSink};
///
/// let sink = Arc::new(TracingSink::with_verbosity(2));
/// assert!(sink.enabled(2));
/// assert!(!sink.enabled(3));
/// ```
#[derive(Debug, Default)]
pub struct TracingSink {
    verbosity: AtomicU8,
}

impl TracingSink {
    /// Sink with verbosity threshold 0: only level-0 info lines pass.
    pub fn new() -> Self {
        Self::with_verbosity(0)
    }

    /// Sink admitting info lines at levels up to `verbosity`.
    pub fn with_verbosity(verbosity: u8) -> Self {
        Self {
            verbosity: AtomicU8::new(verbosity),
        }
    }

    /// Adjust the process-wide verbosity threshold.
    pub fn set_verbosity(&self, verbosity: u8) {
        self.verbosity.store(verbosity, Ordering::Relaxed);
    }
}

impl LogSink for TracingSink {
    fn enabled(&self, level: u8) -> bool {
        level <= self.verbosity.load(Ordering::Relaxed)
    }

    fn info_at_depth(&self, _depth: usize, text: &str) {
        tracing::info!("{}", text);
    }

    fn error_at_depth(&self, _depth: usize, text: &str) {
        tracing::error!("{}", text);
    }
}
