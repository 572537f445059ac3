//! No-operation sink implementation.

use crate::sink::LogSink;

/// A sink that discards all lines.
///
/// Useful for:
/// - Unit tests where log output would be noise
/// - Benchmarks where logging overhead should be eliminated
/// - Silent operation modes
///
/// Every level reports as disabled, so info dispatch short-circuits before
/// any formatting work. Error lines still arrive (they bypass the
/// verbosity gate) and are discarded.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use logbridge::sink::{LogSink, NoOpSink};
///
/// let sink: Arc<dyn LogSink> = Arc::new(NoOpSink);
/// assert!(!sink.enabled(0));
/// sink.info_at_depth(1, "this line is discarded");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl LogSink for NoOpSink {
    fn enabled(&self, _level: u8) -> bool {
        false
    }

    #[inline]
    fn info_at_depth(&self, _depth: usize, _text: &str) {
        // Intentionally empty - discard all lines
    }

    #[inline]
    fn error_at_depth(&self, _depth: usize, _text: &str) {
        // Intentionally empty - discard all lines
    }
}
