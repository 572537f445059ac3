//! Logger trait definition.

use std::error::Error;

use crate::value::Value;

/// Structured leveled logging interface.
///
/// A logger is an immutable value; the derivation methods (`v`,
/// `with_name`, `with_values`) return new, independent loggers and never
/// mutate the receiver, so a logger can be shared freely across threads and
/// components. Key/value arguments are flat alternating lists, typically
/// built with the [`kvs!`](crate::kvs) macro.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across threads.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use logbridge::kvs;
/// use logbridge::logger::{Logger, SinkLogger};
/// use logbridge::sink::NoOpSink;
///
/// let root: Box<dyn Logger> = Box::new(SinkLogger::new(Arc::new(NoOpSink)));
/// let child = root.with_name("child").with_values(&kvs!["request", 7]);
/// child.info("handled", &[]);
/// ```
pub trait Logger: Send + Sync {
    /// True when an `info` call on this logger would be written.
    ///
    /// Delegates to the backend's current verbosity threshold; the logger
    /// itself holds no gating state.
    fn enabled(&self) -> bool;

    /// Log an informational message with per-call key/value entries.
    ///
    /// Suppressed entirely, with no side effects, when the backend's
    /// threshold is below this logger's level.
    fn info(&self, msg: &str, kvs: &[Value]);

    /// Log an error with a message and per-call key/value entries.
    ///
    /// Never suppressed by verbosity. An absent error is rendered as a
    /// placeholder rather than omitted.
    fn error(&self, err: Option<&dyn Error>, msg: &str, kvs: &[Value]);

    /// Derive a logger that writes `info` at the given verbosity level.
    fn v(&self, level: u8) -> Box<dyn Logger>;

    /// Derive a logger with a name segment appended to the prefix.
    ///
    /// Segments are joined with `/`. A name containing `/` silently
    /// produces an ambiguous combined prefix; callers should not pass one,
    /// but this library does not enforce that.
    fn with_name(&self, name: &str) -> Box<dyn Logger>;

    /// Derive a logger with additional accumulated key/value entries.
    ///
    /// Entries append in the given order; duplicate keys are resolved at
    /// write time, not here.
    fn with_values(&self, kvs: &[Value]) -> Box<dyn Logger>;
}
