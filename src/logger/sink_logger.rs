//! Sink-backed logger implementation.

use std::error::Error;
use std::sync::Arc;

use crate::caller::{CallerResolver, HeuristicResolver};
use crate::dedup::trim_duplicates;
use crate::format::format_kv_list;
use crate::logger::Logger;
use crate::sink::LogSink;
use crate::value::Value;

/// Logger that translates structured calls into pre-formatted lines on a
/// [`LogSink`].
///
/// A `SinkLogger` is an immutable value holding a verbosity level, a
/// hierarchical name prefix and the key/value entries accumulated through
/// `with_values`. Every derivation clones the receiver; the accumulated
/// entries are deep-copied, so derived loggers never alias state with their
/// parent or siblings. The sink and caller-resolver handles are shared -
/// they are the external collaborators, not logger state.
///
/// Each `info`/`error` call deduplicates the accumulated entries against
/// the per-call entries (per-call wins on key collision), formats both
/// halves, assembles the line and writes it through the sink's depth-aware
/// primitive.
#[derive(Clone)]
pub struct SinkLogger {
    sink: Arc<dyn LogSink>,
    caller: Arc<dyn CallerResolver>,
    level: u8,
    prefix: String,
    values: Vec<Value>,
}

impl SinkLogger {
    /// Root logger: level 0, empty prefix, no accumulated entries.
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self::with_caller_resolver(sink, Arc::new(HeuristicResolver::new()))
    }

    /// Root logger with an explicit caller resolver.
    ///
    /// Tests inject a [`FixedDepth`](crate::caller::FixedDepth) resolver
    /// here to keep assertions independent of real stack walking.
    pub fn with_caller_resolver(
        sink: Arc<dyn LogSink>,
        caller: Arc<dyn CallerResolver>,
    ) -> Self {
        Self {
            sink,
            caller,
            level: 0,
            prefix: String::new(),
            values: Vec::new(),
        }
    }

    /// Derived logger writing `info` at `level`.
    pub fn v(&self, level: u8) -> SinkLogger {
        let mut next = self.clone();
        next.level = level;
        next
    }

    /// Derived logger with `name` appended to the prefix.
    pub fn with_name(&self, name: &str) -> SinkLogger {
        let mut next = self.clone();
        if !next.prefix.is_empty() {
            next.prefix.push('/');
        }
        next.prefix.push_str(name);
        next
    }

    /// Derived logger with `kvs` appended to the accumulated entries.
    pub fn with_values(&self, kvs: &[Value]) -> SinkLogger {
        let mut next = self.clone();
        next.values.extend_from_slice(kvs);
        next
    }

    /// True when the sink's verbosity threshold admits this logger's level.
    pub fn enabled(&self) -> bool {
        self.sink.enabled(self.level)
    }

    /// Write an informational line; a no-op below the verbosity threshold.
    pub fn info(&self, msg: &str, kvs: &[Value]) {
        if !self.enabled() {
            return;
        }
        let trimmed = trim_duplicates(&[self.values.as_slice(), kvs]);
        let fixed = format_kv_list(&trimmed[0]);
        let user = format_kv_list(&trimmed[1]);
        let text = concatenate(&self.prefix, &[msg, &fixed, &user]);
        self.sink
            .info_at_depth(self.caller.frames_to_caller(), &text);
    }

    /// Write an error line; never gated on verbosity.
    pub fn error(&self, err: Option<&dyn Error>, msg: &str, kvs: &[Value]) {
        let err_str = format_kv_list(&[Value::from("err"), Value::opt_error(err)]);
        let trimmed = trim_duplicates(&[self.values.as_slice(), kvs]);
        let fixed = format_kv_list(&trimmed[0]);
        let user = format_kv_list(&trimmed[1]);
        let text = concatenate(&self.prefix, &[msg, &err_str, &fixed, &user]);
        self.sink
            .error_at_depth(self.caller.frames_to_caller(), &text);
    }
}

impl Logger for SinkLogger {
    fn enabled(&self) -> bool {
        SinkLogger::enabled(self)
    }

    fn info(&self, msg: &str, kvs: &[Value]) {
        SinkLogger::info(self, msg, kvs);
    }

    fn error(&self, err: Option<&dyn Error>, msg: &str, kvs: &[Value]) {
        SinkLogger::error(self, err, msg, kvs);
    }

    fn v(&self, level: u8) -> Box<dyn Logger> {
        Box::new(SinkLogger::v(self, level))
    }

    fn with_name(&self, name: &str) -> Box<dyn Logger> {
        Box::new(SinkLogger::with_name(self, name))
    }

    fn with_values(&self, kvs: &[Value]) -> Box<dyn Logger> {
        Box::new(SinkLogger::with_values(self, kvs))
    }
}

/// Join the non-empty pieces of a line with single spaces, prefix first.
///
/// A non-empty prefix contributes `prefix:`; empty pieces are skipped
/// entirely, so the output never carries doubled or trailing spaces.
fn concatenate(prefix: &str, pieces: &[&str]) -> String {
    let mut out = String::new();
    if !prefix.is_empty() {
        out.push_str(prefix);
        out.push(':');
    }
    for piece in pieces {
        if piece.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(piece);
    }
    out
}
