//! Log sink trait definition.

/// Line-oriented logging backend.
///
/// A sink owns the process-wide verbosity threshold and performs the actual
/// writes. Text arrives fully assembled; `depth` is the number of stack
/// frames between the sink call and the application call site, for
/// backends that attribute records to source locations. Backends without
/// that ability may ignore it.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so one sink can back every logger
/// handle in the process.
pub trait LogSink: Send + Sync {
    /// True when the sink's current verbosity threshold admits `level`.
    fn enabled(&self, level: u8) -> bool;

    /// Write an informational line, skipping `depth` caller frames for
    /// attribution.
    fn info_at_depth(&self, depth: usize, text: &str);

    /// Write an error line, skipping `depth` caller frames for attribution.
    ///
    /// Error writes are never gated on the verbosity threshold.
    fn error_at_depth(&self, depth: usize, text: &str);
}
