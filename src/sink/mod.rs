//! Backend sink abstraction layer.
//!
//! The logger translates structured calls into fully assembled text lines
//! and hands them to a sink together with a caller depth. This module
//! defines that seam and the bundled backends:
//!
//! - `LogSink` trait: the line-oriented contract every backend implements
//! - `TracingSink`: production backend that delegates to the `tracing` crate
//! - `NoOpSink`: silent backend for tests, benchmarks and quiet modes
//! - `MemorySink`: capturing backend for asserting on emitted lines
//!
//! The sink owns the process-wide verbosity threshold; loggers only query
//! it. Swapping backends never requires touching logger call sites:
//!
//! ```
//! use std::sync::Arc;
//! use logbridge::logger::SinkLogger;
//! use logbridge::sink::{LogSink, NoOpSink};
//!
//! let sink: Arc<dyn LogSink> = Arc::new(NoOpSink);
//! let logger = SinkLogger::new(sink);
//! logger.info("discarded", &[]);
//! ```

mod memory;
mod noop;
mod tracing_adapter;
mod r#trait;

pub use memory::{Entry, MemorySink, Severity};
pub use noop::NoOpSink;
pub use r#trait::LogSink;
pub use tracing_adapter::TracingSink;
