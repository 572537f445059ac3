//! LogBridge - structured leveled logging over line-oriented sinks.
//!
//! This library implements a structured, leveled logging contract
//! ([`logger::Logger`]) by translating calls into a simpler, string-oriented
//! backend ([`sink::LogSink`]) that accepts pre-formatted lines plus an
//! explicit caller depth. Loggers are immutable values: deriving a child via
//! `v`, `with_name` or `with_values` copies the accumulated key/value
//! context, so no two logger handles ever share mutable state.
//!
//! # Architecture
//!
//! - [`logger`]: the logging contract and its sink-backed implementation
//! - [`sink`]: the backend seam plus tracing, no-op and in-memory sinks
//! - [`value`]: the closed set of renderable key/value categories
//! - [`caller`]: bounded stack-skip heuristic for source attribution
//! - [`logging`]: process-level tracing backend bootstrap
//!
//! # High-Level API
//!
//! ```
//! use std::sync::Arc;
//! use logbridge::kvs;
//! use logbridge::logger::SinkLogger;
//! use logbridge::sink::MemorySink;
//!
//! let sink = Arc::new(MemorySink::new());
//! let root = SinkLogger::new(sink.clone());
//! let svc = root.with_name("svc").with_values(&kvs!["a", 1]);
//! svc.info("started", &kvs!["b", 2]);
//!
//! assert_eq!(sink.entries()[0].text, "svc: started a=1 b=2");
//! ```

pub mod caller;
pub mod logger;
pub mod logging;
pub mod sink;
pub mod value;

mod dedup;
mod format;

/// Version of the logbridge library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
