//! Structured logging contract and its sink-backed implementation.
//!
//! This module provides the leveled, key/value logging interface that
//! application components depend on, decoupled from any concrete backend
//! (Dependency Inversion: components hold an `Arc<dyn Logger>` or a
//! concrete [`SinkLogger`], never a backend handle).
//!
//! # Architecture
//!
//! - `Logger` trait: the capability components program against
//! - `SinkLogger`: the implementation, translating each call into one
//!   pre-formatted line on a [`LogSink`](crate::sink::LogSink)
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use logbridge::kvs;
//! use logbridge::logger::{Logger, SinkLogger};
//! use logbridge::sink::MemorySink;
//!
//! struct Worker {
//!     logger: Box<dyn Logger>,
//! }
//!
//! impl Worker {
//!     fn run(&self) {
//!         self.logger.info("tick", &kvs!["n", 1]);
//!     }
//! }
//!
//! let sink = Arc::new(MemorySink::new());
//! let worker = Worker {
//!     logger: Box::new(SinkLogger::new(sink.clone()).with_name("worker")),
//! };
//! worker.run();
//! assert_eq!(sink.entries()[0].text, "worker: tick n=1");
//! ```

mod sink_logger;
mod r#trait;

pub use sink_logger::SinkLogger;
pub use r#trait::Logger;
