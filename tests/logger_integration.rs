//! Integration tests for the structured logging pipeline.
//!
//! These tests verify the complete flow from the public `Logger` contract
//! down to the sink, including:
//! - Line assembly (prefix, message, accumulated and per-call entries)
//! - Key precedence between accumulated context and call arguments
//! - Copy-on-write derivation (independence of parents, children, siblings)
//! - Verbosity gating for info and its absence for errors
//! - Caller-depth propagation to the sink

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use logbridge::caller::FixedDepth;
use logbridge::kvs;
use logbridge::logger::{Logger, SinkLogger};
use logbridge::sink::{LogSink, MemorySink, Severity};
use logbridge::value::Value;

// =============================================================================
// Test Helpers
// =============================================================================

#[derive(Debug)]
struct FlakyBackend;

impl fmt::Display for FlakyBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "backend unavailable")
    }
}

impl Error for FlakyBackend {}

/// Root logger over a fresh capturing sink with a fixed caller depth.
fn harness(verbosity: u8) -> (Box<dyn Logger>, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::with_verbosity(verbosity));
    let logger = SinkLogger::with_caller_resolver(sink.clone(), Arc::new(FixedDepth(1)));
    (Box::new(logger), sink)
}

// =============================================================================
// Integration Tests
// =============================================================================

#[test]
fn test_end_to_end_line_assembly() {
    let (root, sink) = harness(0);

    root.with_values(&kvs!["a", 1])
        .with_name("svc")
        .info("started", &kvs!["b", 2]);

    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, Severity::Info);
    assert_eq!(entries[0].text, "svc: started a=1 b=2");
}

#[test]
fn test_per_call_entries_win_key_collisions() {
    let (root, sink) = harness(0);

    root.with_values(&kvs!["user", "alice", "request", 1])
        .info("done", &kvs!["request", 2]);

    assert_eq!(sink.entries()[0].text, "done user=\"alice\" request=2");
}

#[test]
fn test_derivation_is_copy_on_write() {
    let (root, sink) = harness(0);

    let parent = root.with_name("api");
    let child = parent.with_values(&kvs!["session", 9]);
    parent.info("parent view", &[]);
    child.info("child view", &[]);

    let entries = sink.entries();
    assert_eq!(entries[0].text, "api: parent view");
    assert_eq!(entries[1].text, "api: child view session=9");
}

#[test]
fn test_nested_names_accumulate() {
    let (root, sink) = harness(0);

    root.with_name("gateway")
        .with_name("http")
        .info("listening", &kvs!["port", 8080]);

    assert_eq!(sink.entries()[0].text, "gateway/http: listening port=8080");
}

#[test]
fn test_info_respects_sink_threshold() {
    let (root, sink) = harness(1);

    root.v(1).info("at threshold", &[]);
    root.v(2).info("over threshold", &[]);

    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "at threshold");
}

#[test]
fn test_enabled_matches_threshold_check() {
    let (root, sink) = harness(3);

    assert!(root.v(3).enabled());
    assert!(!root.v(4).enabled());
    assert!(sink.enabled(3));
    assert!(!sink.enabled(4));
}

#[test]
fn test_error_is_written_when_info_is_not() {
    let (root, sink) = harness(0);
    let quiet = root.v(7);

    quiet.info("suppressed", &[]);
    quiet.error(Some(&FlakyBackend), "write failed", &kvs!["retries", 3]);

    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, Severity::Error);
    assert_eq!(
        entries[0].text,
        "write failed err=\"backend unavailable\" retries=3"
    );
}

#[test]
fn test_error_entry_precedes_context_entries() {
    let (root, sink) = harness(0);

    root.with_name("store")
        .with_values(&kvs!["shard", 4])
        .error(Some(&FlakyBackend), "flush failed", &kvs!["attempt", 2]);

    assert_eq!(
        sink.entries()[0].text,
        "store: flush failed err=\"backend unavailable\" shard=4 attempt=2"
    );
}

#[test]
fn test_identical_calls_are_idempotent() {
    let (root, sink) = harness(0);
    let logger = root.with_name("svc").with_values(&kvs!["a", 1]);

    logger.info("tick", &kvs!["b", 2]);
    logger.info("tick", &kvs!["b", 2]);

    let entries = sink.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], entries[1]);
}

#[test]
fn test_fixed_depth_reaches_sink_unchanged() {
    let sink = Arc::new(MemorySink::new());
    let logger = SinkLogger::with_caller_resolver(sink.clone(), Arc::new(FixedDepth(2)));

    logger.info("attributed", &[]);

    assert_eq!(sink.entries()[0].depth, 2);
}

#[test]
fn test_odd_entries_render_placeholder_end_to_end() {
    let (root, sink) = harness(0);

    root.info("partial", &kvs!["a", 1, "orphan"]);

    assert_eq!(sink.entries()[0].text, "partial a=1 orphan=(MISSING)");
}

#[test]
fn test_heterogeneous_values_render_by_category() {
    let (root, sink) = harness(0);
    let addr = std::net::Ipv4Addr::new(10, 0, 0, 1);

    root.info(
        "mixed",
        &kvs![
            "name",
            "db",
            "port",
            5432,
            "ratio",
            0.5,
            "up",
            true,
            "addr",
            Value::stringer(&addr),
            "pair",
            Value::debug(&(1, 2)),
        ],
    );

    assert_eq!(
        sink.entries()[0].text,
        "mixed name=\"db\" port=5432 ratio=0.5 up=true addr=\"10.0.0.1\" pair=(1, 2)"
    );
}

#[test]
fn test_shared_logger_across_threads() {
    let sink = Arc::new(MemorySink::new());
    let logger = Arc::new(SinkLogger::with_caller_resolver(
        sink.clone(),
        Arc::new(FixedDepth(1)),
    ));

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let logger = logger.clone();
            std::thread::spawn(move || {
                logger.with_values(&kvs!["worker", worker]).info("up", &[]);
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    let entries = sink.entries();
    assert_eq!(entries.len(), 4);
    for entry in &entries {
        assert!(entry.text.starts_with("up worker="));
    }
}
