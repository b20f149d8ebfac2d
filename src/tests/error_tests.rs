//! Tests for the error module.

use crate::data_structures::route_trie::RouteTrieError;
use crate::error::config::ConfigError;
use crate::error::{
    report_error, set_error_reporter, AlaError, ErrorContext, ErrorReporter, TracingErrorReporter,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = AlaError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that component errors convert and keep their message.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = AlaError::from(io_error);
    assert!(error.to_string().contains("file not found"));

    let error = AlaError::from(RouteTrieError::RouteNotFound("/a".to_string()));
    assert_eq!(error.to_string(), "Route trie error: Route not found: /a");

    let error = AlaError::from(ConfigError::ValidationError("bad".to_string()));
    assert_eq!(
        error.to_string(),
        "Configuration error: Configuration validation error: bad"
    );
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct CountingReporter {
    reported_count: AtomicUsize,
}

impl ErrorReporter for CountingReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter receives reports.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(CountingReporter::default());
    set_error_reporter(reporter.clone());

    report_error(ErrorContext::new(AlaError::Custom("test error".to_string()), "test_component"));

    assert!(reporter.reported_count.load(Ordering::SeqCst) >= 1);
}

/// Test that the default tracing error reporter can be used directly.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let context = ErrorContext::new(AlaError::Custom("test error".to_string()), "test_component");
    reporter.report(context);
}
