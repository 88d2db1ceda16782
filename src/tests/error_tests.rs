//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::data_structures::trie::{Trie, TrieError};
use crate::error::config::ConfigError;
use crate::error::{
    report_error, set_error_reporter, DictionaryError, DictionaryResult, ErrorContext,
    ErrorReporter, MockErrorReporter, TracingErrorReporter,
};
use crate::tests::CapturedLogs;
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = DictionaryError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that component errors convert into the top-level error.
#[test]
fn test_error_conversions() {
    fn insert_empty() -> DictionaryResult<bool> {
        let mut trie = Trie::new();
        Ok(trie.insert("")?)
    }

    let err = insert_empty().unwrap_err();
    assert!(matches!(err, DictionaryError::Trie(TrieError::EmptyWord)));
    assert_eq!(err.to_string(), "Trie error: Empty word not allowed");

    let err: DictionaryError = ConfigError::ValidationError("bad level".to_string()).into();
    assert_eq!(
        err.to_string(),
        "Configuration error: Configuration validation error: bad level"
    );

    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err = DictionaryError::from(io_error);
    assert!(err.to_string().contains("file not found"));
}

/// Test that the global error reporter receives reported errors.
///
/// Note: this test replaces the process-wide reporter.
#[test]
fn test_global_error_reporter() {
    let mut reporter = MockErrorReporter::new();
    reporter
        .expect_report()
        .withf(|context| context.component == "test_component")
        .times(1)
        .return_const(());
    set_error_reporter(Arc::new(reporter));

    let error = DictionaryError::Custom("test error".to_string());
    report_error(ErrorContext::new(error, "test_component"));

    set_error_reporter(Arc::new(TracingErrorReporter));
}

/// Test that the tracing error reporter logs the error, component and details.
#[test]
fn test_tracing_error_reporter() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let error = DictionaryError::Custom("test error".to_string());
        TracingErrorReporter.report(
            ErrorContext::new(error, "test_component").with_details("words file: words.txt"),
        );
    });

    let output = logs.contents();
    assert!(output.contains("ERROR"));
    assert!(output.contains("Error reported"));
    assert!(output.contains("test error"));
    assert!(output.contains("test_component"));
    assert!(output.contains("words file: words.txt"));
}
