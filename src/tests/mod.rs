//! Test modules for the trie dictionary.
//!
//! This module contains the crate-level test suite:
//! - Configuration loading and validation tests
//! - Error type and reporter tests
//! - Trie scenario tests built on the word list loader
//! - Shared fixtures and proptest strategies

pub mod dictionary_tests;
pub mod error_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_list_strategy, CapturedLogs, TestFixture};
