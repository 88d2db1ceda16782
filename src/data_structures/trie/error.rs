// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the dictionary trie.

/// Errors that can occur when inserting into the trie.
///
/// Lookups never fail: a missing word or prefix is reported as `false`
/// or an empty result.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum TrieError {
    /// The empty string cannot be stored.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// The word has more characters than the trie accepts.
    #[error("Word '{word}' exceeds maximum length of {max_length}")]
    WordTooLong {
        /// The rejected word.
        word: String,
        /// The configured maximum length in characters.
        max_length: usize,
    },
}

/// Result type for trie operations.
pub type TrieResult<T> = Result<T, TrieError>;
