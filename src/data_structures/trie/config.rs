// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the dictionary trie.

use serde::{Deserialize, Serialize};

/// Default upper bound on stored word length, in characters.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 256;

/// Configuration options for a [`Trie`](super::Trie).
///
/// The trie depth equals the longest stored word, so `max_word_length`
/// also bounds the depth of every walk and of node teardown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieConfig {
    /// Maximum number of characters accepted by insert
    pub max_word_length: usize,
}

impl TrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - max_word_length: 256
    pub fn new() -> Self {
        Self {
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
        }
    }

    /// Set the maximum accepted word length in characters.
    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        self.max_word_length = max_word_length;
        self
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
