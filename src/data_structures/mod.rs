//! Data structures for the trie dictionary.
//!
//! All implementations are safe Rust and single-threaded; callers that
//! share them across threads provide their own locking.

pub mod trie;

// Re-export common data structures
pub use trie::{Trie, TrieConfig, TrieError, TrieResult};
