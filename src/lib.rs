//! Trie Dictionary Library
//!
//! A word dictionary backed by a prefix tree, with exact lookup, prefix
//! autocomplete, deletion, full enumeration and edit-distance spelling
//! suggestions. The library is used by the `trie_dictionary` binary but
//! can also be used as a dependency by other projects.
//!
//! # Architecture
//!
//! - [`data_structures::trie`] holds the core trie, its edit distance
//!   helper and its tree printer. It performs no I/O.
//! - [`dictionary`] builds a trie from a word list.
//! - [`config`] and [`error`] provide layered configuration and the error
//!   types shared by the library and the binary.

pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the trie dictionary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
