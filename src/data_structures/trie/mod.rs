// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dictionary Trie Implementation
//!
//! A prefix tree storing a set of words with exact lookup, prefix
//! autocomplete, deletion with structural pruning, full enumeration and
//! "did you mean" spelling suggestions.
//!
//! # Example
//!
//! ```
//! use trie_dictionary_lib::data_structures::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("catastrophe").unwrap();
//! trie.insert("catatonic").unwrap();
//! trie.insert("caterpillar").unwrap();
//!
//! assert!(trie.search("catatonic"));
//! assert!(!trie.search("cat"));
//! assert_eq!(trie.auto_suggest("cata"), vec!["catastrophe", "catatonic"]);
//! assert_eq!(trie.spelling_suggestions("caterpilar"), vec!["caterpillar"]);
//! ```
//!
//! # Ordering
//!
//! Children are kept in ascending character order, so every enumeration
//! returns words sorted by character code.

mod config;
mod distance;
mod error;
mod node;
mod printer;

#[cfg(test)]
mod tests;

use tracing::trace;

pub use config::{TrieConfig, DEFAULT_MAX_WORD_LENGTH};
pub use distance::levenshtein_distance;
pub use error::{TrieError, TrieResult};
pub use node::{TrieNode, ROOT_VALUE};
pub use printer::TreePrinter;

/// Maximum edit distance for a stored word to count as a spelling suggestion.
pub const SPELLING_MAX_DISTANCE: usize = 2;

/// A prefix tree holding a set of words.
///
/// Mutations take `&mut self` and queries take `&self`, so callers that
/// need shared access wrap the trie in their own lock.
#[derive(Debug, Clone)]
pub struct Trie {
    /// The root node of the trie. Never marked end-of-word.
    root: TrieNode,

    /// Configuration options
    config: TrieConfig,
}

impl Trie {
    /// Creates a new empty `Trie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new empty `Trie` with the specified configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            root: TrieNode::root(),
            config,
        }
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Returns the root node for read-only traversal.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Inserts a word into the trie.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The word was newly added.
    /// * `Ok(false)` - The word was already present; nothing changed.
    /// * `Err(TrieError)` - The word is empty or longer than `max_word_length`.
    pub fn insert<W>(&mut self, word: W) -> TrieResult<bool>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            return Err(TrieError::EmptyWord);
        }

        let max_length = self.config.max_word_length;
        if word.chars().count() > max_length {
            return Err(TrieError::WordTooLong {
                word: word.to_string(),
                max_length,
            });
        }

        let mut current = &mut self.root;
        for c in word.chars() {
            current = current
                .children_mut()
                .entry(c)
                .or_insert_with(|| TrieNode::new(c));
        }

        if current.is_end_of_word() {
            trace!(word, "word already present");
            return Ok(false);
        }

        current.set_end_of_word(true);
        trace!(word, "word inserted");
        Ok(true)
    }

    /// Returns `true` if `word` was inserted and not deleted since.
    ///
    /// A word stored only as a prefix of a longer word is not a member.
    pub fn search<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            return false;
        }

        self.find_node(word)
            .map_or(false, TrieNode::is_end_of_word)
    }

    /// Removes a word from the trie, pruning nodes that no longer lead to
    /// any stored word.
    ///
    /// Pruning walks back from the end of the word and stops at the first
    /// node that is still needed: one that ends another word, has other
    /// children, or is the root.
    ///
    /// # Returns
    ///
    /// `true` if the word was present and has been removed, `false` otherwise.
    pub fn delete<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() {
            return false;
        }

        // Depth of the deepest node on the path that must survive.
        let mut keep_depth = 0;
        let mut node = &self.root;
        for (depth, &c) in chars.iter().enumerate() {
            if depth > 0 && (node.is_end_of_word() || node.children().len() > 1) {
                keep_depth = depth;
            }
            match node.child(c) {
                Some(next) => node = next,
                None => return false,
            }
        }

        if !node.is_end_of_word() {
            return false;
        }

        if node.is_leaf() {
            if let Some(keeper) = descend_mut(&mut self.root, &chars[..keep_depth]) {
                keeper.children_mut().remove(&chars[keep_depth]);
            }
            trace!(word, pruned = chars.len() - keep_depth, "word deleted");
        } else if let Some(end) = descend_mut(&mut self.root, &chars) {
            end.set_end_of_word(false);
            trace!(word, pruned = 0, "word deleted");
        }

        true
    }

    /// Returns every stored word that starts with `prefix`.
    ///
    /// An unknown prefix yields an empty vector. Words are returned in
    /// ascending character order.
    pub fn auto_suggest<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        match self.find_node(prefix) {
            Some(node) => collect_words(node, prefix.to_string()),
            None => Vec::new(),
        }
    }

    /// Returns every stored word in ascending character order.
    pub fn get_all_words(&self) -> Vec<String> {
        self.auto_suggest("")
    }

    /// Returns stored words within edit distance [`SPELLING_MAX_DISTANCE`]
    /// of `word`.
    ///
    /// Only words sharing the first character of `word` are considered.
    /// If `word` is empty or no stored word starts with its first character
    /// the result is empty.
    pub fn spelling_suggestions<W>(&self, word: W) -> Vec<String>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        let Some(first) = word.chars().next() else {
            return Vec::new();
        };
        let Some(start) = self.root.child(first) else {
            trace!(word, "no stored words share the first character");
            return Vec::new();
        };

        let suggestions: Vec<String> = collect_words(start, first.to_string())
            .into_iter()
            .filter(|candidate| levenshtein_distance(word, candidate) <= SPELLING_MAX_DISTANCE)
            .collect();

        trace!(word, count = suggestions.len(), "spelling suggestions computed");
        suggestions
    }

    /// Returns the number of words in the trie.
    ///
    /// This walks the whole trie, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if node.is_end_of_word() {
                count += 1;
            }
            stack.extend(node.children().values());
        }
        count
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Removes every word from the trie.
    pub fn clear(&mut self) {
        self.root = TrieNode::root();
    }

    /// Renders the node structure as an indented tree.
    pub fn render_tree(&self) -> String {
        printer::render(self)
    }

    fn find_node(&self, path: &str) -> Option<&TrieNode> {
        path.chars().try_fold(&self.root, |node, c| node.child(c))
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

fn descend_mut<'a>(node: &'a mut TrieNode, path: &[char]) -> Option<&'a mut TrieNode> {
    path.iter().try_fold(node, |node, &c| node.child_mut(c))
}

/// Collects every word at or below `node`, each spelled as `prefix` followed
/// by the edges walked. Uses an explicit stack so depth is not limited by the
/// call stack.
fn collect_words(node: &TrieNode, prefix: String) -> Vec<String> {
    let mut words = Vec::new();
    let mut stack = vec![(node, prefix)];

    while let Some((node, word)) = stack.pop() {
        if node.is_end_of_word() {
            words.push(word.clone());
        }
        // Reverse so the smallest child is popped first.
        for (&c, child) in node.children().iter().rev() {
            let mut next = word.clone();
            next.push(c);
            stack.push((child, next));
        }
    }

    words
}
