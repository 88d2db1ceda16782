// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the dictionary trie.
//!
//! Each node owns its children outright, so the whole trie is a plain
//! ownership tree with no shared pointers and no cycles. Dropping and
//! cloning walk the tree with an explicit stack, so a single long word
//! cannot exhaust the call stack.

use std::collections::{btree_map, BTreeMap};
use std::fmt;
use std::mem;

/// Edge value used by the root node. It has no meaning for lookups.
pub const ROOT_VALUE: char = ' ';

/// A node in the dictionary trie.
///
/// Each node represents one character of a word path. Children are kept in
/// ascending character order so enumeration and printing are reproducible.
pub struct TrieNode {
    /// The edge character leading into this node
    value: char,

    /// Map of characters to child nodes
    children: BTreeMap<char, TrieNode>,

    /// Whether some stored word terminates at this node
    is_end_of_word: bool,
}

impl TrieNode {
    /// Creates a new node reached through the edge `value`.
    pub fn new(value: char) -> Self {
        Self {
            value,
            children: BTreeMap::new(),
            is_end_of_word: false,
        }
    }

    /// Creates a root node.
    pub fn root() -> Self {
        Self::new(ROOT_VALUE)
    }

    /// Returns the edge character leading into this node.
    pub fn value(&self) -> char {
        self.value
    }

    /// Returns `true` if this node has an outgoing edge for `c`.
    pub fn has_child(&self, c: char) -> bool {
        self.children.contains_key(&c)
    }

    /// Returns the child reached through `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    pub(crate) fn child_mut(&mut self, c: char) -> Option<&mut TrieNode> {
        self.children.get_mut(&c)
    }

    /// Returns the children of this node in ascending character order.
    pub fn children(&self) -> &BTreeMap<char, TrieNode> {
        &self.children
    }

    /// Returns mutable access to the children map.
    pub fn children_mut(&mut self) -> &mut BTreeMap<char, TrieNode> {
        &mut self.children
    }

    /// Whether a stored word ends at this node.
    pub fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    /// Marks or unmarks this node as the end of a word.
    pub fn set_end_of_word(&mut self, is_end_of_word: bool) {
        self.is_end_of_word = is_end_of_word;
    }

    /// Whether this node has no outgoing edges.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Copies this node without its children.
    fn detached(&self) -> Self {
        Self {
            value: self.value,
            children: BTreeMap::new(),
            is_end_of_word: self.is_end_of_word,
        }
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::root()
    }
}

impl Clone for TrieNode {
    fn clone(&self) -> Self {
        let mut copy = self.detached();
        // Copies still being filled, each with the source children left to visit.
        let mut stack: Vec<(TrieNode, btree_map::Iter<'_, char, TrieNode>)> = Vec::new();
        let mut children = self.children.iter();

        loop {
            if let Some((_, child)) = children.next() {
                stack.push((mem::replace(&mut copy, child.detached()), children));
                children = child.children.iter();
                continue;
            }

            match stack.pop() {
                Some((mut parent, parent_children)) => {
                    let finished = mem::replace(&mut copy, TrieNode::root());
                    parent.children.insert(finished.value, finished);
                    copy = parent;
                    children = parent_children;
                }
                None => return copy,
            }
        }
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(mem::take(&mut node.children).into_values());
        }
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("value", &self.value)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .field("is_end_of_word", &self.is_end_of_word)
            .finish()
    }
}
