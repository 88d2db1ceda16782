// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit and property-based tests for the dictionary trie.

mod property_tests;

use super::{Trie, TrieNode};

/// Returns `false` if any non-root node is a childless non-word node, or if
/// a child's edge value disagrees with its key in the parent map.
pub(super) fn is_well_formed(trie: &Trie) -> bool {
    if trie.root().is_end_of_word() {
        return false;
    }

    let mut stack: Vec<(&TrieNode, bool)> = vec![(trie.root(), true)];
    while let Some((node, is_root)) = stack.pop() {
        if !is_root && node.is_leaf() && !node.is_end_of_word() {
            return false;
        }
        for (&c, child) in node.children() {
            if child.value() != c {
                return false;
            }
            stack.push((child, false));
        }
    }

    true
}
