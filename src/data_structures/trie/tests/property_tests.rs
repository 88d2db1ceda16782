// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the dictionary trie.

use proptest::prelude::*;
use std::collections::BTreeSet;

use super::is_well_formed;
use crate::data_structures::trie::{levenshtein_distance, Trie, SPELLING_MAX_DISTANCE};

// Small alphabet so generated words share prefixes often
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{1,6}").unwrap()
}

#[derive(Debug, Clone)]
enum Op {
    Insert(String),
    Delete(String),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        word_strategy().prop_map(Op::Insert),
        word_strategy().prop_map(Op::Delete),
    ]
}

proptest! {
    // Property: an inserted word is found, and is gone after deletion
    #[test]
    fn prop_insert_search_delete(word in word_strategy()) {
        let mut trie = Trie::new();
        prop_assert!(trie.insert(&word).unwrap());
        prop_assert!(trie.search(&word));
        prop_assert!(trie.delete(&word));
        prop_assert!(!trie.search(&word));
        prop_assert!(trie.is_empty());
    }

    // Property: the trie behaves like a sorted set under any operation sequence
    #[test]
    fn prop_matches_set_model(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut trie = Trie::new();
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(word) => {
                    let expected = model.insert(word.clone());
                    prop_assert_eq!(trie.insert(&word).unwrap(), expected);
                }
                Op::Delete(word) => {
                    let expected = model.remove(&word);
                    prop_assert_eq!(trie.delete(&word), expected);
                }
            }
            prop_assert!(is_well_formed(&trie));
        }

        let expected: Vec<String> = model.iter().cloned().collect();
        prop_assert_eq!(trie.get_all_words(), expected);
        prop_assert_eq!(trie.len(), model.len());
    }

    // Property: auto-suggest returns exactly the stored words with the prefix
    #[test]
    fn prop_auto_suggest_filters_by_prefix(
        words in prop::collection::btree_set(word_strategy(), 0..32),
        prefix in prop::string::string_regex("[abc]{0,3}").unwrap(),
    ) {
        let mut trie = Trie::new();
        for word in &words {
            trie.insert(word).unwrap();
        }

        let expected: Vec<String> = words
            .iter()
            .filter(|w| w.starts_with(prefix.as_str()))
            .cloned()
            .collect();
        prop_assert_eq!(trie.auto_suggest(&prefix), expected);
    }

    // Property: suggestions are the same-first-char words within the threshold
    #[test]
    fn prop_spelling_suggestions_match_brute_force(
        words in prop::collection::btree_set(word_strategy(), 0..32),
        query in word_strategy(),
    ) {
        let mut trie = Trie::new();
        for word in &words {
            trie.insert(word).unwrap();
        }

        let first = query.chars().next().unwrap();
        let expected: Vec<String> = words
            .iter()
            .filter(|w| w.starts_with(first))
            .filter(|w| levenshtein_distance(&query, w) <= SPELLING_MAX_DISTANCE)
            .cloned()
            .collect();
        prop_assert_eq!(trie.spelling_suggestions(&query), expected);
    }

    // Property: distance is zero only for equal strings and bounded by the longer length
    #[test]
    fn prop_levenshtein_bounds(a in "[a-d]{0,8}", b in "[a-d]{0,8}") {
        let distance = levenshtein_distance(&a, &b);
        prop_assert_eq!(distance == 0, a == b);
        prop_assert!(distance <= a.len().max(b.len()));
        prop_assert!(distance >= a.len().abs_diff(b.len()));
    }
}
