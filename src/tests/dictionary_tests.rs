//! Tests for building tries from word lists.

use super::{word_list_strategy, TestFixture};
use crate::data_structures::trie::TrieConfig;
use crate::dictionary::{load_words, load_words_file, LoadReport};
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::io::Cursor;

/// Test loading a word list from a file on disk.
#[test]
fn test_load_words_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("words.txt", "cat\ncatalog\r\ncatalogue\n\n  dog\n")
        .unwrap();

    let (mut trie, report) = load_words_file(&path, TrieConfig::default()).unwrap();
    assert_eq!(
        report,
        LoadReport {
            inserted: 4,
            duplicates: 0,
            rejected: 0,
        }
    );

    assert_eq!(trie.auto_suggest("cat"), vec!["cat", "catalog", "catalogue"]);
    assert!(trie.delete("cat"));
    assert!(trie.search("catalog"));
    assert_eq!(trie.spelling_suggestions("catalg"), vec!["catalog"]);
    assert_eq!(trie.spelling_suggestions("catalogu"), vec!["catalog", "catalogue"]);
}

proptest! {
    // Property: loading a list yields exactly its distinct words, in order
    #[test]
    fn prop_load_matches_distinct_words(words in word_list_strategy()) {
        let input = words.join("\n");
        let (trie, report) = load_words(Cursor::new(input), TrieConfig::default()).unwrap();

        let distinct: BTreeSet<String> = words.iter().cloned().collect();
        prop_assert_eq!(report.inserted, distinct.len());
        prop_assert_eq!(report.duplicates, words.len() - distinct.len());
        prop_assert_eq!(trie.get_all_words(), distinct.into_iter().collect::<Vec<_>>());
    }

    // Property: deleting every loaded word leaves an empty trie
    #[test]
    fn prop_delete_all_empties_trie(words in word_list_strategy()) {
        let (mut trie, _) = load_words(Cursor::new(words.join("\n")), TrieConfig::default()).unwrap();

        for word in trie.get_all_words() {
            prop_assert!(trie.delete(&word));
        }
        prop_assert!(trie.is_empty());
        prop_assert!(trie.get_all_words().is_empty());
    }
}
