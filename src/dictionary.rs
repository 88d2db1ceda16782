//! Word list loading.
//!
//! A word list is plain text with one word per line. Surrounding whitespace
//! is trimmed and blank lines are skipped. Words the trie rejects are logged
//! and skipped rather than aborting the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::data_structures::trie::{Trie, TrieConfig};
use crate::error::DictionaryResult;

/// Counts collected while loading a word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Words newly added to the trie
    pub inserted: usize,

    /// Words that were already present
    pub duplicates: usize,

    /// Words the trie refused (too long)
    pub rejected: usize,
}

/// Builds a trie from a word list read from `reader`.
///
/// # Errors
///
/// Returns an IO error if the reader fails. Rejected words are counted in
/// the report, not returned as errors.
pub fn load_words<R: BufRead>(reader: R, config: TrieConfig) -> DictionaryResult<(Trie, LoadReport)> {
    let mut trie = Trie::with_config(config);
    let mut report = LoadReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        match trie.insert(word) {
            Ok(true) => report.inserted += 1,
            Ok(false) => report.duplicates += 1,
            Err(e) => {
                warn!(line = index + 1, error = %e, "skipping word");
                report.rejected += 1;
            }
        }
    }

    debug!(
        inserted = report.inserted,
        duplicates = report.duplicates,
        rejected = report.rejected,
        "word list loaded"
    );
    Ok((trie, report))
}

/// Builds a trie from the word list file at `path`.
pub fn load_words_file<P: AsRef<Path>>(
    path: P,
    config: TrieConfig,
) -> DictionaryResult<(Trie, LoadReport)> {
    let file = File::open(path.as_ref())?;
    load_words(BufReader::new(file), config)
}
