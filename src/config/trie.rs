//! Trie configuration module.
//!
//! The trie section of the configuration file deserializes straight into
//! [`TrieConfig`]; this module adds its validation rules.

use super::{ConfigResult, Validate};
use crate::data_structures::trie::TrieConfig;
use crate::error::config::ConfigError;

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_length == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_word_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
