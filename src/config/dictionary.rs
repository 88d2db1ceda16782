//! Dictionary source configuration module.
//!
//! Describes where the command-line front end loads its word list from.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Word list configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Word list to load at startup, one word per line (None for an empty trie)
    pub words_file: Option<PathBuf>,
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.words_file {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "dictionary.words_file cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
