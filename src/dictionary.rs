//! `dictionary` — the word source.
//!
//! Reads a plain word list (one word per line), normalizes it and keeps only the
//! words of the requested length. Letter validation is left to the catalog.

use std::path::Path;

use itertools::Itertools;

use crate::errors::CoverError;

/// Lowercased, deduplicated, sorted words of one length.
#[derive(Debug, Clone)]
pub struct Dictionary {
    pub words: Vec<String>,
}

impl Dictionary {
    /// Parse an in-memory word list.
    ///
    /// Lines are trimmed and lowercased; blank lines and words of any other
    /// length are dropped.
    pub fn parse_from_str(contents: &str, word_len: usize) -> Dictionary {
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty() && w.chars().count() == word_len)
            .map(str::to_lowercase)
            .sorted()
            .dedup()
            .collect_vec();
        Dictionary { words }
    }

    /// Read a word list from disk and parse it.
    ///
    /// # Errors
    ///
    /// [`CoverError::Dictionary`] if the file cannot be read.
    pub fn load_from_path<P: AsRef<Path>>(path: P, word_len: usize) -> Result<Dictionary, CoverError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| CoverError::Dictionary {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::parse_from_str(&data, word_len);
        log::info!(
            "loaded {} words of length {word_len} from {}",
            dictionary.words.len(),
            path.display()
        );
        Ok(dictionary)
    }
}
