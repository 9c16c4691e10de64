//! Error types for the cover search and its I/O edges.
//!
//! # Error Codes
//!
//! - C001: `UnsupportedWordLength` (word length outside 2..=26)
//! - C002: `Dictionary` (dictionary file could not be read)
//! - C003: `Output` (solution sink failed)
//!
//! Words that fail validation are not errors: they are skipped while the
//! catalog is built. An empty catalog simply yields no solutions.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CoverError {
    #[error("unsupported word length {length} (expected 2..=26)")]
    UnsupportedWordLength { length: usize },

    #[error("failed to read dictionary '{}': {source}", .path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write solutions: {0}")]
    Output(#[from] io::Error),
}

impl CoverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            CoverError::UnsupportedWordLength { .. } => "C001",
            CoverError::Dictionary { .. } => "C002",
            CoverError::Output(_) => "C003",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            CoverError::UnsupportedWordLength { .. } => {
                Some("Single letters are reserved for closing the last gap; use --length 2 or more.")
            }
            CoverError::Dictionary { .. } => {
                Some("Pass the path of a plain-text word list with one word per line.")
            }
            CoverError::Output(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self.help() {
            Some(help) => format!("{} ({})\n  help: {help}", self, self.code()),
            None => format!("{} ({})", self, self.code()),
        }
    }
}
