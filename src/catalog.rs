//! The mask catalog: every distinct letter set the search may use.
//!
//! Indices 0..25 hold the synthetic single-letter closers in letter order; the
//! real word masks follow in ascending numeric order. A catalog index is the
//! identity used by the reachability sweep and the enumerator.

use std::collections::HashMap;

use itertools::Itertools;

use crate::errors::CoverError;
use crate::mask::{self, LetterMask, LETTERS};

/// Index of the first real word mask.
pub const FIRST_WORD: u32 = LETTERS;

/// Shortest and longest word lengths the search supports.
pub const MIN_WORD_LEN: usize = 2;
pub const MAX_WORD_LEN: usize = LETTERS as usize;

/// Every spelling (word or single letter) that produced a mask.
pub type Spellings = HashMap<LetterMask, Vec<String>>;

#[derive(Debug, Clone)]
pub struct MaskCatalog {
    masks: Vec<LetterMask>,
    spellings: Spellings,
    word_len: usize,
    skipped: usize,
}

impl MaskCatalog {
    /// Build the catalog from candidate words of length `word_len`.
    ///
    /// Words of another length, or whose letters are not all distinct, are
    /// skipped. An empty input leaves only the synthetic entries.
    ///
    /// # Errors
    ///
    /// [`CoverError::UnsupportedWordLength`] when `word_len` is outside
    /// `2..=26`. A one-letter word would collide with the closers.
    pub fn build<I, S>(words: I, word_len: usize) -> Result<Self, CoverError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word_len) {
            return Err(CoverError::UnsupportedWordLength { length: word_len });
        }

        let mut skipped = 0;
        let mut spellings = words
            .into_iter()
            .filter_map(|w| {
                let w = w.as_ref().trim();
                match mask::encode(w).filter(|_| w.len() == word_len) {
                    Some(m) => Some((m, w.to_lowercase())),
                    None => {
                        log::debug!("skipping {w:?}");
                        skipped += 1;
                        None
                    }
                }
            })
            .into_group_map();

        let words = spellings.keys().copied().sorted().collect_vec();
        let masks = (0..LETTERS).map(mask::synthetic).chain(words).collect_vec();

        for spelled in spellings.values_mut() {
            spelled.sort();
            spelled.dedup();
        }
        for letter in 0..LETTERS {
            let c = char::from(b'a' + letter as u8);
            spellings.insert(mask::synthetic(letter), vec![c.to_string()]);
        }

        Ok(MaskCatalog {
            masks,
            spellings,
            word_len,
            skipped,
        })
    }

    /// All masks, indexed by catalog index.
    pub fn masks(&self) -> &[LetterMask] {
        &self.masks
    }

    pub fn mask(&self, index: u32) -> LetterMask {
        self.masks[index as usize]
    }

    /// Number of entries, synthetic ones included. Doubles as the
    /// past-the-end marker.
    pub fn len(&self) -> u32 {
        self.masks.len() as u32
    }

    /// True when no real word survived validation.
    pub fn is_empty(&self) -> bool {
        self.len() == FIRST_WORD
    }

    /// Number of distinct real word masks.
    pub fn word_masks(&self) -> usize {
        self.masks.len() - FIRST_WORD as usize
    }

    pub fn word_len(&self) -> usize {
        self.word_len
    }

    /// Candidates rejected while building.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn spellings(&self) -> &Spellings {
        &self.spellings
    }

    /// Spellings of one mask, empty if the mask is not in the catalog.
    pub fn spellings_of(&self, mask: LetterMask) -> &[String] {
        self.spellings.get(&mask).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::encode;

    #[test]
    fn test_synthetic_entries_come_first() {
        let catalog = MaskCatalog::build(["fjord", "abcde"], 5).unwrap();

        assert_eq!(catalog.len(), 28);
        for letter in 0..LETTERS {
            assert_eq!(catalog.mask(letter), mask::synthetic(letter));
        }
        assert_eq!(catalog.mask(FIRST_WORD), encode("abcde").unwrap());
        assert_eq!(catalog.mask(FIRST_WORD + 1), encode("fjord").unwrap());
    }

    #[test]
    fn test_word_masks_are_sorted_and_deduplicated() {
        let catalog = MaskCatalog::build(["vwxyz", "edcba", "abcde", "klmno"], 5).unwrap();

        let words = &catalog.masks()[FIRST_WORD as usize..];
        assert_eq!(words.len(), 3);
        assert!(words.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_anagrams_share_one_entry_and_keep_every_spelling() {
        let catalog = MaskCatalog::build(["edcba", "abcde", "ABCDE", "bacde"], 5).unwrap();

        assert_eq!(catalog.word_masks(), 1);
        assert_eq!(
            catalog.spellings_of(encode("abcde").unwrap()),
            ["abcde", "bacde", "edcba"]
        );
    }

    #[test]
    fn test_single_letters_are_spelled() {
        let catalog = MaskCatalog::build(Vec::<String>::new(), 5).unwrap();

        assert_eq!(catalog.spellings_of(mask::synthetic(0)), ["a"]);
        assert_eq!(catalog.spellings_of(mask::synthetic(25)), ["z"]);
    }

    #[test]
    fn test_invalid_words_are_skipped() {
        let catalog = MaskCatalog::build(["fluff", "abc", "ab1de", "", "fjord"], 5).unwrap();

        assert_eq!(catalog.word_masks(), 1);
        assert_eq!(catalog.skipped(), 4);
        assert_eq!(catalog.word_len(), 5);
    }

    #[test]
    fn test_empty_input_leaves_only_synthetic_entries() {
        let catalog = MaskCatalog::build(std::iter::empty::<&str>(), 5).unwrap();

        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), LETTERS);
        assert_eq!(catalog.spellings().len(), LETTERS as usize);
    }

    #[test]
    fn test_rejects_unsupported_word_length() {
        assert!(matches!(
            MaskCatalog::build(["a"], 1),
            Err(CoverError::UnsupportedWordLength { length: 1 })
        ));
        assert!(MaskCatalog::build(["ab"], 27).is_err());
    }
}
