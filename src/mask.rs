//! Letter-presence bitmasks.
//!
//! A [`LetterMask`] stores one bit per alphabet letter in bits 0..25. Bit 26 is
//! reserved for the synthetic single-letter catalog entries so they can never be
//! mistaken for (or unioned into) a covered-letter state.

/// One bit per letter, plus [`SYNTHETIC_TAG`] on single-letter closers.
pub type LetterMask = u32;

/// Number of letters in the alphabet.
pub const LETTERS: u32 = 26;

/// Every letter covered.
pub const WIN: LetterMask = (1 << LETTERS) - 1;

/// Marks the synthetic single-letter entries.
pub const SYNTHETIC_TAG: LetterMask = 1 << LETTERS;

/// Encode a word into its letter mask.
///
/// Returns `None` when the word is empty, contains anything other than ASCII
/// letters, or repeats a letter. Such a word can never be part of a disjoint
/// cover.
pub fn encode(word: &str) -> Option<LetterMask> {
    let mut mask: LetterMask = 0;
    let mut len = 0;
    for c in word.bytes() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        mask |= 1 << (c.to_ascii_lowercase() - b'a');
        len += 1;
    }
    (len > 0 && mask.count_ones() == len).then_some(mask)
}

/// The tagged catalog mask closing the gap at `letter` (0 = 'a').
pub const fn synthetic(letter: u32) -> LetterMask {
    (1 << letter) | SYNTHETIC_TAG
}

/// True for the synthetic single-letter entries.
pub const fn is_synthetic(mask: LetterMask) -> bool {
    mask & SYNTHETIC_TAG != 0
}

/// Number of covered letters, ignoring the tag bit.
pub const fn letter_count(mask: LetterMask) -> u32 {
    (mask & WIN).count_ones()
}
