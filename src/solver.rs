//! The full search: catalog, sweep, enumeration, canonical chains.

use std::time::Instant;

use crate::canonical::canonicalize;
use crate::catalog::MaskCatalog;
use crate::enumerate::{enumerate, Chain};
use crate::errors::CoverError;
use crate::expand::SpellingExpander;
use crate::mask::LetterMask;
use crate::reach::ReachabilityIndex;

/// Result of [`solve`].
#[derive(Debug)]
pub struct Solution {
    pub catalog: MaskCatalog,
    /// Canonical chains, each a distinct set of masks.
    pub chains: Vec<Chain>,
    /// States reached by the sweep.
    pub reached: usize,
    /// Masks that start at least one cover from the empty state.
    pub seeds: Vec<LetterMask>,
    /// Terminal states visited by the enumerator.
    pub terminals: u64,
}

impl Solution {
    pub fn expander(&self) -> SpellingExpander<'_> {
        SpellingExpander::new(self.catalog.spellings())
    }

    /// Every solution line, closer last.
    pub fn lines(&self) -> Vec<String> {
        let expander = self.expander();
        self.chains.iter().flat_map(|c| expander.lines(c)).collect()
    }

    /// Number of lines [`lines`](Self::lines) would produce.
    pub fn line_count(&self) -> usize {
        let expander = self.expander();
        self.chains.iter().map(|c| expander.count(c)).sum()
    }
}

/// Find every cover that the words of length `word_len` can make.
///
/// # Errors
///
/// [`CoverError::UnsupportedWordLength`] when `word_len` is outside `2..=26`.
pub fn solve<I, S>(words: I, word_len: usize) -> Result<Solution, CoverError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let catalog = MaskCatalog::build(words, word_len)?;
    log::info!(
        "catalog: {} distinct {}-letter word masks ({} words skipped)",
        catalog.word_masks(),
        catalog.word_len(),
        catalog.skipped()
    );

    let index = ReachabilityIndex::sweep(&catalog);

    let t_enum = Instant::now();
    let enumeration = enumerate(&catalog, &index);
    let found = enumeration.chains.len();
    let chains = canonicalize(enumeration.chains);
    log::info!(
        "enumerated {found} chains ({} distinct, {} terminals) in {:.3}s",
        chains.len(),
        enumeration.terminals,
        t_enum.elapsed().as_secs_f64()
    );

    Ok(Solution {
        reached: index.reached(),
        seeds: index.solvable().iter().map(|&i| catalog.mask(i)).collect(),
        terminals: enumeration.terminals,
        chains,
        catalog,
    })
}
