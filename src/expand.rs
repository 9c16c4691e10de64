//! Turn canonical chains back into words.

use std::io::Write;

use itertools::Itertools;

use crate::catalog::Spellings;
use crate::enumerate::Chain;
use crate::errors::CoverError;

pub struct SpellingExpander<'a> {
    spellings: &'a Spellings,
}

impl<'a> SpellingExpander<'a> {
    pub fn new(spellings: &'a Spellings) -> Self {
        SpellingExpander { spellings }
    }

    /// Every spelling of one canonical chain: the Cartesian product of the
    /// anagram classes of its masks.
    ///
    /// Words are listed from the lowest mask to the highest, so a single-letter
    /// closer is always last.
    pub fn lines(&self, chain: &Chain) -> impl Iterator<Item = String> + 'a {
        let spellings = self.spellings;
        chain
            .iter()
            .rev()
            .map(move |mask| spellings.get(mask).map_or(&[][..], Vec::as_slice).iter())
            .collect_vec()
            .into_iter()
            .multi_cartesian_product()
            .map(|words| words.into_iter().join(" "))
    }

    /// Number of lines [`lines`](Self::lines) yields for `chain`.
    pub fn count(&self, chain: &Chain) -> usize {
        chain
            .iter()
            .map(|mask| self.spellings.get(mask).map_or(0, Vec::len))
            .product()
    }

    /// Write every line of every chain to `sink`, one per line.
    ///
    /// # Errors
    ///
    /// [`CoverError::Output`] if the sink fails.
    pub fn write_all<W: Write>(&self, chains: &[Chain], sink: &mut W) -> Result<usize, CoverError> {
        let mut written = 0;
        for chain in chains {
            for line in self.lines(chain) {
                writeln!(sink, "{line}")?;
                written += 1;
            }
        }
        sink.flush()?;
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MaskCatalog;
    use crate::mask::{encode, synthetic};

    fn canonical(words: &[&str], closer: Option<u32>) -> Chain {
        let mut chain: Chain = words.iter().map(|w| encode(w).unwrap()).collect();
        chain.extend(closer.map(synthetic));
        chain.sort_unstable_by(|a, b| b.cmp(a));
        chain
    }

    #[test]
    fn test_closer_comes_last() {
        let catalog = MaskCatalog::build(["abcde", "fghij", "klmno", "pqrst", "uvwxy"], 5).unwrap();
        let expander = SpellingExpander::new(catalog.spellings());
        let chain = canonical(&["pqrst", "abcde", "uvwxy", "fghij", "klmno"], Some(25));

        let lines: Vec<_> = expander.lines(&chain).collect();
        assert_eq!(lines, ["abcde fghij klmno pqrst uvwxy z"]);
    }

    #[test]
    fn test_every_anagram_is_expanded() {
        let catalog = MaskCatalog::build(["abcde", "bacde", "fghij", "ghijf", "jihgf"], 5).unwrap();
        let expander = SpellingExpander::new(catalog.spellings());
        let chain = canonical(&["abcde", "fghij"], None);

        let lines: Vec<_> = expander.lines(&chain).sorted().collect();
        assert_eq!(expander.count(&chain), 6);
        assert_eq!(
            lines,
            [
                "abcde fghij",
                "abcde ghijf",
                "abcde jihgf",
                "bacde fghij",
                "bacde ghijf",
                "bacde jihgf",
            ]
        );
    }

    #[test]
    fn test_write_all_terminates_each_line() {
        let catalog = MaskCatalog::build(["abcde", "edcba"], 5).unwrap();
        let expander = SpellingExpander::new(catalog.spellings());
        let chains = vec![canonical(&["abcde"], Some(25))];

        let mut out = Vec::new();
        let written = expander.write_all(&chains, &mut out).unwrap();
        assert_eq!(written, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "abcde z\nedcba z\n");
    }
}
