//! Reachability sweep over the 2^26 covered-letter states.
//!
//! The sweep starts at the terminal states (all 26 letters, or 25 letters plus
//! the closer for the missing one) and splits word masks off them breadth-first
//! until the queue runs dry. A state reached this way can be completed into a
//! cover, so the enumerator never walks into a dead end.
//!
//! Splits are taken in non-decreasing catalog order: a state is only scanned from
//! the lowest index that split into it. Every combination of masks is therefore
//! discovered in exactly one order, and the `[min_index, max_index]` window of
//! a state bounds the masks that can follow it on the way up.

use std::time::Instant;

use crate::catalog::{MaskCatalog, FIRST_WORD};
use crate::mask::{LetterMask, LETTERS, WIN};

/// Marks an unreached state.
pub const NO_MATCH: u32 = u32::MAX;

/// One slot per state.
const STATES: usize = 1 << LETTERS;

const PROGRESS_EVERY: usize = 100_000;

/// Bounds for every state, plus the masks that complete a cover on their own
/// from the empty state.
///
/// The two arrays hold the bitwise complement of each index so that a zeroed
/// allocation reads as [`NO_MATCH`]. Pages for states the sweep never touches
/// stay uncommitted.
pub struct ReachabilityIndex {
    min_index: Vec<u32>,
    max_index: Vec<u32>,
    solvable: Vec<u32>,
    reached: usize,
}

impl ReachabilityIndex {
    /// Run the sweep over `catalog`.
    pub fn sweep(catalog: &MaskCatalog) -> Self {
        let t_sweep = Instant::now();
        let masks = catalog.masks();
        let end = catalog.len();

        let mut index = ReachabilityIndex {
            min_index: vec![0; STATES],
            max_index: vec![0; STATES],
            solvable: Vec::new(),
            reached: 0,
        };
        let mut queue: Vec<LetterMask> = Vec::with_capacity(1 << 16);

        index.seed(WIN, FIRST_WORD, end);
        queue.push(WIN);
        for letter in 0..LETTERS {
            let state = WIN ^ (1 << letter);
            index.seed(state, letter, letter);
            queue.push(state);
        }

        let mut head = 0;
        while let Some(&state) = queue.get(head) {
            head += 1;
            if head % PROGRESS_EVERY == 0 {
                log::debug!(
                    "sweep: {head} processed, {} queued, state {state:026b} ({} letters)",
                    queue.len(),
                    state.count_ones()
                );
            }

            let floor = index.min_index(state);
            for si in floor..end {
                let m = masks[si as usize];
                // The tag bit keeps the closers out: no state carries it.
                if m & state != m {
                    continue;
                }
                if m == state {
                    index.solvable.push(si);
                }

                let pos = state ^ m;
                if index.is_reached(pos) {
                    index.widen(pos, si);
                } else {
                    index.seed(pos, si, si);
                    queue.push(pos);
                }
            }
        }

        log::info!(
            "sweep reached {} states ({} solvable seeds) in {:.3}s",
            index.reached,
            index.solvable.len(),
            t_sweep.elapsed().as_secs_f64()
        );
        index
    }

    fn seed(&mut self, state: LetterMask, min: u32, max: u32) {
        self.min_index[state as usize] = !min;
        self.max_index[state as usize] = !max;
        self.reached += 1;
    }

    fn widen(&mut self, state: LetterMask, si: u32) {
        let i = state as usize;
        // Complements order in reverse.
        self.min_index[i] = self.min_index[i].max(!si);
        self.max_index[i] = self.max_index[i].min(!si);
    }

    /// Highest catalog index that split into `state`, or [`NO_MATCH`].
    pub fn max_index(&self, state: LetterMask) -> u32 {
        !self.max_index[(state & WIN) as usize]
    }

    /// Lowest catalog index that split into `state`, or [`NO_MATCH`].
    pub fn min_index(&self, state: LetterMask) -> u32 {
        !self.min_index[(state & WIN) as usize]
    }

    pub fn is_reached(&self, state: LetterMask) -> bool {
        self.max_index(state) != NO_MATCH
    }

    /// Catalog indices whose mask alone takes the empty state to a reached
    /// state. These seed the enumerator.
    pub fn solvable(&self) -> &[u32] {
        &self.solvable
    }

    /// Number of distinct states reached, seeds included.
    pub fn reached(&self) -> usize {
        self.reached
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::encode;

    const COVER: [&str; 5] = ["abcde", "fghij", "klmno", "pqrst", "uvwxy"];

    fn mask_of(words: &[&str]) -> LetterMask {
        words.iter().map(|w| encode(w).unwrap()).fold(0, |acc, m| acc | m)
    }

    #[test]
    fn test_terminals_are_seeded() {
        let catalog = MaskCatalog::build(std::iter::empty::<&str>(), 5).unwrap();
        let index = ReachabilityIndex::sweep(&catalog);

        assert_eq!(index.max_index(WIN), catalog.len());
        for letter in 0..LETTERS {
            let state = WIN ^ (1 << letter);
            assert_eq!(index.min_index(state), letter);
            assert_eq!(index.max_index(state), letter);
        }
        assert_eq!(index.reached(), 27);
    }

    #[test]
    fn test_empty_catalog_never_reaches_the_start() {
        let catalog = MaskCatalog::build(std::iter::empty::<&str>(), 5).unwrap();
        let index = ReachabilityIndex::sweep(&catalog);

        assert!(!index.is_reached(0));
        assert!(index.solvable().is_empty());
        assert_eq!(index.max_index(0), NO_MATCH);
    }

    #[test]
    fn test_chain_states_are_reached() {
        let catalog = MaskCatalog::build(COVER, 5).unwrap();
        let index = ReachabilityIndex::sweep(&catalog);

        for k in 0..=COVER.len() {
            assert!(index.is_reached(mask_of(&COVER[..k])), "prefix of {k} words");
        }
        // 'e' only comes with "abcde", which overlaps; the words left cover
        // 15 of the 20 letters a closed state still needs.
        assert!(!index.is_reached(encode("abcdf").unwrap()));
    }

    #[test]
    fn test_highest_word_is_the_only_seed() {
        let catalog = MaskCatalog::build(COVER, 5).unwrap();
        let index = ReachabilityIndex::sweep(&catalog);

        // Splits climb the catalog, so the last split off is the highest mask.
        assert_eq!(index.solvable(), [FIRST_WORD + 4]);
        assert_eq!(index.min_index(0), FIRST_WORD + 4);
        assert_eq!(index.max_index(0), FIRST_WORD + 4);
    }

    #[test]
    fn test_bounds_are_ordered_for_reached_states() {
        let catalog =
            MaskCatalog::build(["abcde", "fghij", "klmno", "pqrst", "uvwxy", "vwxyz", "edcba"], 5)
                .unwrap();
        let index = ReachabilityIndex::sweep(&catalog);

        let probes = [0, mask_of(&["abcde"]), mask_of(&["abcde", "fghij"]), WIN];
        for state in probes.into_iter().filter(|&s| index.is_reached(s)) {
            assert!(index.min_index(state) <= index.max_index(state));
        }
    }
}
