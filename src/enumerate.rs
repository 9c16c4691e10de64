//! Backtracking over the reachability index.
//!
//! Each seed from the sweep is walked upward from the empty state with an
//! explicit stack. At a state only the window `[min_index, max_index]` is
//! tried, and only indices below the one taken on the previous step, so each
//! combination is rebuilt in the same descending order the sweep found it.

use rayon::prelude::*;

use crate::catalog::MaskCatalog;
use crate::mask::{letter_count, LetterMask, LETTERS};
use crate::reach::ReachabilityIndex;

/// Masks of one cover, in the order they were taken.
pub type Chain = Vec<LetterMask>;

/// Output of [`enumerate`].
#[derive(Debug, Clone, Default)]
pub struct Enumeration {
    pub chains: Vec<Chain>,
    /// Terminal states visited, one per chain.
    pub terminals: u64,
}

struct Frame {
    state: LetterMask,
    next: u32,
    last: u32,
}

struct Walker<'a> {
    catalog: &'a MaskCatalog,
    index: &'a ReachabilityIndex,
    path: Chain,
    stack: Vec<Frame>,
    found: Vec<Chain>,
    terminals: u64,
}

/// Rebuild every chain of disjoint masks from the empty state to a terminal.
///
/// Seeds are walked in parallel; chains come back grouped by seed, in seed
/// order, whatever the thread count.
pub fn enumerate(catalog: &MaskCatalog, index: &ReachabilityIndex) -> Enumeration {
    index
        .solvable()
        .par_iter()
        .map(|&seed| Walker::new(catalog, index).walk(seed))
        .collect::<Vec<_>>()
        .into_iter()
        .fold(Enumeration::default(), |mut acc, e| {
            acc.chains.extend(e.chains);
            acc.terminals += e.terminals;
            acc
        })
}

impl<'a> Walker<'a> {
    fn new(catalog: &'a MaskCatalog, index: &'a ReachabilityIndex) -> Self {
        Walker {
            catalog,
            index,
            path: Vec::new(),
            stack: Vec::new(),
            found: Vec::new(),
            terminals: 0,
        }
    }

    fn walk(mut self, seed: u32) -> Enumeration {
        let mask = self.catalog.mask(seed);
        self.path.push(mask);
        self.enter(mask, seed);

        while let Some(frame) = self.stack.last_mut() {
            if frame.next > frame.last {
                self.stack.pop();
                self.path.pop();
                continue;
            }
            let p = frame.next;
            frame.next += 1;
            let state = frame.state;

            let mask = self.catalog.mask(p);
            if mask & state != 0 {
                continue;
            }
            let next = state | mask;
            if !self.index.is_reached(next) || self.index.min_index(next) > p {
                continue;
            }
            self.path.push(mask);
            self.enter(next, p);
        }

        Enumeration {
            chains: self.found,
            terminals: self.terminals,
        }
    }

    /// Record a cover if `state` is terminal, otherwise open its window below
    /// `taken`, the index that led here. Leaves `path` balanced with `stack`.
    fn enter(&mut self, state: LetterMask, taken: u32) {
        match letter_count(state) {
            LETTERS => {
                self.found.push(self.path.clone());
                self.terminals += 1;
                self.path.pop();
            }
            n if n == LETTERS - 1 => {
                let closer = self.catalog.mask(self.index.max_index(state));
                let mut chain = self.path.clone();
                chain.push(closer);
                self.found.push(chain);
                self.terminals += 1;
                self.path.pop();
            }
            _ => self.stack.push(Frame {
                state,
                next: self.index.min_index(state),
                last: self.index.max_index(state).min(taken - 1),
            }),
        }
    }
}
