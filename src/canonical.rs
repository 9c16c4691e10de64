//! Order-independent form of a chain.

use crate::enumerate::Chain;

/// Sort every chain by descending mask, then sort the collection and drop
/// duplicates. Two chains survive as one exactly when they hold the same masks.
pub fn canonicalize(mut chains: Vec<Chain>) -> Vec<Chain> {
    for chain in &mut chains {
        chain.sort_unstable_by(|a, b| b.cmp(a));
    }
    chains.sort_unstable();
    chains.dedup();
    chains
}
