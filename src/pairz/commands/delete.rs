use crate::collection::PairStore;
use crate::commands::CmdResult;
use std::collections::BTreeSet;

/// Removes the pairs at `indices`. An empty selection changes nothing.
pub fn run(store: &mut PairStore, indices: &BTreeSet<usize>) -> CmdResult {
    if indices.is_empty() {
        return CmdResult::default();
    }

    let removed = store.delete_at(indices.iter().copied());
    CmdResult::default().with_affected_pairs(removed).mutated()
}
