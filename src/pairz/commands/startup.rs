use crate::collection::PairStore;
use crate::commands::CmdResult;
use crate::model::Pair;

/// Fills the store from a loaded snapshot, or seeds it when there is none.
pub fn run(store: &mut PairStore, loaded: Option<Vec<Pair>>) -> CmdResult {
    match loaded {
        Some(pairs) => {
            store.replace_all(pairs);
            CmdResult::default()
        }
        None => {
            let seeds = Pair::seeds();
            store.replace_all(seeds.clone());
            CmdResult::default().with_affected_pairs(seeds).mutated()
        }
    }
}
