use crate::collection::{PairStore, SortField};
use crate::commands::CmdResult;

pub fn run(store: &mut PairStore, field: SortField) -> CmdResult {
    store.sort_by(field);
    CmdResult::default().mutated()
}
