use crate::collection::PairStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::validate::validate;

pub fn run(store: &mut PairStore, raw: &str) -> CmdResult {
    match validate(raw) {
        Ok(pair) => {
            store.append(pair.clone());
            CmdResult::default()
                .with_affected_pairs(vec![pair])
                .mutated()
        }
        Err(reason) => {
            let mut result = CmdResult {
                rejection: Some(reason),
                ..CmdResult::default()
            };
            result.add_message(CmdMessage::error(reason.message()));
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Pair;
    use crate::validate::RejectionReason;

    #[test]
    fn appends_valid_pair() {
        let mut store = PairStore::new();
        let result = run(&mut store, "  Key = Value ");

        assert!(result.mutated);
        assert!(!result.is_rejected());
        assert_eq!(store.snapshot(), &[Pair::new("Key", "Value").unwrap()]);
        assert_eq!(result.affected_pairs.len(), 1);
    }

    #[test]
    fn rejection_leaves_store_unchanged() {
        let mut store = PairStore::from_pairs(Pair::seeds());
        let result = run(&mut store, "Key==Value");

        assert!(!result.mutated);
        assert_eq!(result.rejection, Some(RejectionReason::MultipleSeparators));
        assert_eq!(store.snapshot(), Pair::seeds().as_slice());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert_eq!(
            result.messages[0].content,
            "Invalid format. Use exactly one '=': Name=Value"
        );
    }
}
