//! Snapshot codec: an ordered pair list as a JSON array of `{"name", "value"}` objects.

use crate::error::{PairzError, Result};
use crate::model::Pair;

pub fn encode(pairs: &[Pair]) -> Result<String> {
    serde_json::to_string(pairs).map_err(PairzError::Serialization)
}

/// Decodes a stored blob. Every entry is re-validated; a blob holding anything other
/// than an array of valid pairs is reported as corrupt.
pub fn decode(key: &str, blob: &str) -> Result<Vec<Pair>> {
    serde_json::from_str(blob).map_err(|e| PairzError::CorruptSnapshot {
        key: key.to_string(),
        reason: e.to_string(),
    })
}
