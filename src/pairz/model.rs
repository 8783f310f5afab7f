use crate::validate::RejectionReason;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Project,
    Global,
}

/// Pairs every fresh list starts with.
pub const SEED_PAIRS: [(&str, &str); 2] = [("Hello", "World"), ("Happy", "Coding")];

/// A validated name/value pair.
///
/// Both fields are one or more ASCII alphanumeric characters. The fields are private
/// and every way of building a `Pair` (including deserialization) goes through
/// [`Pair::new`], so an invalid pair cannot exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPair")]
pub struct Pair {
    name: String,
    value: String,
}

impl Pair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self, RejectionReason> {
        let name = name.into();
        let value = value.into();
        if name.is_empty() {
            return Err(RejectionReason::EmptyName);
        }
        if value.is_empty() {
            return Err(RejectionReason::EmptyValue);
        }
        if !is_token(&name) || !is_token(&value) {
            return Err(RejectionReason::InvalidCharacters);
        }
        Ok(Self { name, value })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The two pairs a list is seeded with on first run.
    pub fn seeds() -> Vec<Pair> {
        SEED_PAIRS
            .iter()
            .map(|(name, value)| Pair {
                name: (*name).to_string(),
                value: (*value).to_string(),
            })
            .collect()
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

#[derive(Deserialize)]
struct RawPair {
    name: String,
    value: String,
}

impl TryFrom<RawPair> for Pair {
    type Error = RejectionReason;

    fn try_from(raw: RawPair) -> Result<Self, Self::Error> {
        Pair::new(raw.name, raw.value)
    }
}

/// One or more ASCII alphanumeric characters.
pub fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}
