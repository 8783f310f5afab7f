//! # The Pair List
//!
//! [`PairStore`] is the single source of truth for the current list. It is a plain
//! ordered `Vec<Pair>`: insertion order is kept until a sort reorders it, duplicates are
//! allowed, and a pair's position is its only identity.
//!
//! ## Deleting by Position
//!
//! [`PairStore::delete_at`] removes several positions at once. The set is walked from the
//! highest position down, so removing one pair never shifts a position that is still
//! waiting to be removed. Positions past the end are skipped.
//!
//! ## Ordering
//!
//! Sorting compares fields with [`collate`], which follows the root-locale ordering of
//! the characters pairs can contain: case is ignored on the first pass
//! (`apple < Banana < cherry`), digits come before letters, and only an otherwise equal
//! pair of strings falls back to lowercase-before-uppercase.

use crate::model::Pair;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Field a sort is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Value,
}

impl SortField {
    fn key<'a>(&self, pair: &'a Pair) -> &'a str {
        match self {
            SortField::Name => pair.name(),
            SortField::Value => pair.value(),
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::Name => write!(f, "name"),
            SortField::Value => write!(f, "value"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairStore {
    pairs: Vec<Pair>,
}

impl PairStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: Vec<Pair>) -> Self {
        Self { pairs }
    }

    pub fn append(&mut self, pair: Pair) {
        self.pairs.push(pair);
    }

    pub fn sort_by_name(&mut self) {
        self.sort_by(SortField::Name);
    }

    pub fn sort_by_value(&mut self) {
        self.sort_by(SortField::Value);
    }

    pub fn sort_by(&mut self, field: SortField) {
        self.pairs
            .sort_by(|a, b| collate(field.key(a), field.key(b)));
    }

    /// Removes every pair whose current position is in `indices`.
    ///
    /// Duplicate positions collapse and out-of-range positions are ignored.
    /// Returns the removed pairs in ascending position order.
    pub fn delete_at<I>(&mut self, indices: I) -> Vec<Pair>
    where
        I: IntoIterator<Item = usize>,
    {
        let targets: BTreeSet<usize> = indices.into_iter().collect();
        let mut removed = Vec::with_capacity(targets.len());

        for &index in targets.iter().rev() {
            if index < self.pairs.len() {
                removed.push(self.pairs.remove(index));
            }
        }

        removed.reverse();
        removed
    }

    pub fn snapshot(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn replace_all(&mut self, pairs: Vec<Pair>) {
        self.pairs = pairs;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Locale-aware string ordering.
///
/// Primary: characters compared case-insensitively. Tertiary: at the first position
/// where only case differs, lowercase sorts first. Anything still equal falls back to
/// plain byte order so the ordering is total.
pub fn collate(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.chars().map(|c| c.to_ascii_lowercase()));
    if primary != Ordering::Equal {
        return primary;
    }

    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            // Same letter, different case.
            return match (ca.is_ascii_lowercase(), cb.is_ascii_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => ca.cmp(&cb),
            };
        }
    }

    a.cmp(b)
}
