//! # Display Rows and Selections
//!
//! A pair's only identity is its position in the list. When the list is shown, each
//! row carries that position as its token, and a later selection names rows by those
//! tokens.
//!
//! Positions are zero-based and are recomputed on every render: after any mutation the
//! old tokens are meaningless, which is why presenters drop their selection when they
//! render.
//!
//! - [`index_pairs`]: Attaches positions to a list of pairs
//! - [`DisplayPair`]: A pair together with its position and row label
//! - [`parse_selection`]: Parses user tokens like `"2"` or `"0-3"` into a [`Selection`]
//! - [`Selection::positions`]: Resolves a selection against a list of known length
//!
//! **Developer Note**: Always build rows with [`index_pairs`] from the store's current
//! snapshot. Enumerating some other copy of the list breaks the position association.

use crate::error::{PairzError, Result};
use crate::model::Pair;
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPair {
    pub index: usize,
    pub pair: Pair,
}

impl DisplayPair {
    /// The row text, `<name>=<value>`.
    pub fn label(&self) -> String {
        self.pair.to_string()
    }
}

pub fn index_pairs(pairs: &[Pair]) -> Vec<DisplayPair> {
    pairs
        .iter()
        .enumerate()
        .map(|(index, pair)| DisplayPair {
            index,
            pair: pair.clone(),
        })
        .collect()
}

/// Positions named by the user, kept as ranges until the list length is known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ranges: Vec<RangeInclusive<usize>>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// The selected positions that exist in a list of `len` rows.
    ///
    /// Ranges are clipped to the list first, so the work is bounded by `len`
    /// however large the typed range was.
    pub fn positions(&self, len: usize) -> BTreeSet<usize> {
        let mut selected = BTreeSet::new();
        let Some(last) = len.checked_sub(1) else {
            return selected;
        };
        for range in &self.ranges {
            let start = *range.start();
            if start > last {
                continue;
            }
            selected.extend(start..=(*range.end()).min(last));
        }
        selected
    }
}

/// Parses selection tokens.
///
/// Each token is either a single position (`"3"`) or an inclusive range (`"1-4"`).
/// Positions are not checked against any list here; [`Selection::positions`] drops
/// the ones that do not exist.
pub fn parse_selection<I: AsRef<str>>(tokens: &[I]) -> Result<Selection> {
    let mut ranges = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = token.as_ref().trim();
        if let Some((start, end)) = token.split_once('-') {
            let start = parse_position(start, token)?;
            let end = parse_position(end, token)?;
            if start > end {
                return Err(PairzError::Api(format!(
                    "Invalid range: {} (start is after end)",
                    token
                )));
            }
            ranges.push(start..=end);
        } else {
            let position = parse_position(token, token)?;
            ranges.push(position..=position);
        }
    }
    Ok(Selection { ranges })
}

fn parse_position(s: &str, token: &str) -> Result<usize> {
    s.trim()
        .parse()
        .map_err(|_| PairzError::Api(format!("Invalid index format: {}", token)))
}
