//! Input validation for `Name=Value` lines.
//!
//! A valid line:
//! - Contains exactly one `=`
//! - Has a non-empty name and value on either side of it
//! - Uses only ASCII letters and digits inside the name and value
//! - May carry whitespace at both ends and around the `=`
//!
//! The checks run in a fixed order and stop at the first failure, so each rejected
//! line maps to exactly one [`RejectionReason`].

use crate::model::Pair;

/// Parses a raw input line into a [`Pair`].
///
/// # Examples
/// ```
/// use pairz::validate::{validate, RejectionReason};
///
/// let pair = validate("  Name = Value  ").unwrap();
/// assert_eq!(pair.name(), "Name");
/// assert_eq!(pair.value(), "Value");
///
/// assert_eq!(validate("NameValue"), Err(RejectionReason::MissingSeparator));
/// assert_eq!(validate("a=b=c"), Err(RejectionReason::MultipleSeparators));
/// assert_eq!(validate("=Value"), Err(RejectionReason::EmptyName));
/// assert_eq!(validate("Name="), Err(RejectionReason::EmptyValue));
/// assert_eq!(validate("A B=C"), Err(RejectionReason::InvalidCharacters));
/// ```
pub fn validate(raw: &str) -> Result<Pair, RejectionReason> {
    let trimmed = raw.trim_matches(is_blank);
    if !trimmed.contains('=') {
        return Err(RejectionReason::MissingSeparator);
    }

    let mut parts = trimmed.split('=');
    let (name, value) = match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(value), None) => {
            (name.trim_matches(is_blank), value.trim_matches(is_blank))
        }
        _ => return Err(RejectionReason::MultipleSeparators),
    };

    // With exactly one '=' and both sides trimmed, the remaining grammar is just
    // "each side is a token", which Pair::new enforces.
    Pair::new(name, value)
}

/// Whitespace for trimming purposes. A byte order mark counts as blank so that
/// lines pasted from files that carry one still validate.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Why an input line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    /// No `=` in the line
    MissingSeparator,
    /// More than one `=` in the line
    MultipleSeparators,
    /// Nothing but whitespace before the `=`
    EmptyName,
    /// Nothing but whitespace after the `=`
    EmptyValue,
    /// Name or value contains something other than A-Z, a-z, 0-9
    InvalidCharacters,
}

impl RejectionReason {
    /// The message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            RejectionReason::MissingSeparator => "Missing '='. Use format Name=Value",
            RejectionReason::MultipleSeparators => {
                "Invalid format. Use exactly one '=': Name=Value"
            }
            RejectionReason::EmptyName => "Name cannot be empty",
            RejectionReason::EmptyValue => "Value cannot be empty",
            RejectionReason::InvalidCharacters => "Use only alphanumeric characters (A-Z, 0-9)",
        }
    }
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for RejectionReason {}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &str, value: &str) -> Pair {
        Pair::new(name, value).unwrap()
    }

    #[test]
    fn test_accepts_plain_pair() {
        assert_eq!(validate("Hello=World"), Ok(pair("Hello", "World")));
        assert_eq!(validate("a1=2b"), Ok(pair("a1", "2b")));
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        assert_eq!(validate("\u{FEFF}A=B"), Ok(pair("A", "B")));
        assert_eq!(validate("A\u{FEFF}=\u{FEFF}B\u{FEFF}"), Ok(pair("A", "B")));
        assert_eq!(
            validate("A\u{FEFF}B=C"),
            Err(RejectionReason::InvalidCharacters)
        );
    }

    #[test]
    fn test_tolerates_outer_and_separator_whitespace() {
        assert_eq!(validate("  Name = Value  "), Ok(pair("Name", "Value")));
        assert_eq!(validate("\tName=\tValue\n"), Ok(pair("Name", "Value")));
        assert_eq!(validate("Name   =Value"), Ok(pair("Name", "Value")));
    }

    #[test]
    fn test_missing_separator() {
        for raw in ["", "   ", "Hello", "Hello World", "Hello-World", "a:b"] {
            assert_eq!(
                validate(raw),
                Err(RejectionReason::MissingSeparator),
                "input {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_multiple_separators() {
        for raw in ["a=b=c", "==", "a==b", "=a=", "  x = y = z  ", "a=b!=c"] {
            assert_eq!(
                validate(raw),
                Err(RejectionReason::MultipleSeparators),
                "input {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_empty_name_and_value() {
        assert_eq!(validate("=Value"), Err(RejectionReason::EmptyName));
        assert_eq!(validate("   =  Value"), Err(RejectionReason::EmptyName));
        assert_eq!(validate("="), Err(RejectionReason::EmptyName));
        assert_eq!(validate("Name="), Err(RejectionReason::EmptyValue));
        assert_eq!(validate("Name =   "), Err(RejectionReason::EmptyValue));
    }

    #[test]
    fn test_invalid_characters() {
        for raw in ["A B=C", "A=C!", "A=B C", "na_me=v", "n=v-1", "ü=v", "a.b=c"] {
            assert_eq!(
                validate(raw),
                Err(RejectionReason::InvalidCharacters),
                "input {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_empty_checks_win_over_character_checks() {
        // Name empty and value invalid: the empty name is reported first.
        assert_eq!(validate("=a b"), Err(RejectionReason::EmptyName));
        assert_eq!(validate("a b="), Err(RejectionReason::EmptyValue));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            RejectionReason::MissingSeparator.to_string(),
            "Missing '='. Use format Name=Value"
        );
        assert_eq!(
            RejectionReason::MultipleSeparators.message(),
            "Invalid format. Use exactly one '=': Name=Value"
        );
        assert_eq!(RejectionReason::EmptyName.message(), "Name cannot be empty");
        assert_eq!(RejectionReason::EmptyValue.message(), "Value cannot be empty");
        assert_eq!(
            RejectionReason::InvalidCharacters.message(),
            "Use only alphanumeric characters (A-Z, 0-9)"
        );
    }
}
