//! Identifier pair keys.
//!
//! Agents pass two identifiers as one argument joined by `_+_`, e.g.
//! `"PS11752778_+_WDT780SAEM1"` (part + model) or `"WDT780SAEM1_+_rack"`
//! (model + search term).

use crate::error::{Error, Result};

pub const DELIMITER: &str = "_+_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierPair {
    pub first: String,
    pub second: String,
}

impl IdentifierPair {
    /// Split on the delimiter. Exactly one occurrence is required.
    pub fn parse(key: &str) -> Result<Self> {
        let occurrences = key.matches(DELIMITER).count();
        if occurrences != 1 {
            return Err(Error::MalformedKey {
                key: key.to_string(),
                occurrences,
            });
        }

        match key.split_once(DELIMITER) {
            Some((first, second)) => Ok(Self {
                first: first.to_string(),
                second: second.to_string(),
            }),
            None => Err(Error::MalformedKey {
                key: key.to_string(),
                occurrences: 0,
            }),
        }
    }

    pub fn join(first: &str, second: &str) -> String {
        format!("{first}{DELIMITER}{second}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let pair = IdentifierPair::parse("PS12345_+_W987654").unwrap();
        assert_eq!(pair.first, "PS12345");
        assert_eq!(pair.second, "W987654");
    }

    #[test]
    fn test_missing_delimiter_fails() {
        let err = IdentifierPair::parse("PS12345 W987654").unwrap_err();
        assert!(matches!(err, Error::MalformedKey { occurrences: 0, .. }));
    }

    #[test]
    fn test_repeated_delimiter_fails() {
        let err = IdentifierPair::parse("a_+_b_+_c").unwrap_err();
        assert!(matches!(err, Error::MalformedKey { occurrences: 2, .. }));
    }

    #[test]
    fn test_empty_sides_are_kept() {
        let pair = IdentifierPair::parse("_+_W987654").unwrap();
        assert_eq!(pair.first, "");
        assert_eq!(pair.second, "W987654");
    }

    #[test]
    fn test_join() {
        let key = IdentifierPair::join("PS12345", "W987654");
        assert_eq!(IdentifierPair::parse(&key).unwrap().first, "PS12345");
    }
}
