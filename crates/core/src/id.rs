//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// RFID tag uid identifying one catalog item.
///
/// Uids are case-normalized to uppercase (and trimmed) at construction, so
/// lookups are case-insensitive by construction instead of by comparison.
/// An input that is empty after trimming is not a uid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagUid(String);

impl TagUid {
    /// Normalize raw scanner input into a uid.
    ///
    /// Trims surrounding whitespace and uppercases the remainder.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("uid is empty"));
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for TagUid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TagUid {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uid_is_trimmed_and_uppercased() {
        let uid = TagUid::new(" 1a2b3c4d ").unwrap();
        assert_eq!(uid.as_str(), "1A2B3C4D");
    }

    #[test]
    fn equal_uids_compare_equal_regardless_of_input_case() {
        let a = TagUid::new("1a2b3c4d").unwrap();
        let b = TagUid::new("1A2B3C4D").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = TagUid::new("   ").unwrap_err();
        match err {
            DomainError::InvalidId(_) => {}
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn display_renders_normalized_form() {
        let uid = TagUid::new("zzzzzzzz").unwrap();
        assert_eq!(uid.to_string(), "ZZZZZZZZ");
    }
}
