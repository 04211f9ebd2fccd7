//! Validated tenant database names.
//!
//! A tenant is identified by the name of its database. Because database
//! identifiers cannot be bound as query parameters, every name is validated
//! once at the edge and carried as a [`TenantName`] afterwards, so the rest
//! of the system never handles a raw, possibly unsafe string.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Maximum length of a tenant database name (Postgres identifier limit).
pub const MAX_TENANT_NAME_LEN: usize = 63;

/// Error returned when a string is not a valid tenant database name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTenantName {
    /// The name was empty.
    #[error("tenant name must not be empty")]
    Empty,

    /// The name exceeded [`MAX_TENANT_NAME_LEN`] characters.
    #[error("tenant name must be at most {MAX_TENANT_NAME_LEN} characters")]
    TooLong,

    /// The name did not start with a lowercase ASCII letter.
    #[error("tenant name must start with a lowercase letter")]
    BadLeadingChar,

    /// The name contained a character outside `[a-z0-9_-]`.
    #[error("tenant name may only contain lowercase letters, digits, '_' and '-'")]
    BadChar,
}

/// A validated tenant database name.
///
/// Guaranteed to be a safe Postgres identifier: non-empty, at most 63
/// characters, starting with a lowercase ASCII letter and containing only
/// lowercase letters, digits, underscores and hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TenantName(String);

impl TenantName {
    /// Validate and wrap a tenant name.
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidTenantName> {
        let name = name.into();

        if name.is_empty() {
            return Err(InvalidTenantName::Empty);
        }
        if name.len() > MAX_TENANT_NAME_LEN {
            return Err(InvalidTenantName::TooLong);
        }

        let mut chars = name.chars();
        match chars.next() {
            Some(c) if c.is_ascii_lowercase() => {}
            _ => return Err(InvalidTenantName::BadLeadingChar),
        }
        if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-') {
            return Err(InvalidTenantName::BadChar);
        }

        Ok(Self(name))
    }

    /// The name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TenantName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TenantName {
    type Err = InvalidTenantName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TenantName {
    type Error = InvalidTenantName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TenantName> for String {
    fn from(name: TenantName) -> Self {
        name.0
    }
}

impl AsRef<str> for TenantName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["acme", "acme_pos", "shop-2", "a", "t1"] {
            assert!(name.parse::<TenantName>().is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!("".parse::<TenantName>(), Err(InvalidTenantName::Empty));
    }

    #[test]
    fn test_too_long_rejected() {
        let name = "a".repeat(64);
        assert_eq!(name.parse::<TenantName>(), Err(InvalidTenantName::TooLong));

        let name = "a".repeat(63);
        assert!(name.parse::<TenantName>().is_ok());
    }

    #[test]
    fn test_leading_char_rules() {
        assert_eq!(
            "1shop".parse::<TenantName>(),
            Err(InvalidTenantName::BadLeadingChar)
        );
        assert_eq!(
            "_shop".parse::<TenantName>(),
            Err(InvalidTenantName::BadLeadingChar)
        );
        assert_eq!(
            "Shop".parse::<TenantName>(),
            Err(InvalidTenantName::BadLeadingChar)
        );
    }

    #[test]
    fn test_unsafe_chars_rejected() {
        for name in ["acme corp", "acme;drop", "acme\"", "acme'", "acmé"] {
            assert_eq!(
                name.parse::<TenantName>(),
                Err(InvalidTenantName::BadChar),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let name: TenantName = "acme_pos".parse().unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"acme_pos\"");

        let back: TenantName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let result: Result<TenantName, _> = serde_json::from_str("\"Not A Db\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_matches_input() {
        let name: TenantName = "shop-7".parse().unwrap();
        assert_eq!(name.to_string(), "shop-7");
        assert_eq!(name.as_str(), "shop-7");
    }
}
