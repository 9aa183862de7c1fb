//! UPI virtual payment address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`UpiAddress`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UpiAddressError {
    /// The input string is empty (after trimming).
    #[error("UPI ID cannot be empty")]
    Empty,
    /// The input does not contain the @ separator.
    #[error("UPI ID must contain an @ separator (example@bank)")]
    MissingSeparator,
}

/// A UPI virtual payment address, e.g. `shop@bank`.
///
/// Validation is a format precondition only: the address must be non-empty
/// and contain the `@` separator. Whether the handle actually resolves is
/// the payment app's concern.
///
/// ## Examples
///
/// ```
/// use twiscent_core::UpiAddress;
///
/// assert!(UpiAddress::parse("shop@bank").is_ok());
/// assert!(UpiAddress::parse("  shop@bank  ").is_ok()); // trimmed
///
/// assert!(UpiAddress::parse("").is_err());
/// assert!(UpiAddress::parse("no-separator").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct UpiAddress(String);

impl UpiAddress {
    /// Parse a `UpiAddress` from a string, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty or lacks the `@`
    /// separator.
    pub fn parse(s: &str) -> Result<Self, UpiAddressError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(UpiAddressError::Empty);
        }

        if !s.contains('@') {
            return Err(UpiAddressError::MissingSeparator);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `UpiAddress` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UpiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UpiAddress {
    type Err = UpiAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for UpiAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_addresses() {
        assert!(UpiAddress::parse("shop@bank").is_ok());
        assert!(UpiAddress::parse("merchant.name@okaxis").is_ok());
        assert!(UpiAddress::parse("9999999999@ybl").is_ok());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let addr = UpiAddress::parse("  shop@bank \n").unwrap();
        assert_eq!(addr.as_str(), "shop@bank");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(UpiAddress::parse(""), Err(UpiAddressError::Empty));
        assert_eq!(UpiAddress::parse("   "), Err(UpiAddressError::Empty));
    }

    #[test]
    fn test_parse_missing_separator() {
        assert_eq!(
            UpiAddress::parse("shopbank"),
            Err(UpiAddressError::MissingSeparator)
        );
    }

    #[test]
    fn test_from_str() {
        let addr: UpiAddress = "shop@bank".parse().unwrap();
        assert_eq!(addr.as_str(), "shop@bank");
    }

    #[test]
    fn test_serde_roundtrip() {
        let addr = UpiAddress::parse("shop@bank").unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"shop@bank\"");

        let parsed: UpiAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, addr);
    }
}
