//! Property identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A validated GA4 property identifier.
///
/// Accepts a bare numeric ID or a `properties/{id}` resource name; anything
/// else fails with [`Error::InvalidPropertyId`].
///
/// # Examples
///
/// ```
/// use ga4_api_rs::PropertyId;
///
/// let property = PropertyId::new("123456789").unwrap();
/// assert_eq!(property.resource_name(), "properties/123456789");
///
/// let prefixed = PropertyId::new("properties/123456789").unwrap();
/// assert_eq!(prefixed, property);
///
/// assert!(PropertyId::new("my-property").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyId(String);

impl PropertyId {
    /// Parses and validates a property identifier.
    pub fn new(id: impl AsRef<str>) -> Result<Self> {
        let raw = id.as_ref().trim();
        let digits = raw.strip_prefix("properties/").unwrap_or(raw);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid_property_id(raw));
        }
        Ok(Self(digits.to_string()))
    }

    /// The numeric ID without the `properties/` prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The resource name used in request paths.
    pub fn resource_name(&self) -> String {
        format!("properties/{}", self.0)
    }
}

impl FromStr for PropertyId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PropertyId::new(s)
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "properties/{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_bare_digits() {
        let property = PropertyId::new("123456789").unwrap();
        assert_eq!(property.as_str(), "123456789");
    }

    #[test]
    fn test_strips_resource_prefix() {
        let property = PropertyId::new("properties/123456789").unwrap();
        assert_eq!(property.as_str(), "123456789");
        assert_eq!(property, PropertyId::new("123456789").unwrap());
    }

    #[test]
    fn test_trims_whitespace() {
        let property = PropertyId::new("  123456789  ").unwrap();
        assert_eq!(property.as_str(), "123456789");
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            PropertyId::new(""),
            Err(Error::InvalidPropertyId { .. })
        ));
        assert!(matches!(
            PropertyId::new("properties/"),
            Err(Error::InvalidPropertyId { .. })
        ));
    }

    #[test]
    fn test_rejects_non_numeric() {
        for bad in ["abc", "123abc", "properties/abc", "12.5", "-5"] {
            assert!(
                matches!(PropertyId::new(bad), Err(Error::InvalidPropertyId { .. })),
                "expected rejection of {bad:?}"
            );
        }
    }

    #[test]
    fn test_display_uses_resource_name() {
        let property = PropertyId::new("42").unwrap();
        assert_eq!(property.to_string(), "properties/42");
        assert_eq!(property.to_string(), property.resource_name());
    }

    #[test]
    fn test_from_str() {
        let property: PropertyId = "123456789".parse().unwrap();
        assert_eq!(property.as_str(), "123456789");
    }
}
