//! Void sub-types and the location formats they select.

use std::fmt;

use crate::error::FieldError;
use crate::patterns;

/// Sub-type of a `payto://void/<kind>` URI.
///
/// The sub-type decides which format the `loc` parameter must follow.
///
/// # Examples
///
/// ```
/// use payto_uri::VoidKind;
///
/// let kind = VoidKind::from_subtype("GEO");
/// assert_eq!(kind, VoidKind::Geo);
/// assert!(kind.validate_location("51.5074,0.1278").is_ok());
/// assert!(kind.validate_location("91.0000,0.1278").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VoidKind {
    /// `latitude,longitude` coordinates
    Geo,
    /// Open Location Code
    Plus,
    /// Free-form location
    Other(String),
}

impl VoidKind {
    /// Classifies a sub-type, ignoring ASCII case.
    #[must_use]
    pub fn from_subtype(subtype: &str) -> Self {
        let lower = subtype.to_ascii_lowercase();
        match lower.as_str() {
            "geo" => Self::Geo,
            "plus" => Self::Plus,
            _ => Self::Other(lower),
        }
    }

    /// Returns the lowercase sub-type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Geo => "geo",
            Self::Plus => "plus",
            Self::Other(kind) => kind,
        }
    }

    /// Checks a location against this sub-type's format.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidGeoLocation`] or
    /// [`FieldError::InvalidPlusCode`] when the value does not match.
    /// Other sub-types accept any value.
    pub fn validate_location(&self, location: &str) -> Result<(), FieldError> {
        match self {
            Self::Geo if !patterns::GEO_LOCATION.is_match(location) => {
                Err(FieldError::InvalidGeoLocation {
                    value: location.to_string(),
                })
            }
            Self::Plus if !patterns::PLUS_CODE.is_match(location) => {
                Err(FieldError::InvalidPlusCode {
                    value: location.to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for VoidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_subtypes() {
        assert_eq!(VoidKind::from_subtype("geo"), VoidKind::Geo);
        assert_eq!(VoidKind::from_subtype("Plus"), VoidKind::Plus);
        assert_eq!(
            VoidKind::from_subtype("Custom"),
            VoidKind::Other("custom".to_string())
        );
    }

    #[test]
    fn geo_rejects_out_of_range() {
        let err = VoidKind::Geo.validate_location("51.5074,181.0000").unwrap_err();
        assert!(err.to_string().contains("Invalid geo location format"));
    }

    #[test]
    fn plus_rejects_bad_alphabet() {
        assert!(VoidKind::Plus.validate_location("8FVC9G8V+R9").is_ok());
        let err = VoidKind::Plus.validate_location("INVALID+CODE").unwrap_err();
        assert!(err.to_string().contains("Invalid plus code format"));
    }

    #[test]
    fn other_accepts_anything() {
        let kind = VoidKind::from_subtype("custom");
        assert!(kind.validate_location("any value").is_ok());
    }
}
