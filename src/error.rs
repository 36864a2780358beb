//! Error types for payto URI parsing and field writes.

use std::fmt;

/// Errors that can occur when parsing a payto URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The scheme is not `payto:`
    InvalidProtocol {
        /// The scheme that was found
        found: String,
    },
    /// The input is not a structurally valid URI
    Url(url::ParseError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse payto URI '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::InvalidProtocol { found } => {
                write!(f, "Invalid protocol, must be payto: (found '{found}:')")
            }
            ParseErrorKind::Url(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Url(e) => Some(e),
            ParseErrorKind::InvalidProtocol { .. } => None,
        }
    }
}

/// Errors for rejected field writes.
///
/// A setter that returns one of these has left the URI unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Value is not an 8 or 11 character BIC
    InvalidBic {
        /// The rejected value
        value: String,
    },
    /// Value is not a syntactically valid IBAN
    InvalidIban {
        /// The rejected value
        value: String,
    },
    /// Routing number is not exactly nine digits
    InvalidRoutingNumber {
        /// The rejected value
        value: String,
    },
    /// Account number does not fit the network's format
    InvalidAccountNumber {
        /// The rejected value
        value: String,
        /// Format the network requires
        reason: &'static str,
    },
    /// The field has no slot on the current network
    HostnameMismatch {
        /// Field being written
        field: &'static str,
        /// Networks that carry the field
        expected: &'static str,
        /// The current hostname
        found: String,
    },
    /// Deadline is negative
    InvalidDeadline {
        /// The rejected value
        value: i64,
    },
    /// Account alias is not an email address
    InvalidEmail {
        /// The rejected value
        value: String,
    },
    /// Location written while no void sub-type is present
    VoidTypeNotSet,
    /// Location is not a `latitude,longitude` pair in range
    InvalidGeoLocation {
        /// The rejected value
        value: String,
    },
    /// Location is not an Open Location Code
    InvalidPlusCode {
        /// The rejected value
        value: String,
    },
    /// Language tag is not `xx` or `xx-YY`
    InvalidLanguage {
        /// The rejected value
        value: String,
    },
    /// Split is missing its receiver or its amount
    IncompleteSplit,
    /// Scheme other than `payto:`
    InvalidProtocol {
        /// The rejected scheme
        found: String,
    },
    /// Replacement href failed to parse
    InvalidHref(ParseError),
    /// The URI substrate rejected a component
    Url {
        /// Component being written
        component: &'static str,
        /// Underlying parse failure
        source: url::ParseError,
    },
    /// The URI cannot carry the component (for example, no host)
    Unsupported {
        /// Component being written
        component: &'static str,
        /// The rejected value
        value: String,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBic { value } => write!(f, "Invalid BIC format: '{value}'"),
            Self::InvalidIban { value } => write!(f, "Invalid IBAN format: '{value}'"),
            Self::InvalidRoutingNumber { value } => write!(
                f,
                "Invalid routing number format. Must be exactly 9 digits, found '{value}'"
            ),
            Self::InvalidAccountNumber { value, reason } => {
                write!(f, "Invalid account number format. {reason}, found '{value}'")
            }
            Self::HostnameMismatch {
                field,
                expected,
                found,
            } => write!(
                f,
                "Invalid hostname, must be {expected} to set {field} (found '{found}')"
            ),
            Self::InvalidDeadline { value } => write!(
                f,
                "Invalid deadline format. Must be a positive integer (Unix timestamp), found {value}"
            ),
            Self::InvalidEmail { value } => {
                write!(f, "Invalid email address format: '{value}'")
            }
            Self::VoidTypeNotSet => write!(f, "Void type must be set before setting location"),
            Self::InvalidGeoLocation { value } => write!(
                f,
                "Invalid geo location format. Must be \"latitude,longitude\" with valid coordinates, found '{value}'"
            ),
            Self::InvalidPlusCode { value } => write!(f, "Invalid plus code format: '{value}'"),
            Self::InvalidLanguage { value } => write!(
                f,
                "Invalid language format: '{value}'; expected a lowercase two-letter code with optional region"
            ),
            Self::IncompleteSplit => write!(f, "Split requires both receiver and amount"),
            Self::InvalidProtocol { found } => {
                write!(f, "Invalid protocol, must be payto: (found '{found}')")
            }
            Self::InvalidHref(e) => write!(f, "invalid href: {e}"),
            Self::Url { component, source } => write!(f, "invalid {component}: {source}"),
            Self::Unsupported { component, value } => {
                write!(f, "cannot set {component} to '{value}' on this URI")
            }
        }
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidHref(e) => Some(e),
            Self::Url { source, .. } => Some(source),
            _ => None,
        }
    }
}
