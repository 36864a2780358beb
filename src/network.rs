//! Payment network discriminator carried in the payto authority.

use std::fmt;

/// The payment network named by a payto URI's hostname.
///
/// The hostname selects how path segments are read: `payto://ach/...` holds
/// a routing and an account number, `payto://iban/...` an optional BIC and an
/// IBAN, and so on. Any hostname without a dedicated layout is
/// [`Network::Other`], typically an asset or chain ticker such as `btc`.
///
/// # Examples
///
/// ```
/// use payto_uri::Network;
///
/// assert_eq!(Network::from_hostname("IBAN"), Network::Iban);
/// assert_eq!(Network::from_hostname("xcb"), Network::Other("xcb".to_string()));
/// assert_eq!(Network::Upi.as_str(), "upi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Network {
    /// US Automated Clearing House: routing number and account number
    Ach,
    /// Bank identified by BIC alone
    Bic,
    /// IBAN, optionally preceded by a BIC
    Iban,
    /// Transfer inside one institution: BIC and internal account
    Intra,
    /// Brazilian instant payments, addressed by alias
    Pix,
    /// Indian Unified Payments Interface, addressed by alias
    Upi,
    /// No account; the first segment names a location sub-type
    Void,
    /// Any other network, usually a ticker
    Other(String),
}

impl Network {
    /// Classifies a hostname, ignoring ASCII case.
    #[must_use]
    pub fn from_hostname(hostname: &str) -> Self {
        let lower = hostname.to_ascii_lowercase();
        match lower.as_str() {
            "ach" => Self::Ach,
            "bic" => Self::Bic,
            "iban" => Self::Iban,
            "intra" => Self::Intra,
            "pix" => Self::Pix,
            "upi" => Self::Upi,
            "void" => Self::Void,
            _ => Self::Other(lower),
        }
    }

    /// Returns the lowercase hostname for this network.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ach => "ach",
            Self::Bic => "bic",
            Self::Iban => "iban",
            Self::Intra => "intra",
            Self::Pix => "pix",
            Self::Upi => "upi",
            Self::Void => "void",
            Self::Other(name) => name,
        }
    }

    /// Returns true for networks whose path carries a BIC.
    #[must_use]
    pub const fn carries_bic(&self) -> bool {
        matches!(self, Self::Bic | Self::Iban | Self::Intra)
    }

    /// Returns true for networks addressed by an account alias.
    #[must_use]
    pub const fn is_alias(&self) -> bool {
        matches!(self, Self::Pix | Self::Upi)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Network {
    fn from(hostname: &str) -> Self {
        Self::from_hostname(hostname)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_networks_are_case_insensitive() {
        assert_eq!(Network::from_hostname("ACH"), Network::Ach);
        assert_eq!(Network::from_hostname("Intra"), Network::Intra);
        assert_eq!(Network::from_hostname("void"), Network::Void);
    }

    #[test]
    fn other_network_is_lowercased() {
        let network = Network::from_hostname("XCB");
        assert_eq!(network, Network::Other("xcb".to_string()));
        assert_eq!(network.to_string(), "xcb");
    }

    #[test]
    fn bic_family() {
        assert!(Network::Bic.carries_bic());
        assert!(Network::Iban.carries_bic());
        assert!(Network::Intra.carries_bic());
        assert!(!Network::Ach.carries_bic());
        assert!(!Network::Other("xcb".to_string()).carries_bic());
    }

    #[test]
    fn alias_family() {
        assert!(Network::Upi.is_alias());
        assert!(Network::Pix.is_alias());
        assert!(!Network::Iban.is_alias());
    }
}
