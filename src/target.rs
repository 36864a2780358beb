//! Network-specific layouts of the payto path.

use crate::network::Network;
use crate::path::PathSegments;
use crate::patterns;

/// The path of a payto URI, read according to its network.
///
/// Each variant names the segments its network defines, in path order.
/// Values are exactly as stored in the path; case normalization and numeric
/// parsing happen in the [`Payto`](crate::Payto) accessors.
///
/// # Examples
///
/// ```
/// use payto_uri::{Payto, PaymentTarget};
///
/// let payto = Payto::parse("payto://iban/DEUTDEFF/DE89370400440532013000").unwrap();
/// assert_eq!(
///     payto.target(),
///     PaymentTarget::Iban {
///         bic: Some("DEUTDEFF".to_string()),
///         iban: Some("DE89370400440532013000".to_string()),
///     }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentTarget {
    /// `payto://ach/<routing>/<account>`
    Ach {
        /// Nine-digit ABA routing number
        routing_number: Option<String>,
        /// Account number
        account_number: Option<String>,
    },
    /// `payto://iban/[<bic>/]<iban>`
    Iban {
        /// Optional BIC of the account-holding institution
        bic: Option<String>,
        /// International Bank Account Number
        iban: Option<String>,
    },
    /// `payto://bic/<bic>`
    Bic {
        /// Business Identifier Code
        bic: Option<String>,
    },
    /// `payto://upi/<alias>` or `payto://pix/<alias>`
    Alias {
        /// Account alias, an email address
        alias: Option<String>,
    },
    /// `payto://intra/<bic>/<account>`
    Intra {
        /// BIC of the institution
        bic: Option<String>,
        /// Institution-internal account identifier
        account_number: Option<String>,
    },
    /// `payto://void/<sub-type>`
    Void {
        /// Location sub-type such as `geo` or `plus`
        kind: Option<String>,
    },
    /// `payto://<network>/<address>`
    Generic {
        /// Address on the network
        address: Option<String>,
    },
}

impl PaymentTarget {
    /// Reads the path under the layout of `network`.
    ///
    /// Returns the target and the segments past the ones the layout uses.
    pub(crate) fn decode(network: &Network, path: &PathSegments) -> (Self, Vec<String>) {
        let at = |position: usize| path.get(position).map(str::to_string);

        let (target, consumed) = match network {
            Network::Ach => (
                Self::Ach {
                    routing_number: at(0),
                    account_number: at(1),
                },
                2,
            ),
            Network::Intra => (
                Self::Intra {
                    bic: at(0),
                    account_number: at(1),
                },
                2,
            ),
            Network::Iban => match path.get(0) {
                // A BIC can never look like an IBAN, so a leading IBAN means no BIC.
                Some(first) if patterns::IBAN.is_match(first) => (
                    Self::Iban {
                        bic: None,
                        iban: Some(first.to_string()),
                    },
                    1,
                ),
                _ => (
                    Self::Iban {
                        bic: at(0),
                        iban: at(1),
                    },
                    2,
                ),
            },
            Network::Bic => (Self::Bic { bic: at(0) }, 1),
            Network::Pix | Network::Upi => (Self::Alias { alias: at(0) }, 1),
            Network::Void => (Self::Void { kind: at(0) }, 1),
            Network::Other(_) => (Self::Generic { address: at(0) }, 1),
        };

        let rest = path
            .as_slice()
            .get(consumed..)
            .unwrap_or_default()
            .to_vec();
        (target, rest)
    }

    /// Lays the target back out as path segments, followed by `rest`.
    pub(crate) fn encode(&self, rest: &[String]) -> PathSegments {
        self.slots()
            .into_iter()
            .flatten()
            .chain(rest.iter().map(String::as_str))
            .collect()
    }

    fn slots(&self) -> [Option<&str>; 2] {
        match self {
            Self::Ach {
                routing_number,
                account_number,
            } => [routing_number.as_deref(), account_number.as_deref()],
            Self::Iban { bic, iban } => [bic.as_deref(), iban.as_deref()],
            Self::Intra {
                bic,
                account_number,
            } => [bic.as_deref(), account_number.as_deref()],
            Self::Bic { bic } => [bic.as_deref(), None],
            Self::Alias { alias } => [alias.as_deref(), None],
            Self::Void { kind } => [kind.as_deref(), None],
            Self::Generic { address } => [address.as_deref(), None],
        }
    }

    /// Returns the BIC slot, for networks that have one.
    pub(crate) fn bic_mut(&mut self) -> Option<&mut Option<String>> {
        match self {
            Self::Iban { bic, .. } | Self::Intra { bic, .. } | Self::Bic { bic } => Some(bic),
            _ => None,
        }
    }

    /// Returns the account number slot, for networks that have one.
    pub(crate) fn account_number_mut(&mut self) -> Option<&mut Option<String>> {
        match self {
            Self::Ach { account_number, .. } | Self::Intra { account_number, .. } => {
                Some(account_number)
            }
            _ => None,
        }
    }
}
