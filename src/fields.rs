//! Accessors for fields stored in the payto path.

use crate::error::FieldError;
use crate::location::VoidKind;
use crate::network::Network;
use crate::path::PathSegments;
use crate::patterns;
use crate::payto::{Payto, reject};
use crate::target::PaymentTarget;

impl Payto {
    /// Returns the payment network named by the hostname.
    #[must_use]
    pub fn network(&self) -> Network {
        Network::from_hostname(&self.hostname().unwrap_or_default())
    }

    /// Returns the path read under the current network's layout.
    #[must_use]
    pub fn target(&self) -> PaymentTarget {
        PaymentTarget::decode(&self.network(), &self.path_segments()).0
    }

    /// Decodes the target, lets `update` change it, and writes it back.
    ///
    /// Segments past the layout are kept. Nothing is written if `update` fails.
    fn update_target<F>(&mut self, update: F) -> Result<(), FieldError>
    where
        F: FnOnce(&mut PaymentTarget) -> Result<(), FieldError>,
    {
        let (mut target, rest) = PaymentTarget::decode(&self.network(), &self.path_segments());
        update(&mut target)?;
        self.write_path(&target.encode(&rest));
        Ok(())
    }

    fn mismatch(&self, field: &'static str, expected: &'static str) -> FieldError {
        FieldError::HostnameMismatch {
            field,
            expected,
            found: self.hostname().unwrap_or_default(),
        }
    }

    /// Returns the first path segment, whatever the network.
    #[must_use]
    pub fn address(&self) -> Option<String> {
        self.path_segments().get(0).map(str::to_string)
    }

    /// Writes or removes the first path segment.
    pub fn set_address(&mut self, value: Option<&str>) {
        self.set_segment(0, value);
    }

    /// Returns the second path segment, whatever the network.
    #[must_use]
    pub fn route(&self) -> Option<String> {
        self.path_segments().get(1).map(str::to_string)
    }

    /// Writes or removes the second path segment.
    pub fn set_route(&mut self, value: Option<&str>) {
        self.set_segment(1, value);
    }

    fn set_segment(&mut self, position: usize, value: Option<&str>) {
        let mut path: PathSegments = self.path_segments();
        path.set(position, value.unwrap_or_default());
        self.write_path(&path);
    }

    /// Returns the uppercased BIC on `bic`, `iban` and `intra` URIs.
    ///
    /// # Examples
    ///
    /// ```
    /// use payto_uri::Payto;
    ///
    /// let payto = Payto::parse("payto://bic/pingchb2").unwrap();
    /// assert_eq!(payto.bic().as_deref(), Some("PINGCHB2"));
    /// ```
    #[must_use]
    pub fn bic(&self) -> Option<String> {
        match self.target() {
            PaymentTarget::Iban { bic, .. }
            | PaymentTarget::Intra { bic, .. }
            | PaymentTarget::Bic { bic } => bic.map(|b| b.to_ascii_uppercase()),
            _ => None,
        }
    }

    /// Writes or removes the BIC, stored uppercased.
    ///
    /// On `iban` URIs adding a BIC moves the IBAN to the second segment.
    ///
    /// # Errors
    ///
    /// - [`FieldError::InvalidBic`] if the value is not an 8 or 11 character BIC
    /// - [`FieldError::HostnameMismatch`] if the network has no BIC
    pub fn set_bic(&mut self, value: Option<&str>) -> Result<(), FieldError> {
        let value = value.filter(|v| !v.is_empty());
        if let Some(bic) = value.filter(|bic| !patterns::BIC.is_match(bic)) {
            return Err(reject(
                "bic",
                FieldError::InvalidBic {
                    value: bic.to_string(),
                },
            ));
        }
        let mismatch = self.mismatch("bic", "bic, iban or intra");
        self.update_target(|target| {
            let slot = target.bic_mut().ok_or(mismatch)?;
            *slot = value.map(str::to_ascii_uppercase);
            Ok(())
        })
        .map_err(|e| reject("bic", e))
    }

    /// Returns the uppercased IBAN on `iban` URIs.
    #[must_use]
    pub fn iban(&self) -> Option<String> {
        match self.target() {
            PaymentTarget::Iban { iban, .. } => iban.map(|i| i.to_ascii_uppercase()),
            _ => None,
        }
    }

    /// Writes or removes the IBAN, stored uppercased. A BIC in the path is kept.
    ///
    /// # Errors
    ///
    /// - [`FieldError::InvalidIban`] if the value is not IBAN-shaped
    /// - [`FieldError::HostnameMismatch`] if the network is not `iban`
    pub fn set_iban(&mut self, value: Option<&str>) -> Result<(), FieldError> {
        let value = value.filter(|v| !v.is_empty());
        if let Some(iban) = value.filter(|iban| !patterns::IBAN.is_match(iban)) {
            return Err(reject(
                "iban",
                FieldError::InvalidIban {
                    value: iban.to_string(),
                },
            ));
        }
        let mismatch = self.mismatch("iban", "iban");
        self.update_target(|target| match target {
            PaymentTarget::Iban { iban, .. } => {
                *iban = value.map(str::to_ascii_uppercase);
                Ok(())
            }
            _ => Err(mismatch),
        })
        .map_err(|e| reject("iban", e))
    }

    /// Returns the ABA routing number on `ach` URIs.
    ///
    /// Only a nine-digit segment is returned, leading zeros included.
    #[must_use]
    pub fn routing_number(&self) -> Option<String> {
        match self.target() {
            PaymentTarget::Ach { routing_number, .. } => {
                routing_number.filter(|r| patterns::ROUTING_NUMBER.is_match(r))
            }
            _ => None,
        }
    }

    /// Writes or removes the routing number.
    ///
    /// # Errors
    ///
    /// - [`FieldError::InvalidRoutingNumber`] unless the number has exactly nine digits
    /// - [`FieldError::HostnameMismatch`] if the network is not `ach`
    pub fn set_routing_number(&mut self, value: Option<&str>) -> Result<(), FieldError> {
        if let Some(routing) = value.filter(|routing| !patterns::ROUTING_NUMBER.is_match(routing)) {
            return Err(reject(
                "routing number",
                FieldError::InvalidRoutingNumber {
                    value: routing.to_string(),
                },
            ));
        }
        let mismatch = self.mismatch("routing number", "ach");
        self.update_target(|target| match target {
            PaymentTarget::Ach { routing_number, .. } => {
                *routing_number = value.map(str::to_string);
                Ok(())
            }
            _ => Err(mismatch),
        })
        .map_err(|e| reject("routing number", e))
    }

    /// Returns the account number on `ach` and `intra` URIs.
    ///
    /// An ACH account number is only returned when it has 7 to 14 digits.
    #[must_use]
    pub fn account_number(&self) -> Option<String> {
        match self.target() {
            PaymentTarget::Ach { account_number, .. } => {
                account_number.filter(|a| patterns::ACH_ACCOUNT_NUMBER.is_match(a))
            }
            PaymentTarget::Intra { account_number, .. } => account_number,
            _ => None,
        }
    }

    /// Writes or removes the account number.
    ///
    /// # Errors
    ///
    /// - [`FieldError::HostnameMismatch`] if the network is not `ach` or `intra`
    /// - [`FieldError::InvalidAccountNumber`] if the value does not fit the network
    pub fn set_account_number(&mut self, value: Option<&str>) -> Result<(), FieldError> {
        let value = value.filter(|v| !v.is_empty());
        let format = match self.network() {
            Network::Ach => Some((
                &*patterns::ACH_ACCOUNT_NUMBER,
                "Must be 7 to 14 digits",
            )),
            Network::Intra => Some((
                &*patterns::INTRA_ACCOUNT_NUMBER,
                "Must be letters, digits, '.', '_' or '-'",
            )),
            _ => None,
        };
        let Some((pattern, reason)) = format else {
            return Err(reject(
                "account number",
                self.mismatch("account number", "ach or intra"),
            ));
        };
        if let Some(account) = value.filter(|account| !pattern.is_match(account)) {
            return Err(reject(
                "account number",
                FieldError::InvalidAccountNumber {
                    value: account.to_string(),
                    reason,
                },
            ));
        }
        let mismatch = self.mismatch("account number", "ach or intra");
        self.update_target(|target| {
            let slot = target.account_number_mut().ok_or(mismatch)?;
            *slot = value.map(str::to_string);
            Ok(())
        })
        .map_err(|e| reject("account number", e))
    }

    /// Returns the account alias on `upi` and `pix` URIs.
    #[must_use]
    pub fn account_alias(&self) -> Option<String> {
        match self.target() {
            PaymentTarget::Alias { alias } => alias,
            _ => None,
        }
    }

    /// Writes or removes the account alias, which must be an email address.
    ///
    /// # Errors
    ///
    /// - [`FieldError::InvalidEmail`] if the value is not an email address
    /// - [`FieldError::HostnameMismatch`] if the network is not `upi` or `pix`
    pub fn set_account_alias(&mut self, value: Option<&str>) -> Result<(), FieldError> {
        let value = value.filter(|v| !v.is_empty());
        if let Some(alias) = value.filter(|alias| !patterns::EMAIL.is_match(alias)) {
            return Err(reject(
                "account alias",
                FieldError::InvalidEmail {
                    value: alias.to_string(),
                },
            ));
        }
        let mismatch = self.mismatch("account alias", "upi or pix");
        self.update_target(|target| match target {
            PaymentTarget::Alias { alias } => {
                *alias = value.map(str::to_string);
                Ok(())
            }
            _ => Err(mismatch),
        })
        .map_err(|e| reject("account alias", e))
    }

    /// Returns the lowercased void sub-type on `void` URIs.
    #[must_use]
    pub fn void(&self) -> Option<String> {
        match self.target() {
            PaymentTarget::Void { kind } => kind.map(|k| k.to_lowercase()),
            _ => None,
        }
    }

    /// Returns the void sub-type, classified.
    #[must_use]
    pub fn void_kind(&self) -> Option<VoidKind> {
        self.void().map(|kind| VoidKind::from_subtype(&kind))
    }

    /// Turns the URI into `payto://void/<kind>`, or clears the sub-type.
    ///
    /// Setting a sub-type replaces the hostname and the whole path. Clearing
    /// only empties the path, and only on `void` URIs.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Url`] if the URI cannot take the `void` host.
    pub fn set_void(&mut self, value: Option<&str>) -> Result<(), FieldError> {
        match value.filter(|v| !v.is_empty()) {
            Some(kind) => {
                let mut next = self.clone();
                next.set_hostname(Network::Void.as_str())?;
                next.write_path(&PathSegments::parse(&kind.to_lowercase()));
                *self = next;
            }
            None if self.network() == Network::Void => {
                self.write_path(&PathSegments::new());
            }
            None => {}
        }
        Ok(())
    }
}
