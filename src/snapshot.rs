//! Flat view of every populated field.

use crate::amount::Currency;
use crate::payto::Payto;
use crate::split::Split;

/// Every field of a [`Payto`] at one point in time.
///
/// Absent fields are `None`; empty strings are never stored. `search` and
/// `hash` keep their `?` and `#` prefixes. With the
/// `serde` feature the snapshot serializes as a JSON object with camelCase
/// keys, leaving out absent fields. `false` and `0` are present values and
/// are kept.
///
/// # Examples
///
/// ```
/// use payto_uri::Payto;
///
/// let payto = Payto::parse("payto://xcb/cb7147879011ea207df5b35a24ca6f0859dcfb145999?amount=ctn:10.01&fiat=eur").unwrap();
/// let snapshot = payto.to_json_object();
/// assert_eq!(snapshot.network.as_deref(), Some("xcb"));
/// assert_eq!(snapshot.value, Some(10.01));
/// assert_eq!(snapshot.location, None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[allow(missing_docs)]
pub struct PaytoSnapshot {
    pub account_alias: Option<String>,
    pub account_number: Option<String>,
    pub address: Option<String>,
    pub amount: Option<String>,
    pub asset: Option<String>,
    pub barcode: Option<String>,
    pub bic: Option<String>,
    pub color_background: Option<String>,
    pub color_foreground: Option<String>,
    pub currency: Option<Currency>,
    pub deadline: Option<u64>,
    pub donate: Option<bool>,
    pub fiat: Option<String>,
    pub hash: Option<String>,
    pub host: Option<String>,
    pub hostname: Option<String>,
    pub href: String,
    pub iban: Option<String>,
    pub item: Option<String>,
    pub lang: Option<String>,
    pub location: Option<String>,
    pub message: Option<String>,
    pub mode: Option<String>,
    pub network: Option<String>,
    pub organization: Option<String>,
    pub origin: Option<String>,
    pub password: Option<String>,
    pub pathname: Option<String>,
    pub port: Option<u16>,
    pub protocol: String,
    pub receiver_name: Option<String>,
    pub recurring: Option<String>,
    pub route: Option<String>,
    pub routing_number: Option<String>,
    pub rtl: Option<bool>,
    pub search: Option<String>,
    pub split: Option<Split>,
    pub swap: Option<String>,
    pub username: Option<String>,
    pub value: Option<f64>,
    pub void: Option<String>,
}

impl Payto {
    /// Captures every populated field.
    #[must_use]
    pub fn to_json_object(&self) -> PaytoSnapshot {
        let currency = self.currency();
        PaytoSnapshot {
            account_alias: self.account_alias(),
            account_number: self.account_number(),
            address: self.address(),
            amount: self.amount(),
            asset: self.asset(),
            barcode: self.barcode(),
            bic: self.bic(),
            color_background: self.color_background(),
            color_foreground: self.color_foreground(),
            currency: (!currency.is_empty()).then_some(currency),
            deadline: self.deadline(),
            donate: self.donate(),
            fiat: self.fiat(),
            hash: self.hash().map(|h| format!("#{h}")),
            host: self.host(),
            hostname: self.hostname(),
            href: self.href().to_string(),
            iban: self.iban(),
            item: self.item(),
            lang: self.lang(),
            location: self.location(),
            message: self.message(),
            mode: self.mode(),
            network: self.hostname(),
            organization: self.organization(),
            origin: self.origin(),
            password: self.password().map(str::to_string),
            pathname: Some(self.pathname())
                .filter(|p| !p.is_empty())
                .map(str::to_string),
            port: self.port(),
            protocol: self.protocol(),
            receiver_name: self.receiver_name(),
            recurring: self.recurring(),
            route: self.route(),
            routing_number: self.routing_number(),
            rtl: self.rtl(),
            search: self.search().map(|q| format!("?{q}")),
            split: self.split(),
            swap: self.swap(),
            username: self.username().map(str::to_string),
            value: self.value(),
            void: self.void(),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PaytoSnapshot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        macro_rules! present {
            ($map:ident, $snapshot:expr; $($key:literal => $field:ident),* $(,)?) => {
                $(
                    if let Some(value) = &$snapshot.$field {
                        $map.serialize_entry($key, value)?;
                    }
                )*
            };
        }

        let mut map = serializer.serialize_map(None)?;
        present!(map, self;
            "accountAlias" => account_alias,
            "accountNumber" => account_number,
            "address" => address,
            "amount" => amount,
            "asset" => asset,
            "barcode" => barcode,
            "bic" => bic,
            "colorBackground" => color_background,
            "colorForeground" => color_foreground,
            "currency" => currency,
            "deadline" => deadline,
            "donate" => donate,
            "fiat" => fiat,
            "hash" => hash,
            "host" => host,
            "hostname" => hostname,
        );
        map.serialize_entry("href", &self.href)?;
        present!(map, self;
            "iban" => iban,
            "item" => item,
            "lang" => lang,
            "location" => location,
            "message" => message,
            "mode" => mode,
            "network" => network,
            "organization" => organization,
            "origin" => origin,
            "password" => password,
            "pathname" => pathname,
            "port" => port,
        );
        map.serialize_entry("protocol", &self.protocol)?;
        present!(map, self;
            "receiverName" => receiver_name,
            "recurring" => recurring,
            "route" => route,
            "routingNumber" => routing_number,
            "rtl" => rtl,
            "search" => search,
            "split" => split,
            "swap" => swap,
            "username" => username,
            "value" => value,
            "void" => void,
        );
        map.end()
    }
}
