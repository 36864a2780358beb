//! Typed field access for `payto:` payment URIs.
//!
//! This crate parses payto URIs and exposes their payment fields as typed,
//! validated, writable properties. The URI text is the only state: every
//! write goes straight back into the URI, so the serialized form always
//! reflects the latest change.
//!
//! # Overview
//!
//! A payto URI names a payment network in its hostname and carries the
//! network's account identifiers in its path. Payment details travel as
//! query parameters:
//!
//! ```text
//! payto://<network>/<segment>/<segment>...[?param=value&...][#fragment]
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use payto_uri::Payto;
//!
//! let mut payto = Payto::parse(
//!     "payto://xcb/cb7147879011ea207df5b35a24ca6f0859dcfb145999?amount=ctn:10.01&fiat=eur"
//! ).unwrap();
//!
//! // Read fields
//! assert_eq!(payto.asset().as_deref(), Some("ctn"));
//! assert_eq!(payto.value(), Some(10.01));
//! assert_eq!(payto.fiat().as_deref(), Some("eur"));
//!
//! // Write fields
//! payto.set_value(Some(20.02));
//! payto.set_message(Some("thank you"));
//! assert_eq!(
//!     payto.to_string(),
//!     "payto://xcb/cb7147879011ea207df5b35a24ca6f0859dcfb145999?amount=ctn:20.02&fiat=eur&message=thank+you"
//! );
//! ```
//!
//! # Validation
//!
//! Fields fall into two groups:
//!
//! - **Strict** fields reject malformed values with a [`FieldError`] and
//!   leave the URI untouched: BIC, IBAN, routing and account numbers,
//!   account alias, deadline, location, language, split.
//! - **Normalizing** fields silently drop invalid values: colors,
//!   organization, item.
//!
//! ```rust
//! use payto_uri::{FieldError, Payto};
//!
//! let mut payto = Payto::parse("payto://ach/123456789/1234567").unwrap();
//! assert!(matches!(
//!     payto.set_routing_number(Some("12345678")),
//!     Err(FieldError::InvalidRoutingNumber { .. })
//! ));
//! assert_eq!(payto.routing_number().as_deref(), Some("123456789"));
//! ```
//!
//! # Networks
//!
//! | Network | Path layout |
//! |---------|-------------|
//! | `ach` | `/<routing number>/<account number>` |
//! | `bic` | `/<bic>` |
//! | `iban` | `/[<bic>/]<iban>` |
//! | `intra` | `/<bic>/<account number>` |
//! | `upi`, `pix` | `/<account alias>` |
//! | `void` | `/<sub-type>` |
//! | any other | `/<address>[/<route>]` |
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Payto`] as a string, and
//!   `Serialize` for [`PaytoSnapshot`] as a JSON object.
//!
//! # Logging
//!
//! Rejected writes are reported at `debug` level and silently dropped values
//! at `trace` level through [`tracing`]. No subscriber is installed.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod amount;
mod constants;
mod error;
mod fields;
mod location;
mod network;
mod params;
mod path;
mod patterns;
mod payto;
pub mod prelude;
mod query;
mod snapshot;
mod split;
mod target;

pub use amount::Currency;
pub use constants::{MAX_ITEM_LENGTH, MAX_ORGANIZATION_LENGTH, PROTOCOL, SCHEME, param};
pub use error::{FieldError, ParseError, ParseErrorKind};
pub use location::VoidKind;
pub use network::Network;
pub use path::PathSegments;
pub use payto::Payto;
pub use query::QueryParams;
pub use snapshot::PaytoSnapshot;
pub use split::Split;
pub use target::PaymentTarget;
