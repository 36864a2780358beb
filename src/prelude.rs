//! Convenient re-exports for glob imports.
//!
//! This module provides a single import for all common types, making it easy
//! to get started with the crate:
//!
//! ```rust
//! use payto_uri::prelude::*;
//!
//! let payto = Payto::parse("payto://iban/DE89370400440532013000").unwrap();
//! assert_eq!(payto.network(), Network::Iban);
//! ```
//!
//! Query parameter names under [`param`](crate::param) are left out, since
//! their short names collide easily.

pub use crate::{
    // Core types
    Currency, Network, PathSegments, PaymentTarget, Payto, PaytoSnapshot, QueryParams, Split,
    VoidKind,
    // Errors
    FieldError, ParseError, ParseErrorKind,
    // Constants
    MAX_ITEM_LENGTH, MAX_ORGANIZATION_LENGTH, PROTOCOL, SCHEME,
};
