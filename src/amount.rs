//! The composite `amount` parameter and its currency views.

/// The `amount` query value, split into its token and number parts.
///
/// Written back as `token:number` or `number`. A bare token can still be
/// read, but a token without a number is never written. Both parts keep
/// their original text so rewriting one never reformats the other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Amount {
    token: Option<String>,
    number: Option<String>,
}

impl Amount {
    /// Splits a raw `amount` value on its first `:`.
    pub(crate) fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((token, number)) => Self {
                token: non_empty(token),
                number: non_empty(number),
            },
            None if parse_number(raw).is_some() => Self {
                token: None,
                number: non_empty(raw),
            },
            None => Self {
                token: non_empty(raw),
                number: None,
            },
        }
    }

    /// The token part, unless it is itself numeric.
    pub(crate) fn asset(&self) -> Option<&str> {
        self.token
            .as_deref()
            .filter(|token| parse_number(token).is_none())
    }

    /// The number part, if it parses as a finite number.
    pub(crate) fn value(&self) -> Option<f64> {
        self.number.as_deref().and_then(parse_number)
    }

    pub(crate) fn set_token(&mut self, token: Option<&str>) {
        self.token = token.and_then(non_empty);
    }

    pub(crate) fn set_value(&mut self, value: f64) {
        self.number = Some(format_number(value));
    }

    pub(crate) const fn has_number(&self) -> bool {
        self.number.is_some()
    }

    /// Serializes back to the `amount` value, or `None` without a number.
    pub(crate) fn to_raw(&self) -> Option<String> {
        let number = self.number.as_deref()?;
        Some(match &self.token {
            Some(token) => format!("{token}:{number}"),
            None => number.to_string(),
        })
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Parses a plain decimal number.
///
/// Only digits, sign, decimal point and exponent are accepted, so tokens
/// like `inf` or `nan` stay tokens.
pub(crate) fn parse_number(s: &str) -> Option<f64> {
    if s.is_empty()
        || !s
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
    {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Formats a number the way it is written into `amount`: `100`, `20.02`.
pub(crate) fn format_number(value: f64) -> String {
    value.to_string()
}

/// The asset and fiat currency of a payment.
///
/// `asset` is the token part of `amount`; `fiat` is the `fiat` parameter.
/// Serializes as a two-element array.
///
/// # Examples
///
/// ```
/// use payto_uri::Payto;
///
/// let payto = Payto::parse("payto://xcb/cb7147879011ea207df5b35a24ca6f0859dcfb145999?amount=ctn:10.01&fiat=eur").unwrap();
/// let currency = payto.currency();
/// assert_eq!(currency.asset.as_deref(), Some("ctn"));
/// assert_eq!(currency.fiat.as_deref(), Some("eur"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Currency {
    /// Token of the `amount` parameter
    pub asset: Option<String>,
    /// Lowercased `fiat` parameter
    pub fiat: Option<String>,
}

impl Currency {
    /// Creates a currency pair.
    #[must_use]
    pub fn new(asset: Option<&str>, fiat: Option<&str>) -> Self {
        Self {
            asset: asset.map(str::to_string),
            fiat: fiat.map(str::to_string),
        }
    }

    /// Returns true if neither part is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.asset.is_none() && self.fiat.is_none()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;

        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.asset)?;
        tuple.serialize_element(&self.fiat)?;
        tuple.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_token_and_number() {
        let amount = Amount::parse("ctn:10.01");
        assert_eq!(amount.asset(), Some("ctn"));
        assert_eq!(amount.value(), Some(10.01));
        assert_eq!(amount.to_raw().as_deref(), Some("ctn:10.01"));
    }

    #[test]
    fn parse_bare_number() {
        let amount = Amount::parse("10");
        assert_eq!(amount.asset(), None);
        assert_eq!(amount.value(), Some(10.0));
    }

    #[test]
    fn parse_bare_token() {
        let amount = Amount::parse("ctn");
        assert_eq!(amount.asset(), Some("ctn"));
        assert_eq!(amount.value(), None);
    }

    #[test]
    fn non_numeric_number_part() {
        let amount = Amount::parse("invalid:amount");
        assert_eq!(amount.asset(), Some("invalid"));
        assert_eq!(amount.value(), None);
    }

    #[test]
    fn numeric_token_is_not_an_asset() {
        let amount = Amount::parse("10:5");
        assert_eq!(amount.asset(), None);
        assert_eq!(amount.value(), Some(5.0));
    }

    #[test]
    fn set_token_keeps_number_text() {
        let mut amount = Amount::parse("ctn:10.10");
        amount.set_token(Some("xxx"));
        assert_eq!(amount.to_raw().as_deref(), Some("xxx:10.10"));
    }

    #[test]
    fn set_value_keeps_token() {
        let mut amount = Amount::parse("usd:20");
        amount.set_value(50.0);
        assert_eq!(amount.to_raw().as_deref(), Some("usd:50"));
    }

    #[test]
    fn token_without_number_is_not_written() {
        let amount = Amount::parse("ctn");
        assert!(!amount.has_number());
        assert_eq!(amount.to_raw(), None);

        let mut amount = Amount::default();
        amount.set_token(Some("xxx"));
        assert_eq!(amount.to_raw(), None);
        amount.set_value(1.5);
        assert_eq!(amount.to_raw().as_deref(), Some("xxx:1.5"));
    }

    #[test]
    fn special_float_names_are_tokens() {
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("1e3"), Some(1000.0));
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(20.02), "20.02");
        assert_eq!(format_number(15.5), "15.5");
    }
}
