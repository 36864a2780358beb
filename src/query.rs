//! Ordered query parameters for payto URIs.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use url::form_urlencoded;

/// Characters escaped when writing a parameter name or value.
///
/// Spaces are written as `+` separately. Characters such as `:`, `@`, `,`
/// and `/` stay literal so amounts and coordinates remain readable.
const QUERY_COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'`');

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Param {
    name: String,
    value: String,
    /// Serialized `name=value` text
    raw: String,
}

impl Param {
    fn from_raw(raw: &str) -> Self {
        let (name, value) = form_urlencoded::parse(raw.as_bytes())
            .next()
            .map(|(n, v)| (n.into_owned(), v.into_owned()))
            .unwrap_or_default();
        Self {
            name,
            value,
            raw: raw.to_string(),
        }
    }

    fn encoded(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            raw: format!("{}={}", encode_component(name), encode_component(value)),
        }
    }
}

fn encode_component(input: &str) -> String {
    input
        .split(' ')
        .map(|part| utf8_percent_encode(part, QUERY_COMPONENT).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Query parameters from a payto URI.
///
/// Parameters keep their original order and may repeat. Pairs that are never
/// written keep their original text, so a parse followed by serialization
/// reproduces the input (empty `&&` pairs aside). Written pairs are encoded
/// with a minimal escape set.
///
/// # Examples
///
/// ```
/// use payto_uri::QueryParams;
///
/// let mut params = QueryParams::parse("amount=ctn:10.01&fiat=eur");
/// assert_eq!(params.get("fiat"), Some("eur"));
///
/// params.set("fiat", "usd");
/// params.set("message", "thank you");
/// assert_eq!(params.to_string(), "amount=ctn:10.01&fiat=usd&message=thank+you");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QueryParams {
    params: Vec<Param>,
}

impl QueryParams {
    /// Creates an empty query params instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses query parameters from a query string (without leading '?').
    ///
    /// Percent-encoding and `+` are decoded in names and values. Parsing never
    /// fails; malformed escapes are kept literally.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let params = input
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(Param::from_raw)
            .collect();
        Self { params }
    }

    /// Returns the first value for a parameter, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Returns every value for a parameter, in order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.params
            .iter()
            .filter(move |p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Returns true if the parameter is present.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.params.iter().any(|p| p.name == name)
    }

    /// Sets a parameter.
    ///
    /// The first occurrence is replaced in place and later duplicates are
    /// dropped; an absent parameter is appended.
    pub fn set(&mut self, name: &str, value: &str) {
        match self.params.iter().position(|p| p.name == name) {
            Some(idx) => {
                self.params[idx] = Param::encoded(name, value);
                let mut seen = 0usize;
                self.params.retain(|p| {
                    if p.name != name {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.append(name, value),
        }
    }

    /// Appends a parameter, keeping existing ones with the same name.
    pub fn append(&mut self, name: &str, value: &str) {
        self.params.push(Param::encoded(name, value));
    }

    /// Removes every occurrence of a parameter. Returns true if any was removed.
    pub fn delete(&mut self, name: &str) -> bool {
        let before = self.params.len();
        self.params.retain(|p| p.name != name);
        self.params.len() != before
    }

    /// Returns true if the query is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns an iterator over the decoded parameters.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .map(|p| (p.name.as_str(), p.value.as_str()))
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<&str> = self.params.iter().map(|p| p.raw.as_str()).collect();
        write!(f, "{}", pairs.join("&"))
    }
}

impl FromStr for QueryParams {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty() {
        let params = QueryParams::parse("");
        assert!(params.is_empty());
        assert_eq!(params.to_string(), "");
    }

    #[test]
    fn parse_multiple_params() {
        let params = QueryParams::parse("amount=ctn:10.01&fiat=eur");
        assert_eq!(params.get("amount"), Some("ctn:10.01"));
        assert_eq!(params.get("fiat"), Some("eur"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn parse_param_without_value() {
        let params = QueryParams::parse("flag");
        assert_eq!(params.get("flag"), Some(""));
        assert!(params.has("flag"));
    }

    #[test]
    fn parse_decodes_percent_and_plus() {
        let params = QueryParams::parse("loc=8FVC9G8V%2BR9&message=Hello+World");
        assert_eq!(params.get("loc"), Some("8FVC9G8V+R9"));
        assert_eq!(params.get("message"), Some("Hello World"));
    }

    #[test]
    fn untouched_pairs_keep_original_text() {
        let input = "amount=ctn%3A10.01&color-f=001BEE&message=a+b";
        let mut params = QueryParams::parse(input);
        assert_eq!(params.to_string(), input);

        params.set("fiat", "eur");
        assert_eq!(
            params.to_string(),
            "amount=ctn%3A10.01&color-f=001BEE&message=a+b&fiat=eur"
        );
    }

    #[test]
    fn set_replaces_in_place_and_drops_duplicates() {
        let mut params = QueryParams::parse("a=1&b=2&a=3");
        params.set("a", "9");
        assert_eq!(params.to_string(), "a=9&b=2");
    }

    #[test]
    fn append_keeps_duplicates() {
        let mut params = QueryParams::parse("a=1");
        params.append("a", "2");
        let all: Vec<_> = params.get_all("a").collect();
        assert_eq!(all, vec!["1", "2"]);
        assert_eq!(params.get("a"), Some("1"));
    }

    #[test]
    fn delete_removes_every_occurrence() {
        let mut params = QueryParams::parse("a=1&b=2&a=3");
        assert!(params.delete("a"));
        assert!(!params.delete("a"));
        assert_eq!(params.to_string(), "b=2");
    }

    #[test]
    fn written_values_are_minimally_encoded() {
        let mut params = QueryParams::new();
        params.set("loc", "8FVC9G8V+R9");
        params.set("split", "p:50@receiver");
        params.set("message", "fish & chips");
        assert_eq!(
            params.to_string(),
            "loc=8FVC9G8V%2BR9&split=p:50@receiver&message=fish+%26+chips"
        );

        let reparsed = QueryParams::parse(&params.to_string());
        assert_eq!(reparsed.get("message"), Some("fish & chips"));
        assert_eq!(reparsed.get("loc"), Some("8FVC9G8V+R9"));
    }

    #[test]
    fn non_ascii_is_escaped() {
        let mut params = QueryParams::new();
        params.set("receiver-name", "Zoë");
        assert_eq!(params.to_string(), "receiver-name=Zo%C3%AB");
    }

    #[test]
    fn iter_returns_all_params() {
        let params = QueryParams::parse("a=1&b=2");
        let items: Vec<_> = params.iter().collect();
        assert_eq!(items, vec![("a", "1"), ("b", "2")]);
    }
}
