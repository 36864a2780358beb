//! Main payto URI type.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};
use url::Url;

use crate::constants::SCHEME;
use crate::error::{FieldError, ParseError, ParseErrorKind};
use crate::path::PathSegments;
use crate::query::QueryParams;

/// A parsed payto URI with typed, writable payment fields.
///
/// The URI text is the only state: every field is read from and written to
/// the underlying URI, so [`Payto::to_string`](ToString::to_string) always
/// reflects the latest writes and an untouched URI serializes exactly as it
/// was parsed.
///
/// # Structure
///
/// ```text
/// payto://<network>/<path segments>[?query][#fragment]
/// ```
///
/// # Examples
///
/// ```
/// use payto_uri::Payto;
///
/// let mut payto = Payto::parse("payto://xcb/cb7147879011ea207df5b35a24ca6f0859dcfb145999?amount=ctn:10.01&fiat=eur").unwrap();
/// assert_eq!(payto.address().as_deref(), Some("cb7147879011ea207df5b35a24ca6f0859dcfb145999"));
/// assert_eq!(payto.value(), Some(10.01));
///
/// payto.set_asset(Some("xxx"));
/// assert_eq!(payto.amount().as_deref(), Some("xxx:10.01"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Payto {
    url: Url,
}

impl Payto {
    /// Parses a payto URI from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input is not a structurally valid URI
    /// - The scheme is not `payto:`
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_inner(input).map_err(|kind| {
            debug!(input, error = ?kind, "rejected payto URI");
            ParseError {
                input: input.to_string(),
                kind,
            }
        })
    }

    fn parse_inner(input: &str) -> Result<Self, ParseErrorKind> {
        let url = Url::parse(input).map_err(ParseErrorKind::Url)?;
        if url.scheme() != SCHEME {
            return Err(ParseErrorKind::InvalidProtocol {
                found: url.scheme().to_string(),
            });
        }
        Ok(Self { url })
    }

    /// Returns the URI string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Returns the URI string. Same as [`Payto::as_str`].
    #[must_use]
    pub fn href(&self) -> &str {
        self.url.as_str()
    }

    /// Replaces the whole URI.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidHref`] if `value` does not parse as a
    /// payto URI; the current URI is kept.
    pub fn set_href(&mut self, value: &str) -> Result<(), FieldError> {
        *self = Self::parse(value).map_err(|e| reject("href", FieldError::InvalidHref(e)))?;
        Ok(())
    }

    /// Returns the URI serialized as a JSON string value would carry it.
    #[must_use]
    pub fn to_json(&self) -> String {
        self.url.as_str().to_string()
    }

    /// Returns the scheme with its trailing colon, always `payto:`.
    #[must_use]
    pub fn protocol(&self) -> String {
        format!("{}:", self.url.scheme())
    }

    /// Writes the scheme.
    ///
    /// Only `payto` (with or without the colon, any case) is accepted, so the
    /// scheme can never leave `payto:`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidProtocol`] for any other scheme.
    pub fn set_protocol(&mut self, value: &str) -> Result<(), FieldError> {
        let scheme = value.strip_suffix(':').unwrap_or(value);
        if scheme.eq_ignore_ascii_case(SCHEME) {
            Ok(())
        } else {
            Err(reject(
                "protocol",
                FieldError::InvalidProtocol {
                    found: value.to_string(),
                },
            ))
        }
    }

    /// Returns the host with its port, such as `test.com:8080`.
    #[must_use]
    pub fn host(&self) -> Option<String> {
        let host = self.url.host_str().filter(|h| !h.is_empty())?;
        Some(match self.url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        })
    }

    /// Writes the host, optionally followed by `:port`.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] if the URI substrate rejects the hostname or
    /// port; the URI is left unchanged.
    pub fn set_host(&mut self, value: &str) -> Result<(), FieldError> {
        let (hostname, port) = match value.rsplit_once(':') {
            Some((name, port))
                if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) =>
            {
                let port = port.parse::<u16>().map_err(|_| {
                    reject(
                        "port",
                        FieldError::Unsupported {
                            component: "port",
                            value: port.to_string(),
                        },
                    )
                })?;
                (name, Some(port))
            }
            _ => (value, None),
        };

        let mut next = self.clone();
        next.set_hostname(hostname)?;
        if port.is_some() {
            next.set_port(port)?;
        }
        *self = next;
        Ok(())
    }

    /// Returns the lowercased hostname, which names the payment network.
    #[must_use]
    pub fn hostname(&self) -> Option<String> {
        self.url
            .host_str()
            .filter(|h| !h.is_empty())
            .map(str::to_ascii_lowercase)
    }

    /// Writes the hostname, lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Url`] if the value is not a valid host.
    pub fn set_hostname(&mut self, value: &str) -> Result<(), FieldError> {
        let lower = value.to_ascii_lowercase();
        self.url.set_host(Some(&lower)).map_err(|source| {
            reject(
                "hostname",
                FieldError::Url {
                    component: "hostname",
                    source,
                },
            )
        })
    }

    /// Writes the payment network. Same as [`Payto::set_hostname`].
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Url`] if the value is not a valid host.
    pub fn set_network(&mut self, value: &str) -> Result<(), FieldError> {
        self.set_hostname(value)
    }

    /// Returns the port, if one is present.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.url.port()
    }

    /// Writes or clears the port.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Unsupported`] if the URI has no host.
    pub fn set_port(&mut self, port: Option<u16>) -> Result<(), FieldError> {
        self.url.set_port(port).map_err(|()| {
            reject(
                "port",
                FieldError::Unsupported {
                    component: "port",
                    value: port.map(|p| p.to_string()).unwrap_or_default(),
                },
            )
        })
    }

    /// Returns the username, if not empty.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        Some(self.url.username()).filter(|u| !u.is_empty())
    }

    /// Writes the username; an empty value clears it.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Unsupported`] if the URI has no host.
    pub fn set_username(&mut self, value: &str) -> Result<(), FieldError> {
        self.url.set_username(value).map_err(|()| {
            reject(
                "username",
                FieldError::Unsupported {
                    component: "username",
                    value: value.to_string(),
                },
            )
        })
    }

    /// Returns the password, if not empty.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.url.password().filter(|p| !p.is_empty())
    }

    /// Writes or clears the password.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Unsupported`] if the URI has no host.
    pub fn set_password(&mut self, value: Option<&str>) -> Result<(), FieldError> {
        self.url.set_password(value).map_err(|()| {
            reject(
                "password",
                FieldError::Unsupported {
                    component: "password",
                    value: value.unwrap_or_default().to_string(),
                },
            )
        })
    }

    /// Returns the path, percent-encoded as in the URI.
    #[must_use]
    pub fn pathname(&self) -> &str {
        self.url.path()
    }

    /// Writes the path verbatim.
    pub fn set_pathname(&mut self, value: &str) {
        self.url.set_path(value);
    }

    /// Returns the query string without the leading `?`, if not empty.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.url.query().filter(|q| !q.is_empty())
    }

    /// Writes or clears the query string.
    pub fn set_search(&mut self, value: Option<&str>) {
        let value = value.map(|v| v.strip_prefix('?').unwrap_or(v));
        self.url.set_query(value.filter(|v| !v.is_empty()));
    }

    /// Returns a copy of the query parameters.
    #[must_use]
    pub fn search_params(&self) -> QueryParams {
        self.query()
    }

    /// Replaces the query parameters.
    pub fn set_search_params(&mut self, params: &QueryParams) {
        self.write_query(params);
    }

    /// Returns the fragment without the leading `#`, if not empty.
    #[must_use]
    pub fn hash(&self) -> Option<&str> {
        self.url.fragment().filter(|f| !f.is_empty())
    }

    /// Writes or clears the fragment.
    pub fn set_hash(&mut self, value: Option<&str>) {
        let value = value.map(|v| v.strip_prefix('#').unwrap_or(v));
        self.url.set_fragment(value.filter(|v| !v.is_empty()));
    }

    /// Returns `payto://host[:port]`, if the URI has a host.
    #[must_use]
    pub fn origin(&self) -> Option<String> {
        self.host().map(|host| format!("{SCHEME}://{host}"))
    }

    pub(crate) fn query(&self) -> QueryParams {
        QueryParams::parse(self.url.query().unwrap_or_default())
    }

    pub(crate) fn write_query(&mut self, params: &QueryParams) {
        if params.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.set_query(Some(&params.to_string()));
        }
    }

    /// Returns a parameter's value, treating an empty value as absent.
    pub(crate) fn param(&self, name: &str) -> Option<String> {
        self.query()
            .get(name)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// Sets a parameter, or deletes it when `value` is `None` or empty.
    pub(crate) fn set_param(&mut self, name: &str, value: Option<&str>) {
        let mut query = self.query();
        if put(&mut query, name, value) {
            self.write_query(&query);
        }
    }

    pub(crate) fn path_segments(&self) -> PathSegments {
        PathSegments::parse(self.url.path())
    }

    /// Writes `path`, unless its segments already match the current ones.
    pub(crate) fn write_path(&mut self, path: &PathSegments) {
        if *path != self.path_segments() {
            self.url.set_path(&path.to_string());
        }
    }
}

/// Sets or deletes `name` in `query`. Returns true if `query` changed.
///
/// A single occurrence already holding `value` keeps its original encoding.
pub(crate) fn put(query: &mut QueryParams, name: &str, value: Option<&str>) -> bool {
    match value.filter(|v| !v.is_empty()) {
        Some(value) if query.get_all(name).eq([value]) => false,
        Some(value) => {
            query.set(name, value);
            true
        }
        None => query.delete(name),
    }
}

/// Logs a rejected write and hands the error back.
pub(crate) fn reject(field: &'static str, err: FieldError) -> FieldError {
    debug!(field, error = %err, "rejected field write");
    err
}

/// Logs a value dropped by a silently normalizing field.
pub(crate) fn cleared(field: &'static str, value: &str) {
    trace!(field, value, "cleared invalid value");
}

impl fmt::Display for Payto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

impl FromStr for Payto {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Payto {
    fn as_ref(&self) -> &str {
        self.url.as_str()
    }
}

impl TryFrom<&str> for Payto {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Payto {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.url.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Payto {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
