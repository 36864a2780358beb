//! Positional path segments for payto URIs.

use std::fmt;

/// The `/`-separated segments of a payto path.
///
/// Segments are addressed by position, starting at zero for the segment
/// right after the host. Empty segments are dropped, so the serialized form
/// is always `/seg1/seg2/...` with a single leading slash.
///
/// # Examples
///
/// ```
/// use payto_uri::PathSegments;
///
/// let mut path = PathSegments::parse("/DEUTDEFF/DE89370400440532013000");
/// assert_eq!(path.get(1), Some("DE89370400440532013000"));
///
/// path.remove(0);
/// assert_eq!(path.to_string(), "/DE89370400440532013000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PathSegments {
    segments: Vec<String>,
}

impl PathSegments {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits a pathname into segments, dropping empty ones.
    #[must_use]
    pub fn parse(pathname: &str) -> Self {
        pathname.split('/').collect()
    }

    /// Returns the segment at `position`, if present.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&str> {
        self.segments.get(position).map(String::as_str)
    }

    /// Writes the segment at `position`.
    ///
    /// An empty value removes the segment. A position past the end appends,
    /// since gaps cannot be represented.
    pub fn set(&mut self, position: usize, value: &str) {
        if value.is_empty() {
            self.remove(position);
        } else if let Some(slot) = self.segments.get_mut(position) {
            value.clone_into(slot);
        } else {
            self.segments.push(value.to_string());
        }
    }

    /// Removes the segment at `position`, shifting later segments down.
    pub fn remove(&mut self, position: usize) -> Option<String> {
        (position < self.segments.len()).then(|| self.segments.remove(position))
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the segments as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.segments
    }

    /// Returns an iterator over the segments.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for PathSegments {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let segments = iter
            .into_iter()
            .filter(|s| !s.as_ref().is_empty())
            .map(|s| s.as_ref().to_string())
            .collect();
        Self { segments }
    }
}

impl fmt::Display for PathSegments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}
