//! Split payments encoded as `[p:]amount@receiver`.

use std::fmt;

/// A share of the payment routed to a second receiver.
///
/// # Examples
///
/// ```
/// use payto_uri::Split;
///
/// let split = Split::parse("p:50@receiver123").unwrap();
/// assert_eq!(split.receiver, "receiver123");
/// assert_eq!(split.amount, "50");
/// assert!(split.percentage);
/// assert_eq!(split.to_string(), "p:50@receiver123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Split {
    /// Address receiving the share
    pub receiver: String,
    /// Share, as written (absolute units or percent)
    pub amount: String,
    /// True if `amount` is a percentage
    pub percentage: bool,
}

impl Split {
    /// Creates a split.
    #[must_use]
    pub fn new(receiver: impl Into<String>, amount: impl Into<String>, percentage: bool) -> Self {
        Self {
            receiver: receiver.into(),
            amount: amount.into(),
            percentage,
        }
    }

    /// Parses `[p:]amount@receiver`, returning `None` if either side is empty.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let (amount_part, receiver) = input.split_once('@')?;
        let (amount, percentage) = match amount_part.strip_prefix("p:") {
            Some(amount) => (amount, true),
            None => (amount_part, false),
        };
        if receiver.is_empty() || amount.is_empty() {
            return None;
        }
        Some(Self::new(receiver, amount, percentage))
    }

    /// Returns true if both the receiver and the amount are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.receiver.is_empty() && !self.amount.is_empty()
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.percentage { "p:" } else { "" };
        write!(f, "{prefix}{}@{}", self.amount, self.receiver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_absolute_split() {
        let split = Split::parse("100@receiver456").unwrap();
        assert_eq!(split, Split::new("receiver456", "100", false));
    }

    #[test]
    fn parse_missing_side_is_none() {
        assert_eq!(Split::parse("100@"), None);
        assert_eq!(Split::parse("@receiver"), None);
        assert_eq!(Split::parse("p:@receiver"), None);
        assert_eq!(Split::parse("no-separator"), None);
    }

    #[test]
    fn display_percentage() {
        let split = Split::new("receiver123", "50", true);
        assert_eq!(split.to_string(), "p:50@receiver123");
    }

    #[test]
    fn completeness() {
        assert!(Split::new("r", "1", false).is_complete());
        assert!(!Split::new("", "1", false).is_complete());
        assert!(!Split::new("r", "", true).is_complete());
    }
}
