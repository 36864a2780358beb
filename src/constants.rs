//! Constants for payto URI parsing and field validation.

/// The URI scheme.
pub const SCHEME: &str = "payto";

/// The scheme as reported by [`Payto::protocol`](crate::Payto::protocol).
pub const PROTOCOL: &str = "payto:";

/// Maximum length of the `org` parameter, in characters.
pub const MAX_ORGANIZATION_LENGTH: usize = 25;

/// Maximum length of the `item` parameter, in characters.
pub const MAX_ITEM_LENGTH: usize = 40;

/// Query parameter names understood by [`Payto`](crate::Payto).
pub mod param {
    /// Composite `[token:]number` amount.
    pub const AMOUNT: &str = "amount";
    /// Barcode format hint.
    pub const BARCODE: &str = "barcode";
    /// Background color, six hex digits.
    pub const COLOR_BACKGROUND: &str = "color-b";
    /// Foreground color, six hex digits.
    pub const COLOR_FOREGROUND: &str = "color-f";
    /// Deadline as a Unix timestamp.
    pub const DEADLINE: &str = "dl";
    /// Donation flag.
    pub const DONATE: &str = "donate";
    /// Fiat currency code.
    pub const FIAT: &str = "fiat";
    /// Item description.
    pub const ITEM: &str = "item";
    /// Language tag.
    pub const LANG: &str = "lang";
    /// Location, interpreted by the void sub-type.
    pub const LOCATION: &str = "loc";
    /// Free-form message.
    pub const MESSAGE: &str = "message";
    /// Transfer mode hint.
    pub const MODE: &str = "mode";
    /// Organization name.
    pub const ORGANIZATION: &str = "org";
    /// Recurring payment descriptor.
    pub const RECURRING: &str = "rc";
    /// Receiver display name.
    pub const RECEIVER_NAME: &str = "receiver-name";
    /// Right-to-left flag.
    pub const RTL: &str = "rtl";
    /// Split payment, `[p:]amount@receiver`.
    pub const SPLIT: &str = "split";
    /// Swap target asset.
    pub const SWAP: &str = "swap";
}
