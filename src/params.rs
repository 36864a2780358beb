//! Accessors for fields stored in the payto query.

use crate::amount::{Amount, Currency};
use crate::constants::{MAX_ITEM_LENGTH, MAX_ORGANIZATION_LENGTH, param};
use crate::error::FieldError;
use crate::patterns;
use crate::payto::{Payto, cleared, put, reject};
use crate::split::Split;

impl Payto {
    fn amount_parts(&self) -> Amount {
        Amount::parse(&self.amount().unwrap_or_default())
    }

    fn write_amount(&mut self, amount: &Amount) {
        self.set_param(param::AMOUNT, amount.to_raw().as_deref());
    }

    fn lowercase_param(&self, name: &str) -> Option<String> {
        self.param(name).map(|v| v.to_lowercase())
    }

    fn flag(&self, name: &str) -> Option<bool> {
        match self.query().get(name) {
            Some("1") => Some(true),
            Some("0") => Some(false),
            _ => None,
        }
    }

    fn set_flag(&mut self, name: &str, value: Option<bool>) {
        self.set_param(name, (value == Some(true)).then_some("1"));
    }

    fn set_bounded(&mut self, field: &'static str, name: &str, max: usize, value: Option<&str>) {
        let value = value.filter(|v| !v.is_empty());
        match value {
            Some(v) if v.chars().count() <= max => self.set_param(name, Some(v)),
            Some(v) => {
                cleared(field, v);
                self.set_param(name, None);
            }
            None => self.set_param(name, None),
        }
    }

    fn set_color(&mut self, field: &'static str, name: &str, value: Option<&str>) {
        let value = value.filter(|v| !v.is_empty());
        match value {
            Some(v) if patterns::HEX_COLOR.is_match(v) => {
                self.set_param(name, Some(&v.to_ascii_lowercase()));
            }
            Some(v) => {
                cleared(field, v);
                self.set_param(name, None);
            }
            None => self.set_param(name, None),
        }
    }

    /// Returns the raw `amount` parameter, such as `ctn:10.01`.
    #[must_use]
    pub fn amount(&self) -> Option<String> {
        self.param(param::AMOUNT)
    }

    /// Writes or removes the raw `amount` parameter.
    pub fn set_amount(&mut self, value: Option<&str>) {
        self.set_param(param::AMOUNT, value);
    }

    /// Returns the token part of `amount`, such as `ctn`.
    #[must_use]
    pub fn asset(&self) -> Option<String> {
        self.amount_parts().asset().map(str::to_string)
    }

    /// Writes or removes the token part of `amount`, keeping the number.
    ///
    /// An asset is only written next to a number; without one the write is
    /// dropped.
    pub fn set_asset(&mut self, value: Option<&str>) {
        let mut amount = self.amount_parts();
        if let Some(asset) = value.filter(|v| !v.is_empty() && !amount.has_number()) {
            cleared("asset", asset);
            return;
        }
        amount.set_token(value);
        self.write_amount(&amount);
    }

    /// Returns the number part of `amount`.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.amount_parts().value()
    }

    /// Writes the number part of `amount`, keeping the token.
    ///
    /// `None` and non-finite numbers leave `amount` unchanged; clear it with
    /// [`Payto::set_amount`].
    pub fn set_value(&mut self, value: Option<f64>) {
        let Some(value) = value.filter(|v| v.is_finite()) else {
            return;
        };
        let mut amount = self.amount_parts();
        amount.set_value(value);
        self.write_amount(&amount);
    }

    /// Returns the lowercased `fiat` parameter.
    #[must_use]
    pub fn fiat(&self) -> Option<String> {
        self.lowercase_param(param::FIAT)
    }

    /// Writes or removes `fiat`, stored lowercased.
    pub fn set_fiat(&mut self, value: Option<&str>) {
        let lower = value.map(str::to_lowercase);
        self.set_param(param::FIAT, lower.as_deref());
    }

    /// Returns the asset and fiat pair.
    #[must_use]
    pub fn currency(&self) -> Currency {
        Currency {
            asset: self.asset(),
            fiat: self.fiat(),
        }
    }

    /// Writes the asset and fiat, and the number when `value` is given.
    ///
    /// A `None` asset or fiat removes that part; a `None` value keeps the
    /// current number. An asset with no number to go with it is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use payto_uri::Payto;
    ///
    /// let mut payto = Payto::parse("payto://xcb/address?amount=ctn:10.01&fiat=eur").unwrap();
    /// payto.set_currency(Some("xxx"), Some("USD"), Some(20.02));
    /// assert_eq!(payto.href(), "payto://xcb/address?amount=xxx:20.02&fiat=usd");
    ///
    /// payto.set_currency(None, None, None);
    /// assert_eq!(payto.href(), "payto://xcb/address?amount=20.02");
    /// ```
    pub fn set_currency(&mut self, asset: Option<&str>, fiat: Option<&str>, value: Option<f64>) {
        let mut query = self.query();
        let mut amount = Amount::parse(query.get(param::AMOUNT).unwrap_or_default());
        if let Some(value) = value.filter(|v| v.is_finite()) {
            amount.set_value(value);
        }
        let amount_changed = match asset.filter(|a| !a.is_empty() && !amount.has_number()) {
            Some(asset) => {
                cleared("asset", asset);
                false
            }
            None => {
                amount.set_token(asset);
                put(&mut query, param::AMOUNT, amount.to_raw().as_deref())
            }
        };
        let fiat = fiat.map(str::to_lowercase);

        let fiat_changed = put(&mut query, param::FIAT, fiat.as_deref());
        if amount_changed || fiat_changed {
            self.write_query(&query);
        }
    }

    /// Returns the `dl` deadline as a Unix timestamp in seconds.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.param(param::DEADLINE)
            .filter(|dl| patterns::UNIX_TIMESTAMP.is_match(dl))
            .and_then(|dl| dl.parse().ok())
    }

    /// Writes or removes the deadline.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidDeadline`] for a negative timestamp.
    pub fn set_deadline(&mut self, value: Option<i64>) -> Result<(), FieldError> {
        match value {
            Some(dl) if dl < 0 => Err(reject("deadline", FieldError::InvalidDeadline { value: dl })),
            Some(dl) => {
                self.set_param(param::DEADLINE, Some(&dl.to_string()));
                Ok(())
            }
            None => {
                self.set_param(param::DEADLINE, None);
                Ok(())
            }
        }
    }

    /// Returns the `donate` flag: `1` is true, `0` is false.
    #[must_use]
    pub fn donate(&self) -> Option<bool> {
        self.flag(param::DONATE)
    }

    /// Writes `donate=1` for `Some(true)`, otherwise removes the flag.
    pub fn set_donate(&mut self, value: Option<bool>) {
        self.set_flag(param::DONATE, value);
    }

    /// Returns the `rtl` flag: `1` is true, `0` is false.
    #[must_use]
    pub fn rtl(&self) -> Option<bool> {
        self.flag(param::RTL)
    }

    /// Writes `rtl=1` for `Some(true)`, otherwise removes the flag.
    pub fn set_rtl(&mut self, value: Option<bool>) {
        self.set_flag(param::RTL, value);
    }

    /// Returns the `loc` parameter.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        self.param(param::LOCATION)
    }

    /// Writes or removes `loc`.
    ///
    /// A location needs a void sub-type; `geo` and `plus` sub-types also fix
    /// its format.
    ///
    /// # Errors
    ///
    /// - [`FieldError::VoidTypeNotSet`] if the URI has no void sub-type
    /// - [`FieldError::InvalidGeoLocation`] or [`FieldError::InvalidPlusCode`]
    ///   if the value does not fit the sub-type
    pub fn set_location(&mut self, value: Option<&str>) -> Result<(), FieldError> {
        let Some(location) = value.filter(|v| !v.is_empty()) else {
            self.set_param(param::LOCATION, None);
            return Ok(());
        };
        let kind = self
            .void_kind()
            .ok_or_else(|| reject("location", FieldError::VoidTypeNotSet))?;
        kind.validate_location(location)
            .map_err(|e| reject("location", e))?;
        self.set_param(param::LOCATION, Some(location));
        Ok(())
    }

    /// Returns the parsed `split` parameter.
    #[must_use]
    pub fn split(&self) -> Option<Split> {
        self.param(param::SPLIT).as_deref().and_then(Split::parse)
    }

    /// Writes or removes `split`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::IncompleteSplit`] if the receiver or the amount is empty.
    pub fn set_split(&mut self, value: Option<&Split>) -> Result<(), FieldError> {
        match value {
            Some(split) if !split.is_complete() => {
                Err(reject("split", FieldError::IncompleteSplit))
            }
            Some(split) => {
                self.set_param(param::SPLIT, Some(&split.to_string()));
                Ok(())
            }
            None => {
                self.set_param(param::SPLIT, None);
                Ok(())
            }
        }
    }

    /// Returns the lowercased `color-b` background color.
    ///
    /// The stored text is returned as is; only writes are checked.
    #[must_use]
    pub fn color_background(&self) -> Option<String> {
        self.lowercase_param(param::COLOR_BACKGROUND)
    }

    /// Writes `color-b`; anything but six hex digits removes it.
    pub fn set_color_background(&mut self, value: Option<&str>) {
        self.set_color("color background", param::COLOR_BACKGROUND, value);
    }

    /// Returns the lowercased `color-f` foreground color.
    #[must_use]
    pub fn color_foreground(&self) -> Option<String> {
        self.lowercase_param(param::COLOR_FOREGROUND)
    }

    /// Writes `color-f`; anything but six hex digits removes it.
    pub fn set_color_foreground(&mut self, value: Option<&str>) {
        self.set_color("color foreground", param::COLOR_FOREGROUND, value);
    }

    /// Returns the `org` parameter.
    #[must_use]
    pub fn organization(&self) -> Option<String> {
        self.param(param::ORGANIZATION)
    }

    /// Writes `org`; values over 25 characters remove it.
    pub fn set_organization(&mut self, value: Option<&str>) {
        self.set_bounded(
            "organization",
            param::ORGANIZATION,
            MAX_ORGANIZATION_LENGTH,
            value,
        );
    }

    /// Returns the `item` parameter.
    #[must_use]
    pub fn item(&self) -> Option<String> {
        self.param(param::ITEM)
    }

    /// Writes `item`; values over 40 characters remove it.
    pub fn set_item(&mut self, value: Option<&str>) {
        self.set_bounded("item", param::ITEM, MAX_ITEM_LENGTH, value);
    }

    /// Returns the `message` parameter.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.param(param::MESSAGE)
    }

    /// Writes or removes `message`.
    pub fn set_message(&mut self, value: Option<&str>) {
        self.set_param(param::MESSAGE, value);
    }

    /// Returns the `receiver-name` parameter.
    #[must_use]
    pub fn receiver_name(&self) -> Option<String> {
        self.param(param::RECEIVER_NAME)
    }

    /// Writes or removes `receiver-name`.
    pub fn set_receiver_name(&mut self, value: Option<&str>) {
        self.set_param(param::RECEIVER_NAME, value);
    }

    /// Returns the lowercased `rc` recurrence.
    #[must_use]
    pub fn recurring(&self) -> Option<String> {
        self.lowercase_param(param::RECURRING)
    }

    /// Writes or removes `rc`.
    pub fn set_recurring(&mut self, value: Option<&str>) {
        self.set_param(param::RECURRING, value);
    }

    /// Returns the lowercased `barcode` type.
    #[must_use]
    pub fn barcode(&self) -> Option<String> {
        self.lowercase_param(param::BARCODE)
    }

    /// Writes or removes `barcode`.
    pub fn set_barcode(&mut self, value: Option<&str>) {
        self.set_param(param::BARCODE, value);
    }

    /// Returns the lowercased `swap` target.
    #[must_use]
    pub fn swap(&self) -> Option<String> {
        self.lowercase_param(param::SWAP)
    }

    /// Writes or removes `swap`, stored lowercased.
    pub fn set_swap(&mut self, value: Option<&str>) {
        let lower = value.map(str::to_lowercase);
        self.set_param(param::SWAP, lower.as_deref());
    }

    /// Returns the lowercased `mode`.
    #[must_use]
    pub fn mode(&self) -> Option<String> {
        self.lowercase_param(param::MODE)
    }

    /// Writes or removes `mode`, stored lowercased.
    pub fn set_mode(&mut self, value: Option<&str>) {
        let lower = value.map(str::to_lowercase);
        self.set_param(param::MODE, lower.as_deref());
    }

    /// Returns the lowercased `lang` tag.
    #[must_use]
    pub fn lang(&self) -> Option<String> {
        self.lowercase_param(param::LANG)
    }

    /// Writes or removes `lang`, stored lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidLanguage`] unless the value is `xx` or `xx-YY`.
    pub fn set_lang(&mut self, value: Option<&str>) -> Result<(), FieldError> {
        let Some(lang) = value.filter(|v| !v.is_empty()) else {
            self.set_param(param::LANG, None);
            return Ok(());
        };
        if !patterns::LANGUAGE.is_match(lang) {
            return Err(reject(
                "lang",
                FieldError::InvalidLanguage {
                    value: lang.to_string(),
                },
            ));
        }
        self.set_param(param::LANG, Some(&lang.to_lowercase()));
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use crate::error::FieldError;
    use crate::payto::Payto;
    use crate::split::Split;

    const XCB: &str = "payto://xcb/cb7147879011ea207df5b35a24ca6f0859dcfb145999?amount=ctn:10.01&fiat=eur";

    fn payto(input: &str) -> Payto {
        Payto::parse(input).unwrap()
    }

    #[test]
    fn amount_views() {
        let uri = payto(XCB);
        assert_eq!(uri.amount().as_deref(), Some("ctn:10.01"));
        assert_eq!(uri.asset().as_deref(), Some("ctn"));
        assert_eq!(uri.value(), Some(10.01));
        assert_eq!(uri.fiat().as_deref(), Some("eur"));
    }

    #[test]
    fn set_asset_keeps_number() {
        let mut uri = payto(XCB);
        uri.set_asset(Some("xxx"));
        assert_eq!(uri.amount().as_deref(), Some("xxx:10.01"));
        uri.set_asset(None);
        assert_eq!(uri.amount().as_deref(), Some("10.01"));
    }

    #[test]
    fn set_value_keeps_token() {
        let mut uri = payto("payto://xcb/address?amount=usd:20");
        uri.set_value(Some(50.0));
        assert_eq!(uri.amount().as_deref(), Some("usd:50"));
        uri.set_value(None);
        uri.set_value(Some(f64::NAN));
        assert_eq!(uri.href(), "payto://xcb/address?amount=usd:50");
        assert_eq!(uri.value(), Some(50.0));
    }

    #[test]
    fn asset_needs_a_number() {
        let mut uri = payto("payto://xcb/address");
        uri.set_asset(Some("xxx"));
        assert_eq!(uri.amount(), None);

        uri.set_currency(Some("xxx"), Some("eur"), None);
        assert_eq!(uri.href(), "payto://xcb/address?fiat=eur");

        let mut uri = payto("payto://xcb/address?amount=ctn");
        uri.set_asset(Some("xxx"));
        assert_eq!(uri.amount().as_deref(), Some("ctn"));
        uri.set_asset(None);
        assert_eq!(uri.amount(), None);
    }

    #[test]
    fn set_value_on_empty_amount() {
        let mut uri = payto("payto://xcb/address");
        uri.set_value(Some(15.5));
        assert_eq!(uri.href(), "payto://xcb/address?amount=15.5");
    }

    #[test]
    fn currency_round_trip() {
        let mut uri = payto(XCB);
        uri.set_currency(Some("xxx"), Some("usd"), Some(20.02));
        assert_eq!(uri.amount().as_deref(), Some("xxx:20.02"));
        assert_eq!(uri.fiat().as_deref(), Some("usd"));

        uri.set_currency(Some("yyy"), Some("czk"), None);
        assert_eq!(uri.amount().as_deref(), Some("yyy:20.02"));
        assert_eq!(uri.value(), Some(20.02));

        uri.set_currency(None, None, None);
        let currency = uri.currency();
        assert!(currency.is_empty());
        assert_eq!(uri.amount().as_deref(), Some("20.02"));
    }

    #[test]
    fn deadline() {
        let mut uri = payto("payto://xcb/address?dl=1735689600");
        assert_eq!(uri.deadline(), Some(1_735_689_600));

        uri.set_deadline(Some(1_767_225_600)).unwrap();
        assert_eq!(uri.search(), Some("dl=1767225600"));

        assert!(matches!(
            uri.set_deadline(Some(-1)),
            Err(FieldError::InvalidDeadline { value: -1 })
        ));
        uri.set_deadline(None).unwrap();
        assert_eq!(uri.search(), None);
    }

    #[test]
    fn malformed_deadline_reads_none() {
        assert_eq!(payto("payto://xcb/address?dl=soon").deadline(), None);
    }

    #[test]
    fn flags() {
        let mut uri = payto("payto://xcb/address?donate=1&rtl=0");
        assert_eq!(uri.donate(), Some(true));
        assert_eq!(uri.rtl(), Some(false));

        uri.set_donate(Some(false));
        uri.set_rtl(Some(true));
        assert_eq!(uri.search(), Some("rtl=1"));
        assert_eq!(uri.donate(), None);
    }

    #[test]
    fn location_requires_void() {
        let mut uri = payto("payto://xcb/address");
        assert_eq!(
            uri.set_location(Some("51.5074,0.1278")),
            Err(FieldError::VoidTypeNotSet)
        );
        assert_eq!(uri.search(), None);
    }

    #[test]
    fn location_by_void_kind() {
        let mut geo = payto("payto://void/geo");
        geo.set_location(Some("51.5074,0.1278")).unwrap();
        assert_eq!(geo.location().as_deref(), Some("51.5074,0.1278"));
        assert!(matches!(
            geo.set_location(Some("91.0000,0.1278")),
            Err(FieldError::InvalidGeoLocation { .. })
        ));

        let mut plus = payto("payto://void/plus");
        plus.set_location(Some("8FVC9G8V+R9")).unwrap();
        assert_eq!(plus.search(), Some("loc=8FVC9G8V%2BR9"));
        assert_eq!(plus.location().as_deref(), Some("8FVC9G8V+R9"));

        let mut custom = payto("payto://void/custom");
        custom.set_location(Some("anywhere")).unwrap();
        custom.set_location(None).unwrap();
        assert_eq!(custom.location(), None);
    }

    #[test]
    fn split_read_and_write() {
        let mut uri = payto("payto://xcb/address");
        uri.set_split(Some(&Split::new("receiver123", "50", true))).unwrap();
        assert_eq!(uri.search(), Some("split=p:50@receiver123"));
        assert_eq!(uri.split(), Some(Split::new("receiver123", "50", true)));

        assert_eq!(
            uri.set_split(Some(&Split::new("", "50", false))),
            Err(FieldError::IncompleteSplit)
        );
        uri.set_split(None).unwrap();
        assert_eq!(uri.split(), None);
    }

    #[test]
    fn colors_are_normalized() {
        let mut uri = payto("payto://xcb/address");
        uri.set_color_background(Some("FF0000"));
        uri.set_color_foreground(Some("00ff00"));
        assert_eq!(uri.color_background().as_deref(), Some("ff0000"));
        assert_eq!(uri.search(), Some("color-b=ff0000&color-f=00ff00"));

        uri.set_color_background(Some("red"));
        assert_eq!(uri.color_background(), None);
        assert_eq!(uri.search(), Some("color-f=00ff00"));
    }

    #[test]
    fn stored_colors_read_unfiltered() {
        let uri = payto("payto://xcb/address?color-b=%23FF0000&color-f=Blue");
        assert_eq!(uri.color_background().as_deref(), Some("#ff0000"));
        assert_eq!(uri.color_foreground().as_deref(), Some("blue"));
    }

    #[test]
    fn bounded_text_fields() {
        let mut uri = payto("payto://xcb/address");
        uri.set_organization(Some("Acme Corp"));
        uri.set_item(Some("Coffee"));
        assert_eq!(uri.organization().as_deref(), Some("Acme Corp"));
        assert_eq!(uri.item().as_deref(), Some("Coffee"));

        uri.set_organization(Some(&"x".repeat(26)));
        uri.set_item(Some(&"y".repeat(41)));
        assert_eq!(uri.organization(), None);
        assert_eq!(uri.item(), None);
    }

    #[test]
    fn free_text_fields() {
        let mut uri = payto("payto://xcb/address");
        uri.set_message(Some("fish & chips"));
        uri.set_receiver_name(Some("Zoë"));
        assert_eq!(uri.message().as_deref(), Some("fish & chips"));
        assert_eq!(uri.receiver_name().as_deref(), Some("Zoë"));
        assert_eq!(
            uri.search(),
            Some("message=fish+%26+chips&receiver-name=Zo%C3%AB")
        );
    }

    #[test]
    fn lowercased_fields() {
        let mut uri = payto("payto://xcb/address?barcode=QR&rc=Monthly");
        assert_eq!(uri.barcode().as_deref(), Some("qr"));
        assert_eq!(uri.recurring().as_deref(), Some("monthly"));

        uri.set_swap(Some("BTC"));
        uri.set_mode(Some("QR"));
        uri.set_fiat(Some("USD"));
        assert_eq!(uri.swap().as_deref(), Some("btc"));
        assert_eq!(uri.mode().as_deref(), Some("qr"));
        assert_eq!(uri.fiat().as_deref(), Some("usd"));
    }

    #[test]
    fn language() {
        let mut uri = payto("payto://xcb/address");
        uri.set_lang(Some("en-US")).unwrap();
        assert_eq!(uri.lang().as_deref(), Some("en-us"));
        assert!(matches!(
            uri.set_lang(Some("English")),
            Err(FieldError::InvalidLanguage { .. })
        ));
        uri.set_lang(None).unwrap();
        assert_eq!(uri.lang(), None);
    }
}
