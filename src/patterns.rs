//! Compiled format rules for strictly validated fields.

use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    // Patterns are literals below; a failure here is a programming error.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern}: {e}"))
}

/// 8 or 11 character Business Identifier Code, any case.
pub(crate) static BIC: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^[A-Z]{6}[A-Z0-9]{2}([A-Z0-9]{3})?$"));

/// Country code, check digits, then 12 to 30 alphanumerics, any case.
pub(crate) static IBAN: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^[A-Z]{2}[0-9]{2}[A-Z0-9]{12,30}$"));

pub(crate) static ROUTING_NUMBER: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]{9}$"));

pub(crate) static ACH_ACCOUNT_NUMBER: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]{7,14}$"));

pub(crate) static INTRA_ACCOUNT_NUMBER: Lazy<Regex> =
    Lazy::new(|| compile(r"^[A-Za-z0-9._-]+$"));

pub(crate) static UNIX_TIMESTAMP: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]+$"));

pub(crate) static EMAIL: Lazy<Regex> =
    Lazy::new(|| compile(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"));

/// `latitude,longitude` with latitude in [-90, 90] and longitude in [-180, 180].
pub(crate) static GEO_LOCATION: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"^[+-]?(?:90(?:\.0{1,9})?|(?:[0-9]|[1-8][0-9])(?:\.[0-9]{1,9})?),",
        r"[+-]?(?:180(?:\.0{1,9})?|(?:[0-9]|[1-9][0-9]|1[0-7][0-9])(?:\.[0-9]{1,9})?)$",
    ))
});

/// Open Location Code, full or short form.
pub(crate) static PLUS_CODE: Lazy<Regex> = Lazy::new(|| {
    compile(r"^[23456789CFGHJMPQRVWX]{2,8}\+[23456789CFGHJMPQRVWX]{2,7}$")
});

pub(crate) static HEX_COLOR: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9a-fA-F]{6}$"));

/// Lowercase language code with an optional region of either case.
pub(crate) static LANGUAGE: Lazy<Regex> = Lazy::new(|| compile(r"^[a-z]{2}(?:-[a-zA-Z]{2})?$"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bic_accepts_eight_and_eleven_chars() {
        assert!(BIC.is_match("DEUTDEFF"));
        assert!(BIC.is_match("DEUTDEFF500"));
        assert!(BIC.is_match("pingchb2"));
        assert!(!BIC.is_match("INVALID"));
        assert!(!BIC.is_match("DEUTDEFF5"));
    }

    #[test]
    fn iban_shape() {
        assert!(IBAN.is_match("DE89370400440532013000"));
        assert!(IBAN.is_match("gb29nwbk60161331926819"));
        assert!(!IBAN.is_match("DEUTDEFF"));
        assert!(!IBAN.is_match("XXX"));
    }

    #[test]
    fn geo_location_ranges() {
        assert!(GEO_LOCATION.is_match("51.5074,0.1278"));
        assert!(GEO_LOCATION.is_match("51.507400000,0.127800000"));
        assert!(GEO_LOCATION.is_match("40.712800000,-74.006000000"));
        assert!(GEO_LOCATION.is_match("-90,180"));
        assert!(!GEO_LOCATION.is_match("91.0000,0.1278"));
        assert!(!GEO_LOCATION.is_match("51.5074,181.0000"));
        assert!(!GEO_LOCATION.is_match("90.1,0"));
        assert!(!GEO_LOCATION.is_match("invalid"));
    }

    #[test]
    fn plus_code_alphabet() {
        assert!(PLUS_CODE.is_match("8FVC9G8V+R9"));
        assert!(!PLUS_CODE.is_match("INVALID+CODE"));
        assert!(!PLUS_CODE.is_match("8FVC9G8VR9"));
    }

    #[test]
    fn language_tags() {
        for ok in ["en", "en-US", "en-us", "en-Us", "zh-CN"] {
            assert!(LANGUAGE.is_match(ok), "{ok}");
        }
        for bad in ["e", "eng", "EN", "En", "EN-US", "en-USA", "en-US-EXTRA", "invalid"] {
            assert!(!LANGUAGE.is_match(bad), "{bad}");
        }
    }

    #[test]
    fn email_shape() {
        assert!(EMAIL.is_match("user@example.com"));
        assert!(!EMAIL.is_match("invalid-email"));
    }
}
