//! Field classifiers.
//!
//! Each classifier is a pure predicate over the text of a single field. They
//! are deliberately cheap heuristics: a match means "plausibly this category",
//! not "validated". Digit classes are Unicode-aware and lengths are counted in
//! Unicode scalar values.

use std::sync::LazyLock;

use regex::Regex;

macro_rules! field_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

field_pattern!(RE_PHONE, r"^\d{10}$");
field_pattern!(RE_NATIONAL_ID, r"^\d{12}$");
field_pattern!(RE_TRAVEL_DOCUMENT, r"^[A-Z][0-9]{7}$");
field_pattern!(RE_EMAIL, r"^[^@]+@[^@]+\.[^@]+$");
field_pattern!(RE_DIGIT, r"\d");
// Matched against the value with a trailing '.', so every group ends in a dot
// and a fifth or empty group cannot sneak through.
field_pattern!(
    RE_IPV4_DOTTED,
    r"^(?:(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)\.){4}$"
);

const ADDRESS_KEYWORDS: [&str; 6] = ["road", "street", "avenue", "lane", "block", "sector"];
const DEVICE_PREFIXES: [&str; 3] = ["dev", "mob", "tab"];
const DEVICE_MIN_LEN: usize = 6;

fn matches(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}

/// Exactly ten decimal digits.
pub fn is_phone(text: &str) -> bool {
    matches(&RE_PHONE, text)
}

/// Exactly twelve decimal digits.
pub fn is_national_id(text: &str) -> bool {
    matches(&RE_NATIONAL_ID, text)
}

/// One uppercase letter followed by seven digits, e.g. `A1234567`.
pub fn is_travel_document(text: &str) -> bool {
    matches(&RE_TRAVEL_DOCUMENT, text)
}

/// Any text containing `@`.
pub fn is_payment_handle(text: &str) -> bool {
    text.contains('@')
}

/// `local@domain.tld` with exactly one `@` and a dot somewhere after it.
pub fn is_email(text: &str) -> bool {
    matches(&RE_EMAIL, text)
}

/// A comma, a digit, or a street keyword anywhere in the text.
pub fn is_address(text: &str) -> bool {
    if text.contains(',') || matches(&RE_DIGIT, text) {
        return true;
    }
    let lowered = text.to_lowercase();
    ADDRESS_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// Dotted-quad IPv4 address with every octet in `0..=255` and no leading zeros.
pub fn is_ip_address(text: &str) -> bool {
    let dotted = format!("{text}.");
    matches(&RE_IPV4_DOTTED, &dotted)
}

/// A known device prefix, or any text of six or more characters.
///
/// The length fallback makes this match most longer strings.
pub fn is_device_id(text: &str) -> bool {
    let lowered = text.to_lowercase();
    DEVICE_PREFIXES.iter().any(|p| lowered.starts_with(p))
        || text.chars().count() >= DEVICE_MIN_LEN
}

/// Two or more whitespace-separated words.
pub fn is_name(text: &str) -> bool {
    text.split_whitespace().nth(1).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_requires_exactly_ten_digits() {
        assert!(is_phone("9876543210"));
        assert!(!is_phone("987654321"));
        assert!(!is_phone("98765432101"));
        assert!(!is_phone("98765-43210"));
        assert!(!is_phone("9876543210\n"));
        assert!(!is_phone(""));
    }

    #[test]
    fn national_id_requires_exactly_twelve_digits() {
        assert!(is_national_id("123456789012"));
        assert!(!is_national_id("1234 5678 9012"));
        assert!(!is_national_id("12345678901"));
    }

    #[test]
    fn travel_document_is_letter_then_seven_digits() {
        assert!(is_travel_document("A1234567"));
        assert!(!is_travel_document("a1234567"));
        assert!(!is_travel_document("AB123456"));
        assert!(!is_travel_document("A12345678"));
    }

    #[test]
    fn payment_handle_only_needs_an_at_sign() {
        assert!(is_payment_handle("user123@paytm"));
        assert!(is_payment_handle("@"));
        assert!(!is_payment_handle("user123"));
    }

    #[test]
    fn email_needs_single_at_and_dotted_domain() {
        assert!(is_email("john@test.com"));
        assert!(is_email("first.last@mail.co.in"));
        assert!(!is_email("john@test"));
        assert!(!is_email("john@@test.com"));
        assert!(!is_email("@test.com"));
        assert!(!is_email("john@.com"));
        assert!(!is_email("john@test."));
    }

    #[test]
    fn address_accepts_comma_digit_or_keyword() {
        assert!(is_address("Flat 4"));
        assert!(is_address("Near temple, Pune"));
        assert!(is_address("MG ROAD"));
        assert!(is_address("Sector Seven"));
        assert!(!is_address("Pune"));
        assert!(!is_address(""));
    }

    #[test]
    fn ip_address_needs_four_octets_in_range() {
        assert!(is_ip_address("192.168.1.1"));
        assert!(is_ip_address("0.0.0.0"));
        assert!(is_ip_address("255.255.255.255"));
        assert!(!is_ip_address("999.999.999.999"));
        assert!(!is_ip_address("256.1.1.1"));
        assert!(!is_ip_address("1.2.3"));
        assert!(!is_ip_address("1.2.3.4.5"));
        assert!(!is_ip_address("1.2.3.4."));
        assert!(!is_ip_address("1..3.4"));
        assert!(!is_ip_address("01.2.3.4"));
        assert!(!is_ip_address(""));
    }

    #[test]
    fn device_id_is_permissive() {
        assert!(is_device_id("dev1"));
        assert!(is_device_id("MOB"));
        assert!(is_device_id("Tablet"));
        assert!(is_device_id("abcdef"));
        assert!(is_device_id("Mumbai"));
        assert!(!is_device_id("abcde"));
        assert!(!is_device_id(""));
    }

    #[test]
    fn name_needs_two_words() {
        assert!(is_name("John Doe"));
        assert!(is_name("  A   B  "));
        assert!(!is_name("John"));
        assert!(!is_name("   "));
        assert!(!is_name(""));
    }
}
