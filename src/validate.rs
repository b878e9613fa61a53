//! Pattern validators for contact details and vehicle identifiers.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PHONE_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]{9,14}$").expect("valid phone pattern"));

static VIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-HJ-NPR-Z0-9]{17}$").expect("valid vin pattern"));

/// `local@domain.tld` shape; no whitespace and exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// 10 to 15 digits once punctuation is stripped, not starting with 0.
pub fn is_valid_phone_number(phone: &str) -> bool {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    PHONE_DIGITS.is_match(&digits)
}

/// 17 characters, letters and digits only, never I, O or Q.
pub fn is_valid_vin(vin: &str) -> bool {
    VIN.is_match(vin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails() {
        assert!(is_valid_email("dispatch@acme-logistics.com"));
        assert!(is_valid_email("a.b+c@sub.example.co"));
        assert!(!is_valid_email("dispatch@localhost"));
        assert!(!is_valid_email("no at sign.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaced name@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn phone_numbers() {
        assert!(is_valid_phone_number("(555) 123-4567"));
        assert!(is_valid_phone_number("+44 20 7946 0958"));
        assert!(is_valid_phone_number("123456789012345"));
        assert!(!is_valid_phone_number("555-1234"));
        assert!(!is_valid_phone_number("1234567890123456"));
        assert!(!is_valid_phone_number("0123456789"));
        assert!(!is_valid_phone_number(""));
    }

    #[test]
    fn vins() {
        assert!(is_valid_vin("1FUJGLDR5CLBP8834"));
        assert!(is_valid_vin("1fujgldr5clbp8834"));
        assert!(!is_valid_vin("1FUJGLDR5CLBP883"));
        assert!(!is_valid_vin("1FUJGLDR5CLBP88345"));
        assert!(!is_valid_vin("1FUJGLDR5CLBP883I"));
        assert!(!is_valid_vin("1FUJGLDR5CLBP883O"));
        assert!(!is_valid_vin("1FUJGLDR5CLBP883q"));
        assert!(!is_valid_vin("1FUJGLDR5CLBP88-4"));
    }
}
