//! Field-format predicates.
//!
//! Pure, stateless and total. The patterns are load-bearing compatibility
//! surface; they must match the documented formats bit-for-bit.

use std::sync::LazyLock;

use regex::Regex;

static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9]\d{9}$").expect("mobile pattern"));

static PAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("PAN pattern"));

static AADHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{12}$").expect("Aadhar pattern"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Ten digits, first in 6..=9.
pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_RE.is_match(mobile)
}

/// Five uppercase letters, four digits, one uppercase letter.
/// Case-sensitive by design.
pub fn is_valid_pan(pan: &str) -> bool {
    PAN_RE.is_match(pan)
}

/// Twelve digits after stripping internal whitespace
/// (the number is commonly typed as `1234 5678 9012`).
pub fn is_valid_aadhar(aadhar: &str) -> bool {
    let stripped: String = aadhar.chars().filter(|c| !c.is_whitespace()).collect();
    AADHAR_RE.is_match(&stripped)
}

/// RFC-lite address check: local@domain with a dot in the domain and no
/// whitespace or stray `@` anywhere. Deliberately not full RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_accepts_ten_digits_starting_six_to_nine() {
        assert!(is_valid_mobile("9876543210"));
        assert!(is_valid_mobile("6000000000"));
    }

    #[test]
    fn mobile_rejects_bad_leading_digit_and_length() {
        assert!(!is_valid_mobile("1234567890"));
        assert!(!is_valid_mobile("98765432"));
        assert!(!is_valid_mobile("98765432100"));
        assert!(!is_valid_mobile(""));
    }

    #[test]
    fn pan_matches_the_fixed_shape() {
        assert!(is_valid_pan("ABCDE1234F"));
    }

    #[test]
    fn pan_is_case_sensitive_and_position_strict() {
        assert!(!is_valid_pan("abcde1234f"));
        assert!(!is_valid_pan("ABCD12345F"));
        assert!(!is_valid_pan("ABCDE1234FX"));
    }

    #[test]
    fn aadhar_strips_whitespace_before_checking() {
        assert!(is_valid_aadhar("123456789012"));
        assert!(is_valid_aadhar("1234 5678 9012"));
        assert!(!is_valid_aadhar("1234 5678 901"));
        assert!(!is_valid_aadhar("12345678901a"));
    }

    #[test]
    fn email_requires_dot_in_domain_and_no_whitespace() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a.b+c@mail.co.in"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user example@x.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("@example.com"));
    }
}
