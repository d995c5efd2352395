//! Identity validation
//!
//! Pure predicates over usernames and card numbers. No side effects.

use regex::Regex;
use std::sync::LazyLock;

/// Username pattern: 4-15 characters from letters, digits, underscore, hyphen
static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{4,15}$").unwrap());

/// Test card numbers accepted in place of a real card-network lookup.
///
/// Deliberately a stub: no Luhn or issuer validation.
const TEST_CARD_NUMBERS: [&str; 2] = ["4111111111111111", "4242424242424242"];

/// Check whether `username` is a valid username
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_PATTERN.is_match(username)
}

/// Check whether `number` is an accepted credit card number
pub fn is_valid_credit_card_number(number: &str) -> bool {
    TEST_CARD_NUMBERS.contains(&number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(is_valid_username("Bobby"));
        assert!(is_valid_username("ab_1"));
        assert!(is_valid_username("user-name_01"));
        assert!(is_valid_username("ABCDEFGHIJKLMNO")); // 15 chars
    }

    #[test]
    fn test_username_length_bounds() {
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("abc")); // 3 chars
        assert!(!is_valid_username("ABCDEFGHIJKLMNOP")); // 16 chars
    }

    #[test]
    fn test_username_disallowed_characters() {
        assert!(!is_valid_username("Bobby$"));
        assert!(!is_valid_username("bob by"));
        assert!(!is_valid_username("user.name"));
        assert!(!is_valid_username("Bobby\n"));
    }

    #[test]
    fn test_card_allow_list() {
        assert!(is_valid_credit_card_number("4111111111111111"));
        assert!(is_valid_credit_card_number("4242424242424242"));
        assert!(!is_valid_credit_card_number("4000000000000000"));
        assert!(!is_valid_credit_card_number(""));
    }
}
