//! Per-field validation rules
//!
//! Each rule is a pure predicate over the field's current text. The email
//! and phone patterns are deliberately loose shape checks: leading-zero
//! phone numbers are rejected and any `x@y.z` shape is an email.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern is a valid regex")
});

const MIN_NAME_LEN: usize = 2;
const MIN_NAME_TOKENS: usize = 2;
const MIN_AGE: i64 = 13;
const MAX_AGE: i64 = 120;
const MIN_PASSWORD_LEN: usize = 8;

/// A full name: at least two whitespace-separated words
pub fn validate_name(value: &str) -> bool {
    let name = value.trim();
    name.chars().count() >= MIN_NAME_LEN && name.split_whitespace().count() >= MIN_NAME_TOKENS
}

pub fn validate_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

/// Optional field. Spaces, hyphens and parentheses are ignored.
pub fn validate_phone(value: &str) -> bool {
    let phone = value.trim();
    if phone.is_empty() {
        return true;
    }

    let digits: String = phone
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')')))
        .collect();
    PHONE_PATTERN.is_match(&digits)
}

pub fn validate_age(value: &str) -> bool {
    parse_leading_int(value).is_some_and(|age| (MIN_AGE..=MAX_AGE).contains(&age))
}

/// Password strength check. The value is taken as typed, without trimming.
pub fn validate_password(value: &str) -> bool {
    if value.chars().any(is_line_break) {
        return false;
    }

    // Length in UTF-16 code units
    value.encode_utf16().count() >= MIN_PASSWORD_LEN
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
}

/// Both values are compared exactly as typed.
pub fn validate_confirm_password(password: &str, confirm: &str) -> bool {
    password == confirm
}

/// Parse the integer prefix of `value`, ignoring anything after the digits.
///
/// A `0x`/`0X` prefix after the optional sign switches to hexadecimal.
/// Returns `None` when no digits follow the sign and prefix, or when the
/// number does not fit in an `i64`.
fn parse_leading_int(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&rest[..end], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests {
    use super::*;

    mod name_tests {
        use super::*;

        #[test]
        fn test_two_words_is_valid() {
            assert!(validate_name("Ada Lovelace"));
            assert!(validate_name("Jo Li"));
            assert!(validate_name("a b"));
        }

        #[test]
        fn test_more_than_two_words_is_valid() {
            assert!(validate_name("Grace Brewster Murray Hopper"));
        }

        #[test]
        fn test_single_word_is_invalid() {
            assert!(!validate_name("Ada"));
            assert!(!validate_name("AdaLovelace"));
        }

        #[test]
        fn test_surrounding_whitespace_is_trimmed() {
            assert!(!validate_name("   Ada   "));
            assert!(validate_name("  Ada Lovelace  "));
        }

        #[test]
        fn test_empty_and_blank_are_invalid() {
            assert!(!validate_name(""));
            assert!(!validate_name("     "));
            assert!(!validate_name("a"));
        }

        #[test]
        fn test_repeated_inner_spaces_still_two_tokens() {
            assert!(validate_name("Ada    Lovelace"));
        }
    }

    mod email_tests {
        use super::*;

        #[test]
        fn test_minimal_shape_is_valid() {
            assert!(validate_email("a@b.com"));
            assert!(validate_email("first.last@sub.example.org"));
        }

        #[test]
        fn test_missing_dot_is_invalid() {
            assert!(!validate_email("a@b"));
        }

        #[test]
        fn test_nothing_after_dot_is_invalid() {
            assert!(!validate_email("a@b."));
        }

        #[test]
        fn test_empty_is_invalid() {
            assert!(!validate_email(""));
        }

        #[test]
        fn test_inner_space_is_invalid() {
            assert!(!validate_email("a b@c.com"));
            assert!(!validate_email("a@b c.com"));
        }

        #[test]
        fn test_double_at_is_invalid() {
            assert!(!validate_email("a@@b.com"));
            assert!(!validate_email("a@b@c.com"));
        }

        #[test]
        fn test_outer_whitespace_is_trimmed() {
            assert!(validate_email("  a@b.com  "));
        }
    }

    mod phone_tests {
        use super::*;

        #[test]
        fn test_empty_is_valid() {
            assert!(validate_phone(""));
            assert!(validate_phone("   "));
        }

        #[test]
        fn test_plus_prefix_is_valid() {
            assert!(validate_phone("+12345"));
        }

        #[test]
        fn test_leading_zero_is_invalid() {
            assert!(!validate_phone("0123"));
            assert!(!validate_phone("+0123"));
        }

        #[test]
        fn test_sixteen_digits_is_max() {
            assert!(validate_phone("1234567890123456"));
            assert!(!validate_phone("12345678901234567"));
        }

        #[test]
        fn test_separators_are_ignored() {
            assert!(validate_phone("(555) 123-4567"));
            assert!(validate_phone("+1 (555) 123 4567"));
        }

        #[test]
        fn test_letters_are_invalid() {
            assert!(!validate_phone("555-CALL-NOW"));
        }

        #[test]
        fn test_only_separators_is_invalid() {
            assert!(!validate_phone("---"));
            assert!(!validate_phone("()"));
        }

        #[test]
        fn test_plus_in_middle_is_invalid() {
            assert!(!validate_phone("12+345"));
        }
    }

    mod age_tests {
        use super::*;

        #[test]
        fn test_bounds_are_inclusive() {
            assert!(validate_age("13"));
            assert!(validate_age("120"));
        }

        #[test]
        fn test_outside_bounds_is_invalid() {
            assert!(!validate_age("12"));
            assert!(!validate_age("121"));
            assert!(!validate_age("-20"));
        }

        #[test]
        fn test_non_numeric_is_invalid() {
            assert!(!validate_age("abc"));
            assert!(!validate_age(""));
            assert!(!validate_age("-"));
        }

        #[test]
        fn test_integer_prefix_is_used() {
            assert!(validate_age("30 years"));
            assert!(validate_age("13.9"));
            assert!(!validate_age("12.9"));
        }

        #[test]
        fn test_leading_whitespace_and_sign() {
            assert!(validate_age("  25"));
            assert!(validate_age("+25"));
        }

        #[test]
        fn test_overflow_is_invalid() {
            assert!(!validate_age("99999999999999999999999"));
            assert!(!validate_age("0xffffffffffffffffff"));
        }

        #[test]
        fn test_hex_prefix_is_parsed_as_hex() {
            assert!(validate_age("0x10"));
            assert!(validate_age("0X1e"));
            assert!(!validate_age("0x0c"));
            assert!(!validate_age("0x"));
            assert!(!validate_age("-0x10"));
        }

        #[test]
        fn test_leading_zeros_stay_decimal() {
            assert!(validate_age("013"));
            assert!(validate_age("0080"));
        }
    }

    mod password_tests {
        use super::*;

        #[test]
        fn test_all_classes_and_length_is_valid() {
            assert!(validate_password("Abcdefg1"));
            assert!(validate_password("1abcdefG"));
        }

        #[test]
        fn test_length_counts_utf16_units() {
            // Each emoji is two UTF-16 units, so this is eight units long
            assert!(validate_password("Abc1😀😀"));
            assert!(!validate_password("Abc1é"));
        }

        #[test]
        fn test_missing_uppercase_is_invalid() {
            assert!(!validate_password("abcdefg1"));
        }

        #[test]
        fn test_missing_lowercase_is_invalid() {
            assert!(!validate_password("ABCDEFG1"));
        }

        #[test]
        fn test_missing_digit_is_invalid() {
            assert!(!validate_password("Abcdefgh"));
        }

        #[test]
        fn test_too_short_is_invalid() {
            assert!(!validate_password("Abc123"));
            assert!(!validate_password("Abcde12"));
        }

        #[test]
        fn test_symbols_and_spaces_count_towards_length() {
            assert!(validate_password("A b1 $$$"));
        }

        #[test]
        fn test_line_break_is_invalid() {
            assert!(!validate_password("Abcdefg1\n"));
        }
    }

    mod confirm_password_tests {
        use super::*;

        #[test]
        fn test_equal_values_match() {
            assert!(validate_confirm_password("X", "X"));
            assert!(validate_confirm_password("", ""));
        }

        #[test]
        fn test_different_values_do_not_match() {
            assert!(!validate_confirm_password("X", "Y"));
        }

        #[test]
        fn test_comparison_is_not_trimmed() {
            assert!(!validate_confirm_password("Secret12", "Secret12 "));
        }
    }
}
