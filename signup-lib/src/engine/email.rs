use std::sync::LazyLock;

use regex::Regex;

use crate::verdict::{FailureReason, FieldVerdict};

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";

// One `@`, at least one `.` after it, no whitespace anywhere.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern"));

/// Validates an email address after trimming surrounding whitespace.
pub fn validate_email(value: &str) -> FieldVerdict {
    let email = value.trim();
    if email.is_empty() {
        return FieldVerdict::required(EMAIL_REQUIRED);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return FieldVerdict::invalid(FailureReason::FormatInvalid, EMAIL_INVALID);
    }
    FieldVerdict::valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        for value in ["", "   ", "\t\n"] {
            let verdict = validate_email(value);
            assert!(!verdict.valid);
            assert_eq!(verdict.message, "Email is required");
            assert_eq!(verdict.reason, Some(FailureReason::Required));
        }
    }

    #[test]
    fn test_valid_addresses() {
        for value in [
            "user@example.com",
            "first.last@sub.domain.org",
            "a@b.c",
            "  padded@example.com  ",
            "x+tag@mail.co.uk",
        ] {
            assert!(validate_email(value).valid, "{value} should be valid");
        }
    }

    #[test]
    fn test_invalid_addresses() {
        for value in [
            "plainaddress",
            "missing-dot@domain",
            "@example.com",
            "user@.com",
            "user@example.",
            "two@@example.com",
            "a@b@c.com",
            "has space@example.com",
            "user@exa mple.com",
        ] {
            let verdict = validate_email(value);
            assert!(!verdict.valid, "{value} should be invalid");
            assert_eq!(verdict.message, "Please enter a valid email address");
            assert_eq!(verdict.reason, Some(FailureReason::FormatInvalid));
        }
    }

    #[test]
    fn test_dot_must_follow_at() {
        assert!(!validate_email("first.last@localhost").valid);
    }
}
