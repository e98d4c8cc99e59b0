use std::sync::LazyLock;

use regex::Regex;

use crate::country::{CountryCode, PostalRule};
use crate::verdict::{FailureReason, FieldVerdict};

pub const POSTAL_REQUIRED: &str = "Postal code is required";
pub const POSTAL_NIGERIA: &str = "Postal code must be 6 digits (Nigeria)";
pub const POSTAL_GHANA: &str = "Enter a valid Ghana digital address or any non-empty value";

static SIX_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("Invalid regex pattern"));

static GHANA_DIGITAL_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z]{2}-?[0-9]{3,4}-?[0-9]{3,4}$").expect("Invalid regex pattern")
});

/// Validates a postal code for the selected country.
///
/// The value is trimmed and upper-cased before any rule runs. `country` is
/// the raw country value; an empty or unknown value falls back to the
/// non-empty rule.
pub fn validate_postal_code(value: &str, country: &str) -> FieldVerdict {
    let postal_code = value.trim().to_uppercase();
    if postal_code.is_empty() {
        return FieldVerdict::required(POSTAL_REQUIRED);
    }

    let rule = CountryCode::from_value(country)
        .map(CountryCode::postal_rule)
        .unwrap_or(PostalRule::NonEmpty);

    match rule {
        PostalRule::SixDigits => {
            if SIX_DIGITS.is_match(&postal_code) {
                FieldVerdict::valid()
            } else {
                FieldVerdict::invalid(FailureReason::FormatInvalid, POSTAL_NIGERIA)
            }
        }
        PostalRule::GhanaDigitalAddress => {
            // Any non-empty value passes, so the address format never rejects.
            if GHANA_DIGITAL_ADDRESS.is_match(&postal_code) || !postal_code.is_empty() {
                FieldVerdict::valid()
            } else {
                FieldVerdict::invalid(FailureReason::FormatInvalid, POSTAL_GHANA)
            }
        }
        PostalRule::NonEmpty => FieldVerdict::valid(),
    }
}
