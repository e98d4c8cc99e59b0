//! Field validation rules.
//!
//! Every function here is pure: it reads the raw values it is given and
//! returns a fresh [`FieldVerdict`].
//!
//! # Example
//!
//! ```
//! use signup_lib::engine;
//!
//! assert!(engine::validate_postal_code("123456", "NG").valid);
//! assert!(!engine::validate_email("not-an-email").valid);
//! ```

mod email;
mod password;
mod postal;

pub use email::validate_email;
pub use password::{PasswordRequirement, unmet_requirements, validate_password};
pub use postal::validate_postal_code;

use log::debug;

use crate::field::{FieldName, FormValues};
use crate::verdict::{FailureReason, FieldVerdict};

pub const COUNTRY_REQUIRED: &str = "Please select a country";
pub const CONFIRM_REQUIRED: &str = "Please confirm your password";
pub const PASSWORDS_MISMATCH: &str = "Passwords do not match";

/// Requires a country selection. Any non-empty value is accepted.
pub fn validate_country(value: &str) -> FieldVerdict {
    if value.is_empty() {
        return FieldVerdict::required(COUNTRY_REQUIRED);
    }
    FieldVerdict::valid()
}

/// Requires the confirmation to be present and identical to the password.
pub fn validate_confirm_password(password: &str, confirm_password: &str) -> FieldVerdict {
    if confirm_password.is_empty() {
        return FieldVerdict::required(CONFIRM_REQUIRED);
    }
    if password != confirm_password {
        return FieldVerdict::invalid(FailureReason::CrossFieldMismatch, PASSWORDS_MISMATCH);
    }
    FieldVerdict::valid()
}

/// Validates one field against the current values, including the values of
/// the fields its rule depends on.
pub fn validate_field(field: FieldName, values: &FormValues) -> FieldVerdict {
    let verdict = match field {
        FieldName::Email => validate_email(values.get(FieldName::Email)),
        FieldName::Country => validate_country(values.get(FieldName::Country)),
        FieldName::PostalCode => validate_postal_code(
            values.get(FieldName::PostalCode),
            values.get(FieldName::Country),
        ),
        FieldName::Password => validate_password(values.get(FieldName::Password)),
        FieldName::ConfirmPassword => validate_confirm_password(
            values.get(FieldName::Password),
            values.get(FieldName::ConfirmPassword),
        ),
    };
    debug!("validated {}: valid={} {:?}", field, verdict.valid, verdict.message);
    verdict
}
