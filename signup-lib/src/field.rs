//! Form fields and raw values

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseFieldError;

/// A field of the registration form.
///
/// Variants are declared in form order, which is also the order fields are
/// validated and rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Email,
    Country,
    PostalCode,
    Password,
    ConfirmPassword,
}

impl FieldName {
    /// All fields, in form order.
    pub const ALL: [FieldName; 5] = [
        FieldName::Email,
        FieldName::Country,
        FieldName::PostalCode,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// Stable identifier used by views (`email`, `postalCode`, ...).
    pub fn id(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Country => "country",
            Self::PostalCode => "postalCode",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email Address",
            Self::Country => "Country",
            Self::PostalCode => "Postal Code",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FieldName {
    type Err = ParseFieldError;

    /// Accepts ids case-insensitively, ignoring `-` and `_` separators, so
    /// `postalCode`, `postal-code` and `POSTAL_CODE` are the same field.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        FieldName::ALL
            .into_iter()
            .find(|field| field.id().to_lowercase() == normalized)
            .ok_or_else(|| ParseFieldError::new(s))
    }
}

/// Raw, unvalidated field values of a form session.
///
/// Fields that were never set read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    values: HashMap<FieldName, String>,
}

impl FormValues {
    /// Creates an empty set of values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Returns the raw value of a field.
    pub fn get(&self, field: FieldName) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Replaces the raw value of a field.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Blanks every field.
    pub fn clear(&mut self) {
        for field in FieldName::ALL {
            self.values.insert(field, String::new());
        }
    }

    /// True if no field holds a non-empty value.
    pub fn is_blank(&self) -> bool {
        self.values.values().all(String::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_names() {
        assert_eq!("email".parse::<FieldName>().unwrap(), FieldName::Email);
        assert_eq!("postalCode".parse::<FieldName>().unwrap(), FieldName::PostalCode);
        assert_eq!("postal-code".parse::<FieldName>().unwrap(), FieldName::PostalCode);
        assert_eq!(
            "CONFIRM_PASSWORD".parse::<FieldName>().unwrap(),
            FieldName::ConfirmPassword
        );
        assert!("username".parse::<FieldName>().is_err());
    }

    #[test]
    fn test_display_uses_id() {
        assert_eq!(FieldName::ConfirmPassword.to_string(), "confirmPassword");
    }

    #[test]
    fn test_missing_values_read_empty() {
        let values = FormValues::new().with(FieldName::Email, "a@b.co");
        assert_eq!(values.get(FieldName::Email), "a@b.co");
        assert_eq!(values.get(FieldName::Password), "");
    }

    #[test]
    fn test_clear_blanks_all_fields() {
        let mut values = FormValues::new()
            .with(FieldName::Email, "a@b.co")
            .with(FieldName::Country, "NG");
        assert!(!values.is_blank());

        values.clear();
        assert!(values.is_blank());
        for field in FieldName::ALL {
            assert_eq!(values.get(field), "");
        }
    }

    #[test]
    fn test_serde_keys_match_ids() {
        for field in FieldName::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.id()));
        }
    }

    #[test]
    fn test_values_json_round_trip() {
        let values = FormValues::new()
            .with(FieldName::PostalCode, "104101")
            .with(FieldName::ConfirmPassword, "Abc12345!");

        let json = serde_json::to_string(&values).unwrap();
        assert!(json.contains("\"postalCode\":\"104101\""));
        assert!(json.contains("\"confirmPassword\":\"Abc12345!\""));

        let parsed: FormValues = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, values);

        let parsed: FormValues = serde_json::from_str(r#"{ "email": "ada@example.com" }"#).unwrap();
        assert_eq!(parsed.get(FieldName::Email), "ada@example.com");
        assert_eq!(parsed.get(FieldName::Country), "");
    }
}
