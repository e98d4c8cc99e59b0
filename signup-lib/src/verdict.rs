//! Validation verdicts for single fields and whole forms.

use std::collections::BTreeMap;

use crate::field::FieldName;

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The field is empty.
    Required,
    /// The value does not match the expected pattern.
    FormatInvalid,
    /// The value disagrees with another field.
    CrossFieldMismatch,
    /// One or more composite rules are unmet.
    CompositeUnmet,
}

/// Result of validating a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldVerdict {
    /// Whether the field passed.
    pub valid: bool,
    /// Error message; empty when valid.
    pub message: String,
    /// Failure reason; `None` when valid.
    pub reason: Option<FailureReason>,
}

impl FieldVerdict {
    /// A passing verdict.
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: String::new(),
            reason: None,
        }
    }

    /// A failing verdict.
    pub fn invalid(reason: FailureReason, message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
            reason: Some(reason),
        }
    }

    /// Shorthand for a [`FailureReason::Required`] failure.
    pub fn required(message: impl Into<String>) -> Self {
        Self::invalid(FailureReason::Required, message)
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Result of validating every field of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormVerdict {
    fields: BTreeMap<FieldName, FieldVerdict>,
}

impl FormVerdict {
    /// Creates an empty verdict.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the verdict for a field.
    pub fn insert(&mut self, field: FieldName, verdict: FieldVerdict) {
        self.fields.insert(field, verdict);
    }

    /// Verdict for a field, if it was validated.
    pub fn get(&self, field: FieldName) -> Option<&FieldVerdict> {
        self.fields.get(&field)
    }

    /// True if every recorded field passed.
    pub fn all_valid(&self) -> bool {
        self.fields.values().all(FieldVerdict::is_valid)
    }

    /// Iterates verdicts in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldVerdict)> {
        self.fields.iter().map(|(field, verdict)| (*field, verdict))
    }

    /// Fields that failed, in form order.
    pub fn invalid_fields(&self) -> Vec<FieldName> {
        self.iter()
            .filter(|(_, verdict)| !verdict.valid)
            .map(|(field, _)| field)
            .collect()
    }

    /// The first failing field and its verdict (for focusing).
    pub fn first_invalid(&self) -> Option<(FieldName, &FieldVerdict)> {
        self.iter().find(|(_, verdict)| !verdict.valid)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_valid_is_conjunction() {
        let mut verdict = FormVerdict::new();
        verdict.insert(FieldName::Email, FieldVerdict::valid());
        verdict.insert(FieldName::Country, FieldVerdict::valid());
        assert!(verdict.all_valid());

        verdict.insert(
            FieldName::Password,
            FieldVerdict::required("Password is required"),
        );
        assert!(!verdict.all_valid());
        assert_eq!(verdict.invalid_fields(), vec![FieldName::Password]);
    }

    #[test]
    fn test_first_invalid_follows_form_order() {
        let mut verdict = FormVerdict::new();
        verdict.insert(
            FieldName::ConfirmPassword,
            FieldVerdict::invalid(FailureReason::CrossFieldMismatch, "Passwords do not match"),
        );
        verdict.insert(
            FieldName::Email,
            FieldVerdict::required("Email is required"),
        );

        let (field, first) = verdict.first_invalid().unwrap();
        assert_eq!(field, FieldName::Email);
        assert_eq!(first.reason, Some(FailureReason::Required));
    }

    #[test]
    fn test_valid_verdict_has_empty_message() {
        let verdict = FieldVerdict::valid();
        assert!(verdict.is_valid());
        assert!(verdict.message.is_empty());
        assert_eq!(verdict.reason, None);
    }
}
