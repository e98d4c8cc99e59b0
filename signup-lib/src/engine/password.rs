use crate::verdict::{FailureReason, FieldVerdict};

pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_UNMET_PREFIX: &str = "Password must contain: ";

const MIN_LENGTH: usize = 8;
const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// A single password rule.
///
/// Declared in the order unmet rules are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRequirement {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl PasswordRequirement {
    pub const ALL: [PasswordRequirement; 5] = [
        PasswordRequirement::MinLength,
        PasswordRequirement::Uppercase,
        PasswordRequirement::Lowercase,
        PasswordRequirement::Digit,
        PasswordRequirement::Special,
    ];

    /// Description used in the composite error message.
    pub fn description(self) -> &'static str {
        match self {
            Self::MinLength => "at least 8 characters",
            Self::Uppercase => "one uppercase letter",
            Self::Lowercase => "one lowercase letter",
            Self::Digit => "one number",
            Self::Special => "one special character",
        }
    }

    pub fn is_met(self, password: &str) -> bool {
        match self {
            // length in UTF-16 code units
            Self::MinLength => password.encode_utf16().count() >= MIN_LENGTH,
            Self::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Self::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Self::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Self::Special => password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        }
    }
}

/// Every rule the password fails, checked independently.
pub fn unmet_requirements(password: &str) -> Vec<PasswordRequirement> {
    PasswordRequirement::ALL
        .into_iter()
        .filter(|requirement| !requirement.is_met(password))
        .collect()
}

/// Validates a password against all rules. The value is not trimmed.
pub fn validate_password(value: &str) -> FieldVerdict {
    if value.is_empty() {
        return FieldVerdict::required(PASSWORD_REQUIRED);
    }

    let unmet = unmet_requirements(value);
    if unmet.is_empty() {
        return FieldVerdict::valid();
    }

    let list: Vec<&str> = unmet.iter().map(|r| r.description()).collect();
    FieldVerdict::invalid(
        FailureReason::CompositeUnmet,
        format!("{PASSWORD_UNMET_PREFIX}{}", list.join(", ")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let verdict = validate_password("");
        assert_eq!(verdict.message, "Password is required");
        assert_eq!(verdict.reason, Some(FailureReason::Required));
    }

    #[test]
    fn test_strong_password() {
        assert!(validate_password("Abc12345!").valid);
        assert!(validate_password("Zz9{long enough}").valid);
    }

    #[test]
    fn test_lists_all_unmet_rules_in_order() {
        let verdict = validate_password("abc");
        assert!(!verdict.valid);
        assert_eq!(verdict.reason, Some(FailureReason::CompositeUnmet));
        assert_eq!(
            verdict.message,
            "Password must contain: at least 8 characters, one uppercase letter, one number, one special character"
        );
    }

    #[test]
    fn test_single_unmet_rule() {
        assert_eq!(
            validate_password("Abcdefg1").message,
            "Password must contain: one special character"
        );
        assert_eq!(
            validate_password("ABCDEFG1!").message,
            "Password must contain: one lowercase letter"
        );
        assert_eq!(
            validate_password("Abc1!").message,
            "Password must contain: at least 8 characters"
        );
    }

    #[test]
    fn test_whitespace_only_password() {
        let verdict = validate_password("        ");
        assert_eq!(
            verdict.message,
            "Password must contain: one uppercase letter, one lowercase letter, one number, one special character"
        );
    }

    #[test]
    fn test_special_character_set() {
        for c in SPECIAL_CHARACTERS.chars() {
            let password = format!("Abcdefg1{c}");
            assert!(validate_password(&password).valid, "{c} not accepted");
        }
        // not in the accepted set
        for c in ['-', '_', '+', '=', '~', '[', ']', '/', '\\', '\'', ';'] {
            let password = format!("Abcdefg1{c}");
            assert!(!validate_password(&password).valid, "{c} accepted");
        }
    }

    #[test]
    fn test_non_ascii_letters_do_not_count() {
        let unmet = unmet_requirements("ÄÖÜäöü12!");
        assert_eq!(
            unmet,
            vec![PasswordRequirement::Uppercase, PasswordRequirement::Lowercase]
        );
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // each emoji is two UTF-16 units
        assert!(validate_password("Ab1!😀😀").valid);
        assert_eq!(
            validate_password("Ab1!😀").message,
            "Password must contain: at least 8 characters"
        );
        assert_eq!(
            validate_password("Ab1!ééé").message,
            "Password must contain: at least 8 characters"
        );
    }
}
