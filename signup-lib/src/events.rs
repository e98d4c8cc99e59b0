//! Form events and the fields each one re-validates.

use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::error::ParseEventError;
use crate::field::FieldName;

/// How a field was touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The value was edited.
    Input,
    /// The field lost focus.
    Blur,
    /// A selection changed.
    Change,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Input => "input",
            Self::Blur => "blur",
            Self::Change => "change",
        };
        f.write_str(name)
    }
}

impl FromStr for EventKind {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "input" => Ok(Self::Input),
            "blur" => Ok(Self::Blur),
            "change" => Ok(Self::Change),
            _ => Err(ParseEventError::new(s)),
        }
    }
}

/// An event delivered by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormEvent {
    Input(FieldName),
    Blur(FieldName),
    Change(FieldName),
    Submit,
}

impl FormEvent {
    /// Builds a field event of the given kind.
    pub fn field(kind: EventKind, field: FieldName) -> Self {
        match kind {
            EventKind::Input => Self::Input(field),
            EventKind::Blur => Self::Blur(field),
            EventKind::Change => Self::Change(field),
        }
    }

    /// The field the event targets; `None` for submit.
    pub fn target(&self) -> Option<FieldName> {
        match self {
            Self::Input(field) | Self::Blur(field) | Self::Change(field) => Some(*field),
            Self::Submit => None,
        }
    }

    /// Fields to re-validate for a live event, in order.
    ///
    /// Text fields listen for input and blur. The country selection listens
    /// for change, which also refreshes the postal code, and for blur, which
    /// does not. Unlisted combinations and submit validate nothing here.
    pub fn fields_to_validate(&self) -> &'static [FieldName] {
        use FieldName::*;

        let fields: &'static [FieldName] = match self {
            Self::Input(Email) | Self::Blur(Email) => &[Email],
            Self::Change(Country) => &[Country, PostalCode],
            Self::Blur(Country) => &[Country],
            Self::Input(PostalCode) | Self::Blur(PostalCode) => &[PostalCode],
            Self::Input(Password) | Self::Blur(Password) => &[Password],
            Self::Input(ConfirmPassword) | Self::Blur(ConfirmPassword) => &[ConfirmPassword],
            _ => &[],
        };
        trace!("{:?} -> {:?}", self, fields);
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_change_revalidates_postal_code() {
        assert_eq!(
            FormEvent::Change(FieldName::Country).fields_to_validate(),
            &[FieldName::Country, FieldName::PostalCode]
        );
        assert_eq!(
            FormEvent::Blur(FieldName::Country).fields_to_validate(),
            &[FieldName::Country]
        );
    }

    #[test]
    fn test_text_fields_validate_themselves() {
        for field in [
            FieldName::Email,
            FieldName::PostalCode,
            FieldName::Password,
            FieldName::ConfirmPassword,
        ] {
            assert_eq!(FormEvent::Input(field).fields_to_validate(), &[field]);
            assert_eq!(FormEvent::Blur(field).fields_to_validate(), &[field]);
        }
    }

    #[test]
    fn test_unwired_events() {
        assert!(FormEvent::Input(FieldName::Country).fields_to_validate().is_empty());
        assert!(FormEvent::Change(FieldName::Email).fields_to_validate().is_empty());
        assert!(FormEvent::Submit.fields_to_validate().is_empty());
    }

    #[test]
    fn test_parse_event_kind() {
        assert_eq!("Blur".parse::<EventKind>().unwrap(), EventKind::Blur);
        assert_eq!(
            FormEvent::field("change".parse().unwrap(), FieldName::Country),
            FormEvent::Change(FieldName::Country)
        );
        assert!("focus".parse::<EventKind>().is_err());
    }

    #[test]
    fn test_target() {
        assert_eq!(FormEvent::Input(FieldName::Email).target(), Some(FieldName::Email));
        assert_eq!(FormEvent::Submit.target(), None);
    }
}
