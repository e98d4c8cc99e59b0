//! Country selection values

use std::fmt;

/// A selectable country.
///
/// The listed West African codes plus a generic [`CountryCode::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryCode {
    Ng,
    Gh,
    Ci,
    Sn,
    Ml,
    Ne,
    Bf,
    Tg,
    Bj,
    Gm,
    Gn,
    Gw,
    Lr,
    Sl,
    Cv,
    Cm,
    Cg,
    Other,
}

/// Postal-code rule applied for a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostalRule {
    /// Exactly six digits.
    SixDigits,
    /// Ghana digital address, or any non-empty value.
    GhanaDigitalAddress,
    /// Any non-empty value.
    NonEmpty,
}

impl CountryCode {
    /// Selectable countries, in the order a view should offer them.
    pub const ALL: [CountryCode; 18] = [
        CountryCode::Ng,
        CountryCode::Gh,
        CountryCode::Ci,
        CountryCode::Sn,
        CountryCode::Ml,
        CountryCode::Ne,
        CountryCode::Bf,
        CountryCode::Tg,
        CountryCode::Bj,
        CountryCode::Gm,
        CountryCode::Gn,
        CountryCode::Gw,
        CountryCode::Lr,
        CountryCode::Sl,
        CountryCode::Cv,
        CountryCode::Cm,
        CountryCode::Cg,
        CountryCode::Other,
    ];

    /// Interprets a raw country value.
    ///
    /// Returns `None` when no country is selected. Values outside the list
    /// are treated as [`CountryCode::Other`]. Matching is exact, as the raw
    /// value comes from a fixed option list.
    pub fn from_value(value: &str) -> Option<Self> {
        if value.is_empty() {
            return None;
        }
        Some(
            Self::ALL
                .into_iter()
                .find(|code| code.value() == value)
                .unwrap_or(Self::Other),
        )
    }

    /// The raw option value (`NG`, `GH`, ..., `other`).
    pub fn value(self) -> &'static str {
        match self {
            Self::Ng => "NG",
            Self::Gh => "GH",
            Self::Ci => "CI",
            Self::Sn => "SN",
            Self::Ml => "ML",
            Self::Ne => "NE",
            Self::Bf => "BF",
            Self::Tg => "TG",
            Self::Bj => "BJ",
            Self::Gm => "GM",
            Self::Gn => "GN",
            Self::Gw => "GW",
            Self::Lr => "LR",
            Self::Sl => "SL",
            Self::Cv => "CV",
            Self::Cm => "CM",
            Self::Cg => "CG",
            Self::Other => "other",
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ng => "Nigeria",
            Self::Gh => "Ghana",
            Self::Ci => "Côte d'Ivoire",
            Self::Sn => "Senegal",
            Self::Ml => "Mali",
            Self::Ne => "Niger",
            Self::Bf => "Burkina Faso",
            Self::Tg => "Togo",
            Self::Bj => "Benin",
            Self::Gm => "Gambia",
            Self::Gn => "Guinea",
            Self::Gw => "Guinea-Bissau",
            Self::Lr => "Liberia",
            Self::Sl => "Sierra Leone",
            Self::Cv => "Cape Verde",
            Self::Cm => "Cameroon",
            Self::Cg => "Congo",
            Self::Other => "Other",
        }
    }

    /// The postal-code rule for this country.
    pub fn postal_rule(self) -> PostalRule {
        match self {
            Self::Ng => PostalRule::SixDigits,
            Self::Gh => PostalRule::GhanaDigitalAddress,
            _ => PostalRule::NonEmpty,
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value() {
        assert_eq!(CountryCode::from_value(""), None);
        assert_eq!(CountryCode::from_value("NG"), Some(CountryCode::Ng));
        assert_eq!(CountryCode::from_value("CG"), Some(CountryCode::Cg));
        assert_eq!(CountryCode::from_value("other"), Some(CountryCode::Other));
        assert_eq!(CountryCode::from_value("FR"), Some(CountryCode::Other));
        // option values are case-sensitive
        assert_eq!(CountryCode::from_value("ng"), Some(CountryCode::Other));
    }

    #[test]
    fn test_values_round_trip() {
        for code in CountryCode::ALL {
            assert_eq!(CountryCode::from_value(code.value()), Some(code));
        }
    }

    #[test]
    fn test_postal_rules() {
        assert_eq!(CountryCode::Ng.postal_rule(), PostalRule::SixDigits);
        assert_eq!(CountryCode::Gh.postal_rule(), PostalRule::GhanaDigitalAddress);
        let non_empty = CountryCode::ALL
            .into_iter()
            .filter(|c| c.postal_rule() == PostalRule::NonEmpty)
            .count();
        // 15 listed codes plus the generic sentinel
        assert_eq!(non_empty, 16);
    }
}
