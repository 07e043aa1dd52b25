//! Phone type value object

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Kind of phone number attached to an entry.
///
/// Stored and submitted by its variant name (`"Work"`, `"Home"`, `"Other"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PhoneType {
    Work,
    Home,
    Other,
}

impl PhoneType {
    /// Get all phone types for form dropdowns
    pub fn all() -> &'static [PhoneType] {
        &[PhoneType::Work, PhoneType::Home, PhoneType::Other]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneType::Work => "Work",
            PhoneType::Home => "Home",
            PhoneType::Other => "Other",
        }
    }
}

impl fmt::Display for PhoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhoneType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Work" => Ok(PhoneType::Work),
            "Home" => Ok(PhoneType::Home),
            "Other" => Ok(PhoneType::Other),
            _ => Err(DomainError::parse(format!("Unknown phone type: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_variant_names() {
        for phone_type in PhoneType::all() {
            assert_eq!(phone_type.as_str().parse::<PhoneType>(), Ok(*phone_type));
        }
    }

    #[test]
    fn rejects_other_spellings() {
        assert!("work".parse::<PhoneType>().is_err());
        assert!("Mobile".parse::<PhoneType>().is_err());
        assert!(" Home".parse::<PhoneType>().is_err());
    }

    #[test]
    fn serializes_as_variant_name() {
        let json = serde_json::to_string(&PhoneType::Home).expect("serialize");
        assert_eq!(json, "\"Home\"");
    }
}
