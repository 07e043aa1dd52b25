//! Contact entry entity

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::EntryId;
use crate::validation::{validate_contact, ContactField};
use crate::value_objects::PhoneType;

/// Raw, unvalidated contact fields as submitted by a form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub last_name: String,
    pub address: String,
    pub email: String,
    pub phone_number: String,
    pub phone_type: String,
}

impl ContactInput {
    /// Raw value submitted for `field`.
    pub fn value_of(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::LastName => &self.last_name,
            ContactField::Address => &self.address,
            ContactField::Email => &self.email,
            ContactField::PhoneNumber => &self.phone_number,
            ContactField::PhoneType => &self.phone_type,
        }
    }
}

/// The six editable fields of an entry, each known to satisfy its rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    name: String,
    last_name: String,
    address: String,
    email: String,
    phone_number: String,
    phone_type: PhoneType,
}

impl ContactDetails {
    /// Validate raw input against the field rules.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidField` for the first field that does not
    /// match its rule. No field is checked after the first failure.
    pub fn validate(input: ContactInput) -> Result<Self, DomainError> {
        validate_contact(&input)?;
        let phone_type = input.phone_type.parse()?;
        Ok(Self {
            name: input.name,
            last_name: input.last_name,
            address: input.address,
            email: input.email,
            phone_number: input.phone_number,
            phone_type,
        })
    }

    /// Rebuild details from a persisted row.
    ///
    /// Rows were validated on the way in, so only the phone type is parsed.
    pub fn from_stored(
        name: String,
        last_name: String,
        address: String,
        email: String,
        phone_number: String,
        phone_type: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            name,
            last_name,
            address,
            email,
            phone_number,
            phone_type: phone_type.parse()?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn phone_type(&self) -> PhoneType {
        self.phone_type
    }
}

/// One contact record in the agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: EntryId,
    #[serde(flatten)]
    pub details: ContactDetails,
}

impl Entry {
    pub fn new(id: EntryId, details: ContactDetails) -> Self {
        Self { id, details }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ContactInput {
        ContactInput {
            name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            address: "1 Main St".to_string(),
            email: "jane@doe.com".to_string(),
            phone_number: "555-1234".to_string(),
            phone_type: "Home".to_string(),
        }
    }

    #[test]
    fn validate_keeps_values_verbatim() {
        let details = ContactDetails::validate(input()).expect("valid input");
        assert_eq!(details.name(), "Jane");
        assert_eq!(details.last_name(), "Doe");
        assert_eq!(details.address(), "1 Main St");
        assert_eq!(details.email(), "jane@doe.com");
        assert_eq!(details.phone_number(), "555-1234");
        assert_eq!(details.phone_type(), PhoneType::Home);
    }

    #[test]
    fn validate_rejects_digit_in_name() {
        let mut bad = input();
        bad.name = "Jane2".to_string();
        assert_eq!(
            ContactDetails::validate(bad),
            Err(DomainError::invalid_field(ContactField::Name))
        );
    }

    #[test]
    fn validate_rejects_unknown_phone_type() {
        let mut bad = input();
        bad.phone_type = "Mobile".to_string();
        assert_eq!(
            ContactDetails::validate(bad),
            Err(DomainError::invalid_field(ContactField::PhoneType))
        );
    }

    #[test]
    fn from_stored_rejects_unknown_phone_type() {
        let result = ContactDetails::from_stored(
            "Jane".into(),
            "Doe".into(),
            "1 Main St".into(),
            "jane@doe.com".into(),
            "555-1234".into(),
            "Pager",
        );
        assert!(matches!(result, Err(DomainError::Parse(_))));
    }

    #[test]
    fn entry_serializes_flat() {
        let entry = Entry::new(
            EntryId::from_i64(7),
            ContactDetails::validate(input()).expect("valid input"),
        );
        let json = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Jane");
        assert_eq!(json["phone_type"], "Home");
    }
}
