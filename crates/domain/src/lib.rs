//! Agenda domain: contact entries and the rules their fields must satisfy.

pub mod entities;
pub mod error;
pub mod ids;
pub mod validation;
pub mod value_objects;

pub use entities::{ContactDetails, ContactInput, Entry};
pub use error::DomainError;
pub use ids::EntryId;
pub use validation::{validate_contact, ContactField, FieldRule, CONTACT_RULES};
pub use value_objects::PhoneType;
