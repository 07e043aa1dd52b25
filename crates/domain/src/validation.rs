//! Field rules for contact entries.
//!
//! Every editable field of an entry has exactly one rule in [`CONTACT_RULES`].
//! A value is valid when the whole string matches the rule's pattern; nothing
//! is trimmed or normalized first. The same table serves the add and edit
//! flows.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::entities::ContactInput;
use crate::error::DomainError;

const PERSON_NAME_PATTERN: &str = r"^[a-zA-Z'\s-]+$";
const ADDRESS_PATTERN: &str = r"^[a-zA-Z0-9'\s.#-]+$";
const EMAIL_PATTERN: &str = r"^[\w.-]+@[a-zA-Z_]+\.[a-zA-Z]{2,3}$";
// Optional "52" country code with area code, then 3 + 4 digits.
const PHONE_NUMBER_PATTERN: &str = r"^((52)?(-?\d{3})-?)?\d{3}-?\d{4}$";
const PHONE_TYPE_PATTERN: &str = r"^(Work|Home|Other)$";

/// The editable fields of a contact entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    LastName,
    Address,
    Email,
    PhoneNumber,
    PhoneType,
}

impl ContactField {
    /// Column / form input name for the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::LastName => "last_name",
            ContactField::Address => "address",
            ContactField::Email => "email",
            ContactField::PhoneNumber => "phone_number",
            ContactField::PhoneType => "phone_type",
        }
    }

    /// The rule that governs this field, looked up by field rather than position.
    pub fn rule(&self) -> Option<&'static FieldRule> {
        CONTACT_RULES.iter().find(|rule| rule.field == *self)
    }

    /// Returns true iff `value` fully matches this field's pattern.
    ///
    /// A field without a rule accepts nothing.
    pub fn is_valid(&self, value: &str) -> bool {
        self.rule().is_some_and(|rule| rule.matches(value))
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named validation rule: one field, one anchored pattern.
pub struct FieldRule {
    pub field: ContactField,
    pub pattern: &'static str,
    regex: LazyLock<Regex>,
}

impl FieldRule {
    const fn new(field: ContactField, pattern: &'static str, compile: fn() -> Regex) -> Self {
        Self {
            field,
            pattern,
            regex: LazyLock::new(compile),
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("field", &self.field)
            .field("pattern", &self.pattern)
            .finish()
    }
}

/// Rule table, in the order fields are checked.
pub static CONTACT_RULES: [FieldRule; 6] = [
    FieldRule::new(ContactField::Name, PERSON_NAME_PATTERN, || {
        Regex::new(PERSON_NAME_PATTERN).expect("valid regex")
    }),
    FieldRule::new(ContactField::LastName, PERSON_NAME_PATTERN, || {
        Regex::new(PERSON_NAME_PATTERN).expect("valid regex")
    }),
    FieldRule::new(ContactField::Address, ADDRESS_PATTERN, || {
        Regex::new(ADDRESS_PATTERN).expect("valid regex")
    }),
    FieldRule::new(ContactField::Email, EMAIL_PATTERN, || {
        Regex::new(EMAIL_PATTERN).expect("valid regex")
    }),
    FieldRule::new(ContactField::PhoneNumber, PHONE_NUMBER_PATTERN, || {
        Regex::new(PHONE_NUMBER_PATTERN).expect("valid regex")
    }),
    FieldRule::new(ContactField::PhoneType, PHONE_TYPE_PATTERN, || {
        Regex::new(PHONE_TYPE_PATTERN).expect("valid regex")
    }),
];

/// Checks every field of `input` against its rule.
///
/// Stops at the first failing field and reports it.
pub fn validate_contact(input: &ContactInput) -> Result<(), DomainError> {
    for rule in CONTACT_RULES.iter() {
        if !rule.matches(input.value_of(rule.field)) {
            return Err(DomainError::invalid_field(rule.field));
        }
    }
    Ok(())
}
