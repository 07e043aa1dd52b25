//! Unified error types for the domain layer
//!
//! Provides a common error type for domain operations so adapters can match on
//! the failure instead of passing strings around.

use thiserror::Error;

use crate::validation::ContactField;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A contact field did not match its rule
    #[error("Invalid value for field {field}")]
    InvalidField { field: ContactField },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates an invalid field error for a value that failed its rule.
    pub fn invalid_field(field: ContactField) -> Self {
        Self::InvalidField { field }
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for PhoneType {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "Work" => Ok(Self::Work),
    ///             _ => Err(DomainError::parse(format!("Unknown phone type: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_error() {
        let err = DomainError::invalid_field(ContactField::Email);
        assert!(matches!(
            err,
            DomainError::InvalidField {
                field: ContactField::Email
            }
        ));
        assert_eq!(err.to_string(), "Invalid value for field email");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown phone type: Mobile");
        assert!(matches!(err, DomainError::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: Unknown phone type: Mobile");
    }
}
