//! Error types for port boundaries.

use agenda_domain::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Database operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// A stored row could not be turned back into an entry.
    #[error("Could not decode stored row: {0}")]
    Decode(String),
}

impl RepoError {
    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Decode error.
    pub fn decode(message: impl ToString) -> Self {
        Self::Decode(message.to_string())
    }
}

impl From<DomainError> for RepoError {
    fn from(e: DomainError) -> Self {
        Self::decode(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_error_names_operation() {
        let err = RepoError::database("insert_entry", "disk I/O error");
        assert_eq!(
            err.to_string(),
            "Database error in insert_entry: disk I/O error"
        );
    }

    #[test]
    fn domain_errors_become_decode_errors() {
        let err: RepoError = DomainError::parse("Unknown phone type: Pager").into();
        assert!(matches!(err, RepoError::Decode(_)));
    }
}
