//! Error types for port operations.

/// Repository operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Database operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Stored data could not be mapped back into a domain value.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Business constraint violated.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A uniqueness constraint rejected the write.
    #[error("{entity_type} already exists: {key}")]
    AlreadyExists {
        entity_type: &'static str,
        key: String,
    },

    /// An update matched zero rows.
    #[error("no rows were updated in {operation}")]
    NoRowsAffected { operation: &'static str },
}

impl RepoError {
    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    /// Create a ConstraintViolation error.
    pub fn constraint(message: impl ToString) -> Self {
        Self::ConstraintViolation(message.to_string())
    }

    pub fn already_exists(entity_type: &'static str, key: impl ToString) -> Self {
        Self::AlreadyExists {
            entity_type,
            key: key.to_string(),
        }
    }

    pub fn no_rows_affected(operation: &'static str) -> Self {
        Self::NoRowsAffected { operation }
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    pub fn is_no_rows_affected(&self) -> bool {
        matches!(self, Self::NoRowsAffected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_rows_affected_message() {
        let err = RepoError::no_rows_affected("update_status");
        assert!(err.is_no_rows_affected());
        assert_eq!(err.to_string(), "no rows were updated in update_status");
    }

    #[test]
    fn database_error_carries_operation() {
        let err = RepoError::database("get_student", "connection refused");
        assert_eq!(
            err.to_string(),
            "Database error in get_student: connection refused"
        );
        assert!(!err.is_already_exists());
    }
}
