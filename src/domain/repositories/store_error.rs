//! Store-agnostic failure type returned by every repository.

use thiserror::Error;

/// Failure reported by a repository implementation.
///
/// Repositories translate their driver errors into this type so that the
/// service and HTTP layers never depend on a particular database. The only
/// classification the upper layers rely on is [`StoreError::is_uniqueness_violation`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// A unique constraint rejected the write (duplicate email, course code, ...).
    #[error("{message}")]
    UniqueViolation {
        constraint: Option<String>,
        message: String,
    },

    /// A referenced row does not exist (e.g. enrolling into an unknown course).
    #[error("{message}")]
    ForeignKeyViolation {
        constraint: Option<String>,
        message: String,
    },

    /// Any other database or connectivity failure.
    #[error("{0}")]
    Database(String),
}

impl StoreError {
    /// Returns true if the store rejected the operation because of a uniqueness
    /// constraint.
    pub fn is_uniqueness_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation { .. })
    }

    /// Name of the violated constraint, when the store reports one.
    pub fn constraint(&self) -> Option<&str> {
        match self {
            Self::UniqueViolation { constraint, .. }
            | Self::ForeignKeyViolation { constraint, .. } => constraint.as_deref(),
            Self::Database(_) => None,
        }
    }
}
