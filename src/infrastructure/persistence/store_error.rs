//! Translation of SQLx errors into [`StoreError`].

use crate::domain::repositories::StoreError;

/// Classifies driver errors by SQLSTATE: `23505` becomes
/// [`StoreError::UniqueViolation`], `23503` becomes
/// [`StoreError::ForeignKeyViolation`], everything else is
/// [`StoreError::Database`].
impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        let Some(db_err) = e.as_database_error() else {
            return StoreError::Database(e.to_string());
        };

        let constraint = db_err.constraint().map(str::to_string);
        let message = db_err.message().to_string();

        if db_err.is_unique_violation() {
            return StoreError::UniqueViolation {
                constraint,
                message,
            };
        }

        if db_err.is_foreign_key_violation() {
            return StoreError::ForeignKeyViolation {
                constraint,
                message,
            };
        }

        StoreError::Database(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_is_database_error() {
        let err: StoreError = sqlx::Error::RowNotFound.into();

        assert!(!err.is_uniqueness_violation());
        assert!(matches!(err, StoreError::Database(_)));
    }

    #[test]
    fn test_pool_timeout_is_database_error() {
        let err: StoreError = sqlx::Error::PoolTimedOut.into();

        assert!(matches!(err, StoreError::Database(_)));
        assert!(!err.to_string().is_empty());
    }
}
