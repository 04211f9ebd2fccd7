//! Error types for the kiosk-db crate.

use thiserror::Error;

/// Database operation errors.
///
/// Connection failures are kept distinct from query failures so logs can
/// tell an unreachable tenant database apart from a broken schema.
#[derive(Debug, Error)]
pub enum DbError {
    /// Failed to establish or acquire a database connection.
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[source] sqlx::Error),

    /// A database query failed to execute.
    #[error("Query failed: {0}")]
    QueryFailed(#[source] sqlx::Error),

    /// Creating or dropping a tenant database failed.
    #[error("Provisioning statement failed: {0}")]
    ProvisioningFailed(#[source] sqlx::Error),

    /// The tenant database already exists.
    ///
    /// Raised when `CREATE DATABASE` loses a race against a concurrent
    /// provisioning of the same name (Postgres `duplicate_database`).
    #[error("Database '{0}' already exists")]
    AlreadyExists(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = DbError::NotFound("superuser account".to_string());
        assert_eq!(err.to_string(), "Not found: superuser account");
    }

    #[test]
    fn test_already_exists_names_database() {
        let err = DbError::AlreadyExists("acme".to_string());
        assert_eq!(err.to_string(), "Database 'acme' already exists");
    }
}
