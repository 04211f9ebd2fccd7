//! Cluster database catalog.
//!
//! Read-only enumeration of the databases known to the Postgres cluster,
//! served entirely from the maintenance connection. Nothing here opens a
//! per-tenant connection, so these calls stay cheap and safe to poll.

use sqlx::PgPool;

use crate::error::DbError;

/// Databases that are never tenants and are excluded from every listing.
const RESERVED_DATABASES: &[&str] = &["postgres", "template0", "template1"];

/// Read-only view over the cluster's database catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    pool: PgPool,
}

impl Catalog {
    /// Create a catalog over the maintenance connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check whether a database with the given name exists in the cluster.
    pub async fn database_exists(&self, name: &str) -> Result<bool, DbError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1 AND NOT datistemplate)
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(DbError::QueryFailed)?;

        Ok(result.0)
    }

    /// List every non-template, non-reserved database name, sorted.
    ///
    /// The maintenance database itself is excluded alongside the reserved
    /// system databases.
    pub async fn list_databases(&self) -> Result<Vec<String>, DbError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT datname FROM pg_database
            WHERE NOT datistemplate
              AND datname <> ALL($1)
              AND datname <> current_database()
            ORDER BY datname
            "#,
        )
        .bind(RESERVED_DATABASES)
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::QueryFailed)?;

        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_databases_cover_system_names() {
        assert!(RESERVED_DATABASES.contains(&"postgres"));
        assert!(RESERVED_DATABASES.contains(&"template0"));
        assert!(RESERVED_DATABASES.contains(&"template1"));
    }
}
