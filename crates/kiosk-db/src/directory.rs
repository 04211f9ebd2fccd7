//! Control-plane tenant directory.
//!
//! A small registry table in the maintenance database recording which
//! tenants are visible in the tenant selector. Listing consults only this
//! table and the cluster catalog, so it never opens a per-tenant
//! connection. Disablement flips `visible` off; nothing in this crate
//! flips it back on.

use sqlx::PgPool;

use crate::error::DbError;

/// The control-plane tenant directory table.
///
/// Rows carry the tenant name, its visibility flag and the creation and
/// disablement timestamps; only the hidden-name set is ever read back.
#[derive(Debug)]
pub struct TenantDirectory;

impl TenantDirectory {
    /// Create the directory table if it does not exist yet.
    ///
    /// Called once at startup against the maintenance database.
    pub async fn ensure_schema(pool: &PgPool) -> Result<(), DbError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tenant_directory (
                name        TEXT PRIMARY KEY,
                visible     BOOLEAN NOT NULL DEFAULT TRUE,
                created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                disabled_at TIMESTAMPTZ
            )
            "#,
        )
        .execute(pool)
        .await
        .map_err(DbError::QueryFailed)?;

        Ok(())
    }

    /// Register a freshly provisioned tenant as visible.
    ///
    /// Idempotent: re-registering an existing name is a no-op so that a
    /// crash between database creation and registration can be retried.
    pub async fn register(pool: &PgPool, name: &str) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO tenant_directory (name) VALUES ($1)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(name)
        .execute(pool)
        .await
        .map_err(DbError::QueryFailed)?;

        Ok(())
    }

    /// Mark a tenant invisible after disablement.
    ///
    /// Inserts the row if the tenant was never registered, so databases
    /// created out of band can still be hidden.
    pub async fn hide(pool: &PgPool, name: &str) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO tenant_directory (name, visible, disabled_at)
            VALUES ($1, FALSE, NOW())
            ON CONFLICT (name) DO UPDATE
            SET visible = FALSE,
                disabled_at = COALESCE(tenant_directory.disabled_at, NOW())
            "#,
        )
        .bind(name)
        .execute(pool)
        .await
        .map_err(DbError::QueryFailed)?;

        Ok(())
    }

    /// Names that have been marked invisible.
    ///
    /// The tenant listing subtracts these from the cluster catalog, which
    /// keeps databases created out of band listed until explicitly hidden.
    pub async fn hidden_names(pool: &PgPool) -> Result<Vec<String>, DbError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT name FROM tenant_directory WHERE NOT visible ORDER BY name
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(DbError::QueryFailed)?;

        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}
