//! Disablement audit marker for the per-tenant schema.
//!
//! The marker table is created lazily inside the disable transaction, so
//! tenants provisioned before disablement existed can still be disabled.
//! Only the first disablement is recorded; the destructive steps around it
//! are re-applied on every call.

use sqlx::PgConnection;

use crate::error::DbError;

/// The singleton audit row recording when a tenant was first disabled.
///
/// The row holds the disablement timestamp and the argon2 hash of the
/// administrator credential generated at first disablement; the plaintext
/// is returned to the caller exactly once and never stored. Nothing reads
/// the row back through this surface, it exists for operators.
#[derive(Debug)]
pub struct DisablementMarker;

impl DisablementMarker {
    /// Create the marker table if it does not exist.
    ///
    /// Must run inside the disable transaction so a later failure rolls
    /// the table creation back too.
    pub async fn ensure_table(conn: &mut PgConnection) -> Result<(), DbError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS disablements (
                id             INTEGER PRIMARY KEY DEFAULT 1 CHECK (id = 1),
                disabled_at    TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                admin_password_hash TEXT NOT NULL
            )
            "#,
        )
        .execute(&mut *conn)
        .await
        .map_err(DbError::QueryFailed)?;

        Ok(())
    }

    /// Record the marker if none exists yet.
    ///
    /// Returns `true` when this call inserted the marker, `false` when a
    /// previous disablement already did.
    pub async fn record_once(
        conn: &mut PgConnection,
        admin_password_hash: &str,
    ) -> Result<bool, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO disablements (admin_password_hash)
            VALUES ($1)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(admin_password_hash)
        .execute(&mut *conn)
        .await
        .map_err(DbError::QueryFailed)?;

        Ok(result.rows_affected() == 1)
    }
}
