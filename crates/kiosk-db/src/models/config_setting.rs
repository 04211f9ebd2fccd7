//! Key/value configuration settings for the per-tenant schema.

use sqlx::PgExecutor;

use crate::error::DbError;

/// Config key holding the platform schema version, written at bootstrap.
pub const BASE_VERSION_KEY: &str = "base.version";

/// Config key controlling tenant selector visibility; flipped to `false`
/// by disablement.
pub const TENANT_VISIBLE_KEY: &str = "base.tenant_visible";

/// Upsert-style access to a tenant's `config_settings` table.
#[derive(Debug, Clone)]
pub struct ConfigSetting;

impl ConfigSetting {
    /// Read a setting, `None` if the key was never written.
    pub async fn get<'e>(
        executor: impl PgExecutor<'e>,
        key: &str,
    ) -> Result<Option<String>, DbError> {
        let row: Option<(String,)> = sqlx::query_as(
            r#"
            SELECT value FROM config_settings WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(executor)
        .await
        .map_err(DbError::QueryFailed)?;

        Ok(row.map(|(value,)| value))
    }

    /// Write a setting, overwriting any previous value.
    pub async fn upsert<'e>(
        executor: impl PgExecutor<'e>,
        key: &str,
        value: &str,
    ) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO config_settings (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET value = $2, updated_at = NOW()
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(executor)
        .await
        .map_err(DbError::QueryFailed)?;

        Ok(())
    }
}
