//! Module registry model for the per-tenant schema.
//!
//! Each tenant carries a registry of the application modules it knows
//! about. Installation and upgrade both resolve to the registry's latest
//! version; requesting an install on an already-installed module is an
//! upgrade, never an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};

use crate::error::DbError;

/// Registry state of an installed module.
pub const MODULE_STATE_INSTALLED: &str = "installed";

/// Registry state of a known but not installed module.
pub const MODULE_STATE_UNINSTALLED: &str = "uninstalled";

/// A row in a tenant's module registry.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TenantModule {
    /// Module name, unique within the tenant.
    pub name: String,

    /// `installed` or `uninstalled`.
    pub state: String,

    /// Newest version the registry knows about.
    pub latest_version: String,

    /// Version currently installed, if any.
    pub installed_version: Option<String>,

    /// When the module was first installed.
    pub installed_at: Option<DateTime<Utc>>,

    /// Last registry change for this module.
    pub updated_at: DateTime<Utc>,
}

const MODULE_COLUMNS: &str =
    "name, state, latest_version, installed_version, installed_at, updated_at";

impl TenantModule {
    /// Returns `true` if the module is currently installed.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.state == MODULE_STATE_INSTALLED
    }

    /// Seed a registry entry at provisioning time.
    pub async fn seed<'e>(
        executor: impl PgExecutor<'e>,
        name: &str,
        latest_version: &str,
        installed: bool,
    ) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO modules (name, state, latest_version, installed_version, installed_at)
            VALUES (
                $1,
                CASE WHEN $3 THEN 'installed' ELSE 'uninstalled' END,
                $2,
                CASE WHEN $3 THEN $2 END,
                CASE WHEN $3 THEN NOW() END
            )
            "#,
        )
        .bind(name)
        .bind(latest_version)
        .bind(installed)
        .execute(executor)
        .await
        .map_err(DbError::QueryFailed)?;

        Ok(())
    }

    /// Find a module by name.
    pub async fn find_by_name<'e>(
        executor: impl PgExecutor<'e>,
        name: &str,
    ) -> Result<Option<Self>, DbError> {
        sqlx::query_as::<_, Self>(&format!(
            r#"
            SELECT {MODULE_COLUMNS} FROM modules WHERE name = $1
            "#,
        ))
        .bind(name)
        .fetch_optional(executor)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Mark a module installed at the registry's latest version.
    pub async fn install<'e>(executor: impl PgExecutor<'e>, name: &str) -> Result<Self, DbError> {
        sqlx::query_as::<_, Self>(&format!(
            r#"
            UPDATE modules
            SET state = 'installed',
                installed_version = latest_version,
                installed_at = COALESCE(installed_at, NOW()),
                updated_at = NOW()
            WHERE name = $1
            RETURNING {MODULE_COLUMNS}
            "#,
        ))
        .bind(name)
        .fetch_optional(executor)
        .await
        .map_err(DbError::QueryFailed)?
        .ok_or_else(|| DbError::NotFound(format!("module {name}")))
    }

    /// Upgrade an installed module to the registry's latest version.
    ///
    /// Same registry write as [`install`](Self::install); the distinction
    /// matters only for reporting.
    pub async fn upgrade<'e>(executor: impl PgExecutor<'e>, name: &str) -> Result<Self, DbError> {
        Self::install(executor, name).await
    }

    /// Names of all installed modules, sorted.
    pub async fn installed_names<'e>(
        executor: impl PgExecutor<'e>,
    ) -> Result<Vec<String>, DbError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT name FROM modules WHERE state = 'installed' ORDER BY name
            "#,
        )
        .fetch_all(executor)
        .await
        .map_err(DbError::QueryFailed)?;

        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(state: &str) -> TenantModule {
        TenantModule {
            name: "point_of_sale".to_string(),
            state: state.to_string(),
            latest_version: "1.2.0".to_string(),
            installed_version: None,
            installed_at: None,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_installed() {
        assert!(module(MODULE_STATE_INSTALLED).is_installed());
        assert!(!module(MODULE_STATE_UNINSTALLED).is_installed());
    }
}
