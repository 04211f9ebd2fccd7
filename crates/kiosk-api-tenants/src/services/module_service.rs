//! Module installation and upgrade against a tenant's registry.

use kiosk_core::TenantName;
use sqlx::{Connection, PgPool};

use kiosk_db::models::TenantModule;
use kiosk_db::{Catalog, DbError, TenantConnector};

use crate::error::TenantError;
use crate::models::{ModuleFailure, SyncReport};

/// Installs and upgrades modules on tenant databases.
#[derive(Debug, Clone)]
pub struct ModuleService {
    catalog: Catalog,
    connector: TenantConnector,
}

impl ModuleService {
    /// Build the service over the maintenance pool and tenant connector.
    #[must_use]
    pub fn new(pool: PgPool, connector: TenantConnector) -> Self {
        Self {
            catalog: Catalog::new(pool),
            connector,
        }
    }

    /// Install or upgrade the requested modules, in order.
    ///
    /// Each module runs in its own transaction committed immediately on
    /// success, so a later failure can never roll back an earlier module.
    /// A failed module is recorded and processing continues; the report's
    /// overall success is `false` only when every module failed.
    pub async fn sync(
        &self,
        name: &TenantName,
        modules: &[String],
    ) -> Result<SyncReport, TenantError> {
        if !self.catalog.database_exists(name.as_str()).await? {
            return Err(TenantError::NotFound(name.to_string()));
        }

        let pool = self.connector.pool_for(name).await?;
        let mut report = SyncReport::default();

        for module in modules {
            match self.sync_one(&pool, module).await {
                Ok(SyncOutcome::Installed) => report.installed.push(module.clone()),
                Ok(SyncOutcome::Upgraded) => report.upgraded.push(module.clone()),
                Err(err) => {
                    tracing::warn!(
                        tenant = %name,
                        module = %module,
                        error = %err,
                        "Module sync failed"
                    );
                    report.failed.push(ModuleFailure {
                        name: module.clone(),
                        error: err.to_string(),
                    });
                }
            }
        }

        pool.close().await;
        tracing::info!(
            tenant = %name,
            installed = report.installed.len(),
            upgraded = report.upgraded.len(),
            failed = report.failed.len(),
            "Module sync finished"
        );
        Ok(report)
    }

    /// Install or upgrade a single module inside its own transaction.
    async fn sync_one(&self, pool: &PgPool, module: &str) -> Result<SyncOutcome, SyncError> {
        let mut conn = pool.acquire().await.map_err(DbError::ConnectionFailed)?;
        let mut tx = conn.begin().await.map_err(DbError::ConnectionFailed)?;

        let Some(registered) = TenantModule::find_by_name(&mut *tx, module).await? else {
            // Rolls back on drop; nothing was written for this module.
            return Err(SyncError::NotFound);
        };

        let outcome = if registered.is_installed() {
            TenantModule::upgrade(&mut *tx, module).await?;
            SyncOutcome::Upgraded
        } else {
            TenantModule::install(&mut *tx, module).await?;
            SyncOutcome::Installed
        };

        tx.commit().await.map_err(DbError::QueryFailed)?;
        Ok(outcome)
    }
}

enum SyncOutcome {
    Installed,
    Upgraded,
}

/// Module-level failure, collected into the report rather than raised.
#[derive(Debug, thiserror::Error)]
enum SyncError {
    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Db(#[from] DbError),
}
