//! Tenant lifecycle orchestration: create, status, list, disable.

use kiosk_core::TenantName;
use sqlx::{Connection, PgPool};

use kiosk_db::models::config_setting::{BASE_VERSION_KEY, TENANT_VISIBLE_KEY};
use kiosk_db::models::{ConfigSetting, DisablementMarker, TenantModule, TenantUser};
use kiosk_db::{Catalog, DbError, Provisioner, TenantConnector, TenantDirectory};

use crate::error::TenantError;
use crate::models::TenantStatusResponse;
use crate::password::PasswordHasher;
use crate::services::CredentialService;

/// Suffix appended to every deactivated login at disable time, so the
/// login can never be reused for authentication even if reactivated out
/// of band.
pub const DISABLED_LOGIN_SUFFIX: &str = "__disabled";

/// Owns the full lifecycle of tenant databases.
#[derive(Debug, Clone)]
pub struct LifecycleService {
    pool: PgPool,
    catalog: Catalog,
    connector: TenantConnector,
    provisioner: Provisioner,
    hasher: PasswordHasher,
    credentials: CredentialService,
}

impl LifecycleService {
    /// Build the service over the maintenance pool and tenant connector.
    #[must_use]
    pub fn new(pool: PgPool, connector: TenantConnector) -> Self {
        let catalog = Catalog::new(pool.clone());
        let provisioner = Provisioner::new(pool.clone(), connector.clone());
        Self {
            pool,
            catalog,
            connector,
            provisioner,
            hasher: PasswordHasher::new(),
            credentials: CredentialService::new(),
        }
    }

    /// Create a new tenant database with a bootstrap administrator.
    ///
    /// Fails with `AlreadyExists` before any side effect when the name is
    /// taken; a concurrent create that loses the `CREATE DATABASE` race
    /// gets the same answer. Other provisioning failures surface the
    /// underlying message; the provisioner cleans up its partial work
    /// itself.
    pub async fn create(
        &self,
        name: &TenantName,
        login: &str,
        password: &str,
    ) -> Result<(), TenantError> {
        if self.catalog.database_exists(name.as_str()).await? {
            return Err(TenantError::AlreadyExists(name.to_string()));
        }

        let password_hash = self
            .hasher
            .hash(password)
            .map_err(|e| TenantError::internal(e.to_string()))?;

        self.provisioner
            .provision(name, login, &password_hash)
            .await
            .map_err(provision_error)?;

        // Directory registration is not part of the provisioning unit: the
        // tenant exists either way, and register() is retry-safe.
        if let Err(err) = TenantDirectory::register(&self.pool, name.as_str()).await {
            tracing::warn!(tenant = %name, error = %err, "Failed to register tenant in directory");
        }

        tracing::info!(tenant = %name, "Tenant created");
        Ok(())
    }

    /// Inspect a tenant's status.
    ///
    /// Distinguishes "never created" from "exists but unreachable": the
    /// former is `not_found`, the latter `database_exists_registry_error`.
    pub async fn status(&self, raw_name: &str) -> Result<TenantStatusResponse, TenantError> {
        if !self.catalog.database_exists(raw_name).await? {
            return Ok(TenantStatusResponse::not_found(raw_name));
        }

        // Existence is confirmed; anything that fails past this point is a
        // registry error, never not_found.
        let name: TenantName = match raw_name.parse() {
            Ok(name) => name,
            Err(_) => return Ok(TenantStatusResponse::registry_error(raw_name)),
        };

        match self.read_registry(&name).await {
            Ok((modules, version)) => Ok(TenantStatusResponse::operational(
                raw_name, modules, version,
            )),
            Err(err) => {
                tracing::warn!(tenant = %raw_name, error = %err, "Tenant registry unreachable");
                Ok(TenantStatusResponse::registry_error(raw_name))
            }
        }
    }

    async fn read_registry(
        &self,
        name: &TenantName,
    ) -> Result<(Vec<String>, Option<String>), DbError> {
        let pool = self.connector.pool_for(name).await?;
        let modules = TenantModule::installed_names(&pool).await?;
        let version = ConfigSetting::get(&pool, BASE_VERSION_KEY).await?;
        pool.close().await;
        Ok((modules, version))
    }

    /// List visible tenant names.
    ///
    /// Catalog names minus the directory's hidden set; never opens a
    /// per-tenant connection, so it is safe to poll.
    pub async fn list(&self) -> Result<Vec<String>, TenantError> {
        let names = self.catalog.list_databases().await?;
        let hidden = TenantDirectory::hidden_names(&self.pool).await?;

        let mut visible: Vec<String> = names
            .into_iter()
            .filter(|name| !hidden.contains(name))
            .collect();
        visible.sort();
        Ok(visible)
    }

    /// Disable a tenant: the irreversible soft-lockout path.
    ///
    /// One transaction on the tenant database deactivates and mangles all
    /// non-superuser accounts, re-keys the superuser with a fresh random
    /// credential, hides the tenant from the selector, and records the
    /// first-disablement audit marker. Any failure rolls the whole
    /// transaction back. Returns the fresh credential, exactly once.
    pub async fn disable(&self, name: &TenantName) -> Result<String, TenantError> {
        if !self.catalog.database_exists(name.as_str()).await? {
            return Err(TenantError::NotFound(name.to_string()));
        }

        let admin_password = self.credentials.generate_admin_password();
        let admin_password_hash = self
            .hasher
            .hash(&admin_password)
            .map_err(|e| TenantError::internal(e.to_string()))?;

        self.disable_transaction(name, &admin_password_hash)
            .await
            .map_err(|e| TenantError::Disable(e.to_string()))?;

        // The tenant-side transaction is the atomicity boundary; hiding the
        // directory row afterwards is best-effort and logged.
        if let Err(err) = TenantDirectory::hide(&self.pool, name.as_str()).await {
            tracing::warn!(tenant = %name, error = %err, "Failed to hide tenant in directory");
        }

        tracing::info!(tenant = %name, "Tenant disabled");
        Ok(admin_password)
    }

    async fn disable_transaction(
        &self,
        name: &TenantName,
        admin_password_hash: &str,
    ) -> Result<(), DbError> {
        let pool = self.connector.pool_for(name).await?;
        let mut conn = pool.acquire().await.map_err(DbError::ConnectionFailed)?;
        let mut tx = conn.begin().await.map_err(DbError::ConnectionFailed)?;

        let deactivated =
            TenantUser::deactivate_all_except_superuser(&mut *tx, DISABLED_LOGIN_SUFFIX).await?;

        let superuser = TenantUser::find_superuser(&mut *tx)
            .await?
            .ok_or_else(|| DbError::NotFound(format!("superuser account in '{name}'")))?;
        TenantUser::set_password_hash(&mut *tx, superuser.id, admin_password_hash).await?;

        ConfigSetting::upsert(&mut *tx, TENANT_VISIBLE_KEY, "false").await?;

        DisablementMarker::ensure_table(&mut tx).await?;
        let first_disable = DisablementMarker::record_once(&mut tx, admin_password_hash).await?;

        tx.commit().await.map_err(DbError::QueryFailed)?;
        pool.close().await;

        tracing::info!(
            tenant = %name,
            deactivated_users = deactivated,
            first_disable,
            "Disable transaction committed"
        );
        Ok(())
    }
}

/// Map a provisioning failure onto the API error taxonomy.
///
/// The existence pre-check in [`LifecycleService::create`] is not atomic
/// with `CREATE DATABASE`; when two creates race, the loser's failure
/// must still read as a name conflict, not an infrastructure error.
fn provision_error(err: DbError) -> TenantError {
    match err {
        DbError::AlreadyExists(name) => TenantError::AlreadyExists(name),
        other => TenantError::Provisioning(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lost_create_race_maps_to_already_exists() {
        let err = provision_error(DbError::AlreadyExists("acme".to_string()));
        assert!(matches!(err, TenantError::AlreadyExists(name) if name == "acme"));
    }

    #[test]
    fn test_other_provision_failures_map_to_provisioning() {
        let err = provision_error(DbError::NotFound("template".to_string()));
        assert!(matches!(err, TenantError::Provisioning(_)));
    }
}
