//! Credential verification and session binding for tenant logins.

use kiosk_core::TenantName;
use sqlx::PgPool;

use kiosk_db::models::{Company, TenantSession, TenantUser};
use kiosk_db::{Catalog, DbError, TenantConnector};

use crate::error::TenantError;
use crate::models::{TenantLoginResponse, UserCompany};
use crate::password::PasswordHasher;
use crate::services::CredentialService;

/// Authenticates users against their tenant's database.
#[derive(Debug, Clone)]
pub struct AuthService {
    catalog: Catalog,
    connector: TenantConnector,
    hasher: PasswordHasher,
    credentials: CredentialService,
}

impl AuthService {
    /// Build the service over the maintenance pool and tenant connector.
    #[must_use]
    pub fn new(pool: PgPool, connector: TenantConnector) -> Self {
        Self {
            catalog: Catalog::new(pool),
            connector,
            hasher: PasswordHasher::new(),
            credentials: CredentialService::new(),
        }
    }

    /// Authenticate a user and bind a session to the tenant.
    ///
    /// `NotFound` when the tenant is absent from the catalog. Unknown
    /// login, deactivated account and wrong password all collapse into the
    /// same `InvalidCredentials`; backend failures are `AuthBackend` and
    /// may be retried by the caller.
    pub async fn authenticate(
        &self,
        name: &TenantName,
        login: &str,
        password: &str,
    ) -> Result<TenantLoginResponse, TenantError> {
        if !self.catalog.database_exists(name.as_str()).await? {
            return Err(TenantError::NotFound(name.to_string()));
        }

        let pool = self
            .connector
            .pool_for(name)
            .await
            .map_err(|e| TenantError::AuthBackend(e.to_string()))?;

        let result = self.verify_and_bind(&pool, name, login, password).await;
        pool.close().await;
        result
    }

    async fn verify_and_bind(
        &self,
        pool: &PgPool,
        name: &TenantName,
        login: &str,
        password: &str,
    ) -> Result<TenantLoginResponse, TenantError> {
        let user = TenantUser::find_active_by_login(pool, login)
            .await
            .map_err(backend_error)?
            .ok_or(TenantError::InvalidCredentials)?;

        let verified = self
            .hasher
            .verify(password, &user.password_hash)
            .map_err(|e| TenantError::AuthBackend(e.to_string()))?;
        if !verified {
            return Err(TenantError::InvalidCredentials);
        }

        let company = Company::find_by_id(pool, user.company_id)
            .await
            .map_err(backend_error)?
            .ok_or_else(|| TenantError::AuthBackend("active company missing".to_string()))?;

        let user_companies: Vec<UserCompany> = Company::list_for_user(pool, user.id)
            .await
            .map_err(backend_error)?
            .into_iter()
            .map(|c| UserCompany {
                id: c.id,
                name: c.name,
            })
            .collect();

        let token = self.credentials.generate_session_token();
        let session = TenantSession::create(pool, user.id, &token)
            .await
            .map_err(backend_error)?;

        tracing::info!(tenant = %name, uid = %user.id, "Login succeeded");

        Ok(TenantLoginResponse {
            success: true,
            uid: user.id,
            db: name.to_string(),
            partner_name: user.display_name,
            username: user.login,
            company_id: company.id,
            company_name: company.name,
            user_companies,
            is_system: user.is_superuser,
            session_id: session.token,
        })
    }
}

fn backend_error(err: DbError) -> TenantError {
    TenantError::AuthBackend(err.to_string())
}
