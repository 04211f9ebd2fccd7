//! Router for tenant lifecycle endpoints.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use sqlx::PgPool;

use kiosk_db::TenantConnector;

use crate::handlers::{
    create_tenant_handler, disable_tenant_handler, list_tenants_handler, sync_modules_handler,
    tenant_login_handler, tenant_status_handler,
};
use crate::middleware::{require_admin_key, require_service_key, ApiKeys};
use crate::services::{AuthService, LifecycleService, ModuleService};

/// Shared state for tenant lifecycle endpoints.
#[derive(Clone)]
pub struct TenantAppState {
    /// Maintenance database pool (control plane).
    pub pool: PgPool,

    /// Tenant lifecycle service (create, status, list, disable).
    pub lifecycle: Arc<LifecycleService>,

    /// Authentication service for tenant logins.
    pub auth: Arc<AuthService>,

    /// Module installation and upgrade service.
    pub modules: Arc<ModuleService>,

    /// API keys accepted by the gated tiers.
    pub keys: Arc<ApiKeys>,
}

impl TenantAppState {
    /// Build the state over the maintenance pool and tenant connector.
    #[must_use]
    pub fn new(pool: PgPool, connector: TenantConnector, keys: ApiKeys) -> Self {
        Self {
            lifecycle: Arc::new(LifecycleService::new(pool.clone(), connector.clone())),
            auth: Arc::new(AuthService::new(pool.clone(), connector.clone())),
            modules: Arc::new(ModuleService::new(pool.clone(), connector)),
            keys: Arc::new(keys),
            pool,
        }
    }
}

/// Create the tenant lifecycle router.
///
/// Three tiers: login is open, sync/status/listing sit behind the service
/// key (open when no service key is configured), create and disable
/// require the admin key. Mount under the caller's prefix.
pub fn tenant_router(pool: PgPool, connector: TenantConnector, keys: ApiKeys) -> Router {
    let state = TenantAppState::new(pool, connector, keys);

    let admin_routes = Router::new()
        .route("/create_tenant", post(create_tenant_handler))
        .route("/:db_name", delete(disable_tenant_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin_key,
        ));

    let service_routes = Router::new()
        .route("/sync_modules", post(sync_modules_handler))
        .route("/status/:db_name", get(tenant_status_handler))
        .route("/all", get(list_tenants_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_service_key,
        ));

    Router::new()
        .route("/tenant_login", post(tenant_login_handler))
        .merge(admin_routes)
        .merge(service_routes)
        .with_state(state)
}
