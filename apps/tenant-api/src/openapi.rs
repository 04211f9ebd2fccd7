//! `OpenAPI` documentation and Swagger UI configuration.

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::health::{HealthResponse, ReadinessResponse};
use kiosk_api_tenants::error::{ErrorBody, StatusErrorBody};
use kiosk_api_tenants::models::{
    CreateTenantRequest, CreateTenantResponse, DisableTenantResponse, ModuleFailure,
    SyncModulesRequest, SyncModulesResponse, TenantListResponse, TenantLoginRequest,
    TenantLoginResponse, TenantStatus, TenantStatusResponse, UserCompany,
};

/// Security scheme modifier for bearer API keys.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("APIKey")
                        .build(),
                ),
            );
        }
    }
}

/// `OpenAPI` documentation for the tenant lifecycle API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "kiosk tenant API",
        version = "0.3.0",
        description = "Tenant database lifecycle control plane for the kiosk platform",
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server")
    ),
    modifiers(&SecurityAddon),
    paths(
        crate::health::health_handler,
        crate::health::readyz_handler,
        kiosk_api_tenants::handlers::create::create_tenant_handler,
        kiosk_api_tenants::handlers::login::tenant_login_handler,
        kiosk_api_tenants::handlers::modules::sync_modules_handler,
        kiosk_api_tenants::handlers::status::tenant_status_handler,
        kiosk_api_tenants::handlers::list::list_tenants_handler,
        kiosk_api_tenants::handlers::disable::disable_tenant_handler,
    ),
    components(schemas(
        HealthResponse,
        ReadinessResponse,
        CreateTenantRequest,
        CreateTenantResponse,
        TenantLoginRequest,
        TenantLoginResponse,
        UserCompany,
        SyncModulesRequest,
        SyncModulesResponse,
        ModuleFailure,
        TenantStatus,
        TenantStatusResponse,
        TenantListResponse,
        DisableTenantResponse,
        ErrorBody,
        StatusErrorBody,
    )),
    tags(
        (name = "Health", description = "Service health and status"),
        (name = "Tenant Lifecycle", description = "Tenant creation, status, listing and disablement"),
        (name = "Tenant Auth", description = "Tenant user authentication"),
        (name = "Tenant Modules", description = "Module installation and upgrades"),
    )
)]
pub struct ApiDoc;

/// Swagger UI and `OpenAPI` spec routes.
pub fn swagger_routes() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_builds() {
        let spec = ApiDoc::openapi();
        let json = spec.to_json().unwrap();
        assert!(json.contains("/create_tenant"));
        assert!(json.contains("/tenant_login"));
        assert!(json.contains("/sync_modules"));
    }
}
