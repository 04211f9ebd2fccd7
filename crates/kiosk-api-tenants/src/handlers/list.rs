//! Listing handler for visible tenants.

use axum::{extract::State, Json};

use crate::error::{ErrorBody, TenantError};
use crate::models::TenantListResponse;
use crate::router::TenantAppState;

/// GET /all
///
/// List visible tenant databases.
///
/// Reads only the cluster catalog and the control-plane directory; no
/// per-tenant connection is opened, so this is safe for the selector to
/// poll. Disabled tenants are hidden.
///
/// # Errors
///
/// - 401 Unauthorized: missing or wrong service API key
/// - 500 Internal Server Error: cluster catalog unreachable
#[utoipa::path(
    get,
    path = "/all",
    responses(
        (status = 200, description = "Visible tenants", body = TenantListResponse),
        (status = 401, description = "Unauthorized", body = ErrorBody),
        (status = 500, description = "Catalog unreachable", body = ErrorBody),
    ),
    tag = "Tenant Lifecycle",
    security(
        ("bearerAuth" = [])
    )
)]
pub async fn list_tenants_handler(
    State(state): State<TenantAppState>,
) -> Result<Json<TenantListResponse>, TenantError> {
    let tenants = state.lifecycle.list().await?;
    Ok(Json(TenantListResponse::new(tenants)))
}
