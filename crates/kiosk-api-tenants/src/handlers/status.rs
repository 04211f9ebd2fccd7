//! Status handler for tenant inspection.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{ErrorBody, TenantError};
use crate::models::TenantStatusResponse;
use crate::router::TenantAppState;

/// GET /status/:db_name
///
/// Inspect a tenant's operational status.
///
/// Absence is reported in the body (`status: "not_found"`) with a 200, so
/// monitoring can poll this endpoint without treating 404 as an alert. A
/// database that exists but cannot be opened is
/// `database_exists_registry_error`, which is the retryable case.
///
/// # Errors
///
/// - 401 Unauthorized: missing or wrong service API key
/// - 500 Internal Server Error: cluster catalog unreachable
#[utoipa::path(
    get,
    path = "/status/{db_name}",
    params(
        ("db_name" = String, Path, description = "Tenant database name"),
    ),
    responses(
        (status = 200, description = "Tenant status", body = TenantStatusResponse),
        (status = 401, description = "Unauthorized", body = ErrorBody),
        (status = 500, description = "Catalog unreachable", body = ErrorBody),
    ),
    tag = "Tenant Lifecycle",
    security(
        ("bearerAuth" = [])
    )
)]
pub async fn tenant_status_handler(
    State(state): State<TenantAppState>,
    Path(db_name): Path<String>,
) -> Result<Json<TenantStatusResponse>, TenantError> {
    let response = state.lifecycle.status(&db_name).await?;
    Ok(Json(response))
}
