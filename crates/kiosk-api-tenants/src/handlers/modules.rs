//! Module sync handler.

use axum::{extract::State, Json};

use crate::error::{ErrorBody, TenantError};
use crate::models::{SyncModulesRequest, SyncModulesResponse};
use crate::router::TenantAppState;

/// POST /sync_modules
///
/// Install or upgrade modules on a tenant database, in request order.
///
/// Modules are processed independently: each runs in its own transaction
/// and a failure is recorded in the report instead of aborting the run.
/// The response is 200 even with failures present; `success` is `false`
/// only when every requested module failed.
///
/// # Errors
///
/// - 400 Bad Request: missing field or empty module list
/// - 401 Unauthorized: missing or wrong service API key
/// - 404 Not Found: tenant database does not exist
#[utoipa::path(
    post,
    path = "/sync_modules",
    request_body = SyncModulesRequest,
    responses(
        (status = 200, description = "Sync report", body = SyncModulesResponse),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
        (status = 404, description = "Tenant not found", body = ErrorBody),
    ),
    tag = "Tenant Modules",
    security(
        ("bearerAuth" = [])
    )
)]
pub async fn sync_modules_handler(
    State(state): State<TenantAppState>,
    Json(request): Json<SyncModulesRequest>,
) -> Result<Json<SyncModulesResponse>, TenantError> {
    let name = request.validate().map_err(TenantError::InvalidArgument)?;

    let report = state.modules.sync(&name, &request.modules).await?;

    Ok(Json(SyncModulesResponse::from(report)))
}
