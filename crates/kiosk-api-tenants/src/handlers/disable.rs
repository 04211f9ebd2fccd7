//! Disable handler for tenant lockout.

use axum::{
    extract::{Path, State},
    Json,
};
use kiosk_core::TenantName;

use crate::error::{StatusErrorBody, StatusFamily, TenantError};
use crate::models::DisableTenantResponse;
use crate::router::TenantAppState;

/// DELETE /:db_name
///
/// Disable a tenant: lock out every account and hide the database.
///
/// The database is kept; all non-superuser accounts are deactivated with
/// mangled logins, the superuser is re-keyed with a fresh credential, and
/// the tenant disappears from the listing. The new credential is in the
/// response, exactly once.
///
/// Errors on this endpoint use the `status`/`message` body, not the
/// `success`/`error` body of the other endpoints.
///
/// # Errors
///
/// - 401 Unauthorized: missing or wrong admin API key
/// - 404 Not Found: tenant database does not exist
/// - 500 Internal Server Error: disable transaction rolled back
#[utoipa::path(
    delete,
    path = "/{db_name}",
    params(
        ("db_name" = String, Path, description = "Tenant database name"),
    ),
    responses(
        (status = 200, description = "Tenant disabled", body = DisableTenantResponse),
        (status = 401, description = "Unauthorized", body = StatusErrorBody),
        (status = 404, description = "Tenant not found", body = StatusErrorBody),
        (status = 500, description = "Disable failed", body = StatusErrorBody),
    ),
    tag = "Tenant Lifecycle",
    security(
        ("bearerAuth" = [])
    )
)]
pub async fn disable_tenant_handler(
    State(state): State<TenantAppState>,
    Path(db_name): Path<String>,
) -> Result<Json<DisableTenantResponse>, StatusFamily> {
    // A name that cannot be a provisioned database cannot be disabled.
    let name: TenantName = db_name
        .parse()
        .map_err(|_| TenantError::NotFound(db_name.clone()))?;

    let admin_password = state.lifecycle.disable(&name).await?;

    Ok(Json(DisableTenantResponse::disabled(
        name.as_str(),
        admin_password,
    )))
}
