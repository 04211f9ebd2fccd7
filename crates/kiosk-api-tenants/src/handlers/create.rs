//! Create handler for tenant provisioning.

use axum::{extract::State, http::StatusCode, Json};

use crate::error::{ErrorBody, TenantError};
use crate::models::{CreateTenantRequest, CreateTenantResponse};
use crate::router::TenantAppState;

/// POST /create_tenant
///
/// Create a new tenant database with its bootstrap administrator.
///
/// The database name becomes a Postgres database on the shared cluster, so
/// it must be a safe identifier; provisioning is all-or-nothing and a
/// half-provisioned database is dropped before the error is returned.
///
/// # Errors
///
/// - 400 Bad Request: missing field or unsafe database name
/// - 401 Unauthorized: missing or wrong admin API key
/// - 409 Conflict: a database with this name already exists
/// - 500 Internal Server Error: provisioning failed (message verbatim)
#[utoipa::path(
    post,
    path = "/create_tenant",
    request_body = CreateTenantRequest,
    responses(
        (status = 201, description = "Tenant created successfully", body = CreateTenantResponse),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
        (status = 409, description = "Database already exists", body = ErrorBody),
        (status = 500, description = "Provisioning failed", body = ErrorBody),
    ),
    tag = "Tenant Lifecycle",
    security(
        ("bearerAuth" = [])
    )
)]
pub async fn create_tenant_handler(
    State(state): State<TenantAppState>,
    Json(request): Json<CreateTenantRequest>,
) -> Result<(StatusCode, Json<CreateTenantResponse>), TenantError> {
    let name = request.validate().map_err(TenantError::InvalidArgument)?;

    state
        .lifecycle
        .create(&name, &request.login, &request.password)
        .await?;

    Ok((StatusCode::CREATED, Json(CreateTenantResponse::created(&name))))
}
