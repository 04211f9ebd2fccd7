//! Login handler for tenant users.

use axum::{extract::State, Json};
use kiosk_core::TenantName;

use crate::error::{ErrorBody, TenantError};
use crate::models::{TenantLoginRequest, TenantLoginResponse};
use crate::router::TenantAppState;

/// POST /tenant_login
///
/// Authenticate a user against their tenant database and bind a session.
///
/// Unknown login, deactivated account and wrong password all produce the
/// same 401 body, so the response never reveals which part was wrong.
///
/// # Errors
///
/// - 400 Bad Request: missing field
/// - 401 Unauthorized: invalid login or password
/// - 404 Not Found: tenant database does not exist
/// - 503 Service Unavailable: tenant database unreachable; retryable
#[utoipa::path(
    post,
    path = "/tenant_login",
    request_body = TenantLoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = TenantLoginResponse),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
        (status = 404, description = "Tenant not found", body = ErrorBody),
        (status = 503, description = "Authentication backend unavailable", body = ErrorBody),
    ),
    tag = "Tenant Auth"
)]
pub async fn tenant_login_handler(
    State(state): State<TenantAppState>,
    Json(request): Json<TenantLoginRequest>,
) -> Result<Json<TenantLoginResponse>, TenantError> {
    if let Some(error) = request.validate() {
        return Err(TenantError::InvalidArgument(error));
    }

    // A name that cannot be a provisioned database cannot hold an account.
    let name: TenantName = request
        .db_name
        .parse()
        .map_err(|_| TenantError::NotFound(request.db_name.clone()))?;

    let response = state
        .auth
        .authenticate(&name, &request.login, &request.password)
        .await?;

    Ok(Json(response))
}
