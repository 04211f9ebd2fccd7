//! Health and readiness endpoints.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;

/// Basic health response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"` when the process is serving.
    pub status: &'static str,

    /// Server version.
    pub version: &'static str,
}

/// Readiness response, including the maintenance database check.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadinessResponse {
    /// `"ok"` or `"unavailable"`.
    pub status: &'static str,

    /// Whether the maintenance database answered.
    pub database: bool,
}

/// GET /health
///
/// Liveness: the process is up and serving requests.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse),
    ),
    tag = "Health"
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /readyz
///
/// Readiness: the maintenance database is reachable.
#[utoipa::path(
    get,
    path = "/readyz",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse),
        (status = 503, description = "Maintenance database unreachable", body = ReadinessResponse),
    ),
    tag = "Health"
)]
pub async fn readyz_handler(
    State(pool): State<PgPool>,
) -> (StatusCode, Json<ReadinessResponse>) {
    match sqlx::query("SELECT 1").execute(&pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ReadinessResponse {
                status: "ok",
                database: true,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    status: "unavailable",
                    database: false,
                }),
            )
        }
    }
}
