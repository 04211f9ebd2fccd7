//! Error types for the tenant lifecycle API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use kiosk_db::DbError;

/// Errors that can occur during tenant lifecycle operations.
///
/// Retry semantics per variant: `InvalidArgument`, `NotFound`,
/// `AlreadyExists` and `InvalidCredentials` are never worth retrying;
/// `AuthBackend` may be retried; `Provisioning` and `Disable` carry the
/// underlying infrastructure message verbatim and leave the retry decision
/// to the caller.
#[derive(Debug, Error)]
pub enum TenantError {
    /// Missing or malformed required input.
    #[error("{0}")]
    InvalidArgument(String),

    /// Tenant absent from the cluster catalog.
    #[error("Tenant '{0}' not found")]
    NotFound(String),

    /// Tenant creation conflicts with an existing database.
    #[error("Database '{0}' already exists")]
    AlreadyExists(String),

    /// Credential verification failed.
    ///
    /// Deliberately carries no detail: wrong login and wrong password are
    /// indistinguishable on the wire.
    #[error("Invalid login or password")]
    InvalidCredentials,

    /// The authentication backend failed for a reason other than bad
    /// credentials.
    #[error("Authentication backend error: {0}")]
    AuthBackend(String),

    /// Provisioning the tenant database failed.
    #[error("{0}")]
    Provisioning(String),

    /// The disable transaction failed and was rolled back.
    #[error("{0}")]
    Disable(String),

    /// Database error outside the cases above.
    #[error("Database error: {0}")]
    Database(String),

    /// Unauthorized request (missing or wrong API key).
    #[error("{0}")]
    Unauthorized(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TenantError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<DbError> for TenantError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::AlreadyExists(name) => Self::AlreadyExists(name),
            other => Self::Database(other.to_string()),
        }
    }
}

/// Error body for the `success`/`error` endpoint family
/// (create, login, module sync).
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Always `false` for errors.
    pub success: bool,
    /// Human-readable error message.
    pub error: String,
}

impl IntoResponse for TenantError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            TenantError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            TenantError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            TenantError::AlreadyExists(_) => (StatusCode::CONFLICT, self.to_string()),
            TenantError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            TenantError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            TenantError::AuthBackend(msg) => {
                tracing::error!("Auth backend error: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, self.to_string())
            }
            // Infrastructure failures are surfaced verbatim so operators can
            // act on the underlying message.
            TenantError::Provisioning(msg) | TenantError::Disable(msg) => {
                tracing::error!("Lifecycle operation failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            TenantError::Database(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
            TenantError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            success: false,
            error: message,
        };

        (status, Json(body)).into_response()
    }
}

/// Error body for the `status`/`message` endpoint family (tenant delete).
///
/// The source API grew two error shapes; both are preserved per endpoint
/// for client compatibility.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct StatusErrorBody {
    /// Always `"error"`.
    pub status: String,
    /// Human-readable error message.
    pub message: String,
}

/// Wrapper rendering a [`TenantError`] in the `status`/`message` family.
#[derive(Debug)]
pub struct StatusFamily(pub TenantError);

impl From<TenantError> for StatusFamily {
    fn from(err: TenantError) -> Self {
        Self(err)
    }
}

impl From<DbError> for StatusFamily {
    fn from(err: DbError) -> Self {
        Self(TenantError::from(err))
    }
}

impl IntoResponse for StatusFamily {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TenantError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            TenantError::NotFound(_) => StatusCode::NOT_FOUND,
            TenantError::AlreadyExists(_) => StatusCode::CONFLICT,
            TenantError::InvalidCredentials | TenantError::Unauthorized(_) => {
                StatusCode::UNAUTHORIZED
            }
            TenantError::AuthBackend(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self.0 {
            TenantError::Database(msg) | TenantError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An unexpected error occurred".to_string()
            }
            other => other.to_string(),
        };

        let body = StatusErrorBody {
            status: "error".to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message_is_fixed() {
        // Must not leak whether the login or the password was wrong.
        assert_eq!(
            TenantError::InvalidCredentials.to_string(),
            "Invalid login or password"
        );
    }

    #[test]
    fn test_provisioning_message_is_verbatim() {
        let err = TenantError::Provisioning("disk full".to_string());
        assert_eq!(err.to_string(), "disk full");
    }

    #[test]
    fn test_db_error_maps_to_database() {
        let err: TenantError = DbError::NotFound("x".to_string()).into();
        assert!(matches!(err, TenantError::Database(_)));
    }

    #[test]
    fn test_db_already_exists_keeps_conflict_status() {
        let err: TenantError = DbError::AlreadyExists("acme".to_string()).into();
        assert!(matches!(err, TenantError::AlreadyExists(_)));
    }

    #[test]
    fn test_not_found_names_tenant() {
        let err = TenantError::NotFound("acme".to_string());
        assert_eq!(err.to_string(), "Tenant 'acme' not found");
    }
}
