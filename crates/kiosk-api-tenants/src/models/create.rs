//! Tenant creation DTOs.

use kiosk_core::TenantName;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for tenant creation.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTenantRequest {
    /// Name of the tenant database to create.
    #[schema(example = "acme_pos")]
    pub db_name: String,

    /// Login of the bootstrap administrator.
    #[schema(example = "admin@acme.example")]
    pub login: String,

    /// Password of the bootstrap administrator.
    pub password: String,
}

impl CreateTenantRequest {
    /// Validate the request, returning the parsed tenant name.
    ///
    /// All three fields are required; the database name must be a safe
    /// Postgres identifier.
    pub fn validate(&self) -> Result<TenantName, String> {
        if self.db_name.trim().is_empty() {
            return Err("db_name is required".to_string());
        }
        if self.login.trim().is_empty() {
            return Err("login is required".to_string());
        }
        if self.password.is_empty() {
            return Err("password is required".to_string());
        }

        self.db_name
            .parse::<TenantName>()
            .map_err(|e| format!("db_name is invalid: {e}"))
    }
}

/// Response from successful tenant creation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateTenantResponse {
    /// Always `true` on success.
    pub success: bool,

    /// Human-readable confirmation.
    #[schema(example = "Database 'acme_pos' created successfully")]
    pub message: String,
}

impl CreateTenantResponse {
    /// Build the success response for a created tenant.
    #[must_use]
    pub fn created(name: &TenantName) -> Self {
        Self {
            success: true,
            message: format!("Database '{name}' created successfully"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(db_name: &str, login: &str, password: &str) -> CreateTenantRequest {
        CreateTenantRequest {
            db_name: db_name.to_string(),
            login: login.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_validate_ok() {
        let name = request("acme_pos", "admin@acme.example", "s3cret")
            .validate()
            .unwrap();
        assert_eq!(name.as_str(), "acme_pos");
    }

    #[test]
    fn test_validate_missing_fields() {
        assert!(request("", "admin", "pw").validate().is_err());
        assert!(request("acme", "", "pw").validate().is_err());
        assert!(request("acme", "admin", "").validate().is_err());
    }

    #[test]
    fn test_validate_unsafe_db_name() {
        let err = request("acme;drop", "admin", "pw").validate().unwrap_err();
        assert!(err.contains("db_name is invalid"));
    }

    #[test]
    fn test_created_message() {
        let name: TenantName = "acme".parse().unwrap();
        let response = CreateTenantResponse::created(&name);
        assert!(response.success);
        assert_eq!(response.message, "Database 'acme' created successfully");
    }
}
