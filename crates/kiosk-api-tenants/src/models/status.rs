//! Tenant status DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Operational status of a tenant as observed through the control plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TenantStatus {
    /// The database does not exist in the cluster catalog.
    NotFound,

    /// The database exists and its registry answered.
    Operational,

    /// The database exists but opening it or reading its registry failed.
    ///
    /// Callers should retry this, unlike `not_found`.
    DatabaseExistsRegistryError,

    /// Catch-all for unexpected failures.
    Error,
}

impl TenantStatus {
    /// Wire representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TenantStatus::NotFound => "not_found",
            TenantStatus::Operational => "operational",
            TenantStatus::DatabaseExistsRegistryError => "database_exists_registry_error",
            TenantStatus::Error => "error",
        }
    }
}

/// Response body for the tenant status endpoint.
///
/// Absence is encoded in the body, not the HTTP status code.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TenantStatusResponse {
    /// The tenant database that was inspected.
    pub database: String,

    /// Whether the database exists in the cluster catalog.
    pub exists: bool,

    /// Status classification.
    pub status: TenantStatus,

    /// Installed modules; empty when unavailable.
    pub modules: Vec<String>,

    /// Platform schema version; absent when unavailable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl TenantStatusResponse {
    /// Status for a database absent from the catalog.
    #[must_use]
    pub fn not_found(database: &str) -> Self {
        Self {
            database: database.to_string(),
            exists: false,
            status: TenantStatus::NotFound,
            modules: Vec::new(),
            version: None,
        }
    }

    /// Status for a reachable, answering tenant.
    #[must_use]
    pub fn operational(database: &str, modules: Vec<String>, version: Option<String>) -> Self {
        Self {
            database: database.to_string(),
            exists: true,
            status: TenantStatus::Operational,
            modules,
            version,
        }
    }

    /// Status for a tenant that exists but could not be opened.
    #[must_use]
    pub fn registry_error(database: &str) -> Self {
        Self {
            database: database.to_string(),
            exists: true,
            status: TenantStatus::DatabaseExistsRegistryError,
            modules: Vec::new(),
            version: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(TenantStatus::NotFound.as_str(), "not_found");
        assert_eq!(TenantStatus::Operational.as_str(), "operational");
        assert_eq!(
            TenantStatus::DatabaseExistsRegistryError.as_str(),
            "database_exists_registry_error"
        );
        assert_eq!(TenantStatus::Error.as_str(), "error");
    }

    #[test]
    fn test_status_serde_matches_as_str() {
        for status in [
            TenantStatus::NotFound,
            TenantStatus::Operational,
            TenantStatus::DatabaseExistsRegistryError,
            TenantStatus::Error,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_not_found_shape() {
        let response = TenantStatusResponse::not_found("ghost");
        assert!(!response.exists);
        assert_eq!(response.status, TenantStatus::NotFound);
        assert!(response.modules.is_empty());

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"exists\":false"));
        assert!(json.contains("\"status\":\"not_found\""));
        // version is omitted entirely when unknown
        assert!(!json.contains("version"));
    }

    #[test]
    fn test_registry_error_still_exists() {
        // Existence was confirmed by the catalog; only detail is missing.
        let response = TenantStatusResponse::registry_error("acme");
        assert!(response.exists);
        assert_eq!(response.status, TenantStatus::DatabaseExistsRegistryError);
    }

    #[test]
    fn test_operational_shape() {
        let response = TenantStatusResponse::operational(
            "acme",
            vec!["base".to_string()],
            Some("0.3.0".to_string()),
        );
        assert!(response.exists);
        assert_eq!(response.status, TenantStatus::Operational);
        assert_eq!(response.version.as_deref(), Some("0.3.0"));
    }
}
