//! Tenant disable DTOs.

use serde::Serialize;
use utoipa::ToSchema;

/// Response from a successful tenant disablement.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DisableTenantResponse {
    /// Always `"success"`.
    pub status: String,

    /// Human-readable confirmation.
    pub message: String,

    /// Freshly generated superuser credential.
    ///
    /// Returned exactly once; not retrievable afterwards through this API.
    pub admin_password: String,
}

impl DisableTenantResponse {
    /// Build the response for a disabled tenant.
    #[must_use]
    pub fn disabled(name: &str, admin_password: String) -> Self {
        Self {
            status: "success".to_string(),
            message: format!("Tenant '{name}' has been disabled"),
            admin_password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_shape() {
        let response = DisableTenantResponse::disabled("acme", "kiosk_adm_abc123".to_string());
        assert_eq!(response.status, "success");
        assert_eq!(response.message, "Tenant 'acme' has been disabled");
        assert_eq!(response.admin_password, "kiosk_adm_abc123");
    }

    #[test]
    fn test_serialization_includes_password_once() {
        let response = DisableTenantResponse::disabled("acme", "pw".to_string());
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"admin_password\":\"pw\""));
    }
}
