//! Tenant login DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request body for tenant login.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TenantLoginRequest {
    /// Tenant database to authenticate against.
    #[schema(example = "acme_pos")]
    pub db_name: String,

    /// User login.
    #[schema(example = "admin@acme.example")]
    pub login: String,

    /// User password.
    pub password: String,
}

impl TenantLoginRequest {
    /// Validate that all required fields are present.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.db_name.trim().is_empty() {
            return Some("db_name is required".to_string());
        }
        if self.login.trim().is_empty() {
            return Some("login is required".to_string());
        }
        if self.password.is_empty() {
            return Some("password is required".to_string());
        }
        None
    }
}

/// A company the authenticated user may act as.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserCompany {
    /// Company identifier.
    pub id: Uuid,

    /// Company display name.
    pub name: String,
}

/// Response from a successful tenant login.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TenantLoginResponse {
    /// Always `true` on success.
    pub success: bool,

    /// Authenticated user identifier.
    pub uid: Uuid,

    /// Tenant database the session is bound to.
    pub db: String,

    /// Display name of the user.
    pub partner_name: String,

    /// Login of the user.
    pub username: String,

    /// Active company identifier.
    pub company_id: Uuid,

    /// Active company display name.
    pub company_name: String,

    /// Companies the user is a member of.
    pub user_companies: Vec<UserCompany>,

    /// Whether the user is the designated superuser.
    pub is_system: bool,

    /// Opaque session token.
    ///
    /// Shown once; the platform session store owns its lifetime.
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let request = TenantLoginRequest {
            db_name: "acme".to_string(),
            login: "admin".to_string(),
            password: "pw".to_string(),
        };
        assert!(request.validate().is_none());
    }

    #[test]
    fn test_validate_missing_db_name() {
        let request = TenantLoginRequest {
            db_name: "  ".to_string(),
            login: "admin".to_string(),
            password: "pw".to_string(),
        };
        assert_eq!(request.validate(), Some("db_name is required".to_string()));
    }

    #[test]
    fn test_validate_missing_password() {
        let request = TenantLoginRequest {
            db_name: "acme".to_string(),
            login: "admin".to_string(),
            password: String::new(),
        };
        assert_eq!(request.validate(), Some("password is required".to_string()));
    }

    #[test]
    fn test_response_serialization() {
        let response = TenantLoginResponse {
            success: true,
            uid: Uuid::new_v4(),
            db: "acme".to_string(),
            partner_name: "Admin".to_string(),
            username: "admin@acme.example".to_string(),
            company_id: Uuid::new_v4(),
            company_name: "acme company".to_string(),
            user_companies: vec![],
            is_system: true,
            session_id: "sess_abc".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"db\":\"acme\""));
        assert!(json.contains("\"session_id\":\"sess_abc\""));
        assert!(json.contains("\"user_companies\":[]"));
    }
}
