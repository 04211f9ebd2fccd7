//! Request authentication middleware.
//!
//! The platform's end-user session layer is an external collaborator; what
//! this crate carries itself is the API-key gate for the administrative and
//! service tiers.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use sha2::{Digest, Sha256};

use crate::error::TenantError;
use crate::router::TenantAppState;

/// API keys accepted by the control plane.
#[derive(Debug, Clone)]
pub struct ApiKeys {
    /// Key required for tenant creation and disablement.
    pub admin_key: String,

    /// Key required for the service tier (sync, status, listing).
    ///
    /// `None` leaves the service tier open, for deployments where the host
    /// platform already authenticates those calls.
    pub service_key: Option<String>,
}

impl ApiKeys {
    /// Check a presented key against the admin key.
    #[must_use]
    pub fn is_admin(&self, presented: &str) -> bool {
        digest_eq(presented, &self.admin_key)
    }

    /// Check a presented key against the service tier.
    ///
    /// The admin key is accepted wherever the service key is.
    #[must_use]
    pub fn is_service(&self, presented: &str) -> bool {
        match &self.service_key {
            Some(key) => digest_eq(presented, key) || self.is_admin(presented),
            None => true,
        }
    }
}

/// Compare two keys by SHA-256 digest so the comparison time does not
/// depend on where the strings first differ.
fn digest_eq(a: &str, b: &str) -> bool {
    Sha256::digest(a.as_bytes()) == Sha256::digest(b.as_bytes())
}

/// Extract the bearer token from the Authorization header.
fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

/// Gate for admin-only endpoints (create, disable).
pub async fn require_admin_key(
    State(state): State<TenantAppState>,
    req: Request,
    next: Next,
) -> Response {
    match bearer_token(&req) {
        Some(token) if state.keys.is_admin(token) => next.run(req).await,
        _ => TenantError::Unauthorized("admin API key required".to_string()).into_response(),
    }
}

/// Gate for service-tier endpoints (sync, status, listing).
pub async fn require_service_key(
    State(state): State<TenantAppState>,
    req: Request,
    next: Next,
) -> Response {
    if state.keys.service_key.is_none() {
        return next.run(req).await;
    }

    match bearer_token(&req) {
        Some(token) if state.keys.is_service(token) => next.run(req).await,
        _ => TenantError::Unauthorized("service API key required".to_string()).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(service: Option<&str>) -> ApiKeys {
        ApiKeys {
            admin_key: "admin-secret".to_string(),
            service_key: service.map(str::to_string),
        }
    }

    #[test]
    fn test_admin_key_match() {
        let keys = keys(None);
        assert!(keys.is_admin("admin-secret"));
        assert!(!keys.is_admin("admin-secre"));
        assert!(!keys.is_admin(""));
    }

    #[test]
    fn test_service_tier_open_when_unset() {
        let keys = keys(None);
        assert!(keys.is_service("anything"));
    }

    #[test]
    fn test_service_key_match() {
        let keys = keys(Some("svc-secret"));
        assert!(keys.is_service("svc-secret"));
        assert!(!keys.is_service("wrong"));
    }

    #[test]
    fn test_admin_key_passes_service_tier() {
        let keys = keys(Some("svc-secret"));
        assert!(keys.is_service("admin-secret"));
    }
}
