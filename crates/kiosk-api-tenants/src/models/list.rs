//! Tenant listing DTOs.

use serde::Serialize;
use utoipa::ToSchema;

/// Response body for the tenant listing endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TenantListResponse {
    /// Always `"success"`.
    pub status: String,

    /// Number of visible tenants.
    pub count: usize,

    /// Visible tenant database names, sorted.
    pub tenants: Vec<String>,
}

impl TenantListResponse {
    /// Build the response from the visible tenant names.
    #[must_use]
    pub fn new(tenants: Vec<String>) -> Self {
        Self {
            status: "success".to_string(),
            count: tenants.len(),
            tenants,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_matches() {
        let response = TenantListResponse::new(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(response.count, 2);
        assert_eq!(response.status, "success");
    }

    #[test]
    fn test_empty_listing() {
        let response = TenantListResponse::new(vec![]);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"count\":0"));
        assert!(json.contains("\"tenants\":[]"));
    }
}
