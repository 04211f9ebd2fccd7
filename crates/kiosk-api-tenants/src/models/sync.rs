//! Module sync DTOs.

use kiosk_core::TenantName;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for module synchronization.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SyncModulesRequest {
    /// Tenant database to install/upgrade modules on.
    #[schema(example = "acme_pos")]
    pub db_name: String,

    /// Modules to install or upgrade, processed in order.
    #[schema(example = json!(["point_of_sale", "stock"]))]
    pub modules: Vec<String>,
}

impl SyncModulesRequest {
    /// Validate the request, returning the parsed tenant name.
    ///
    /// Rejected before any tenant connection is opened.
    pub fn validate(&self) -> Result<TenantName, String> {
        if self.db_name.trim().is_empty() {
            return Err("db_name is required".to_string());
        }
        if self.modules.is_empty() {
            return Err("modules must not be empty".to_string());
        }

        self.db_name
            .parse::<TenantName>()
            .map_err(|e| format!("db_name is invalid: {e}"))
    }
}

/// A module that could not be installed or upgraded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ModuleFailure {
    /// Module name as requested.
    pub name: String,

    /// Why the module failed.
    #[schema(example = "not found")]
    pub error: String,
}

/// Outcome of a module sync run.
///
/// Modules are processed independently; one failure never aborts the rest.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct SyncReport {
    /// Modules freshly installed.
    pub installed: Vec<String>,

    /// Modules that were already installed and were upgraded instead.
    pub upgraded: Vec<String>,

    /// Modules that failed, with reasons.
    pub failed: Vec<ModuleFailure>,
}

impl SyncReport {
    /// Overall success: `false` only when every requested module failed.
    #[must_use]
    pub fn success(&self) -> bool {
        !(self.installed.is_empty() && self.upgraded.is_empty())
    }
}

/// Response body for module synchronization.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SyncModulesResponse {
    /// `false` only when every requested module failed.
    pub success: bool,

    /// Modules freshly installed.
    pub installed: Vec<String>,

    /// Modules upgraded in place.
    pub upgraded: Vec<String>,

    /// Modules that failed, with reasons.
    pub failed: Vec<ModuleFailure>,
}

impl From<SyncReport> for SyncModulesResponse {
    fn from(report: SyncReport) -> Self {
        Self {
            success: report.success(),
            installed: report.installed,
            upgraded: report.upgraded,
            failed: report.failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(db_name: &str, modules: &[&str]) -> SyncModulesRequest {
        SyncModulesRequest {
            db_name: db_name.to_string(),
            modules: modules.iter().map(|m| (*m).to_string()).collect(),
        }
    }

    #[test]
    fn test_validate_ok() {
        let name = request("acme", &["point_of_sale"]).validate().unwrap();
        assert_eq!(name.as_str(), "acme");
    }

    #[test]
    fn test_validate_empty_modules() {
        let err = request("acme", &[]).validate().unwrap_err();
        assert_eq!(err, "modules must not be empty");
    }

    #[test]
    fn test_validate_missing_db_name() {
        let err = request("", &["stock"]).validate().unwrap_err();
        assert_eq!(err, "db_name is required");
    }

    #[test]
    fn test_report_success_partial_failure() {
        // One success among failures is still an overall success.
        let report = SyncReport {
            installed: vec!["mod_b".to_string()],
            upgraded: vec![],
            failed: vec![ModuleFailure {
                name: "mod_a".to_string(),
                error: "not found".to_string(),
            }],
        };
        assert!(report.success());
    }

    #[test]
    fn test_report_success_all_failed() {
        let report = SyncReport {
            installed: vec![],
            upgraded: vec![],
            failed: vec![
                ModuleFailure {
                    name: "mod_a".to_string(),
                    error: "not found".to_string(),
                },
                ModuleFailure {
                    name: "mod_b".to_string(),
                    error: "not found".to_string(),
                },
            ],
        };
        assert!(!report.success());
    }

    #[test]
    fn test_report_success_upgrades_only() {
        let report = SyncReport {
            installed: vec![],
            upgraded: vec!["base".to_string()],
            failed: vec![],
        };
        assert!(report.success());
    }

    #[test]
    fn test_response_from_report() {
        let report = SyncReport {
            installed: vec!["stock".to_string()],
            upgraded: vec!["base".to_string()],
            failed: vec![],
        };
        let response = SyncModulesResponse::from(report);
        assert!(response.success);
        assert_eq!(response.installed, vec!["stock"]);
        assert_eq!(response.upgraded, vec!["base"]);
        assert!(response.failed.is_empty());
    }

    #[test]
    fn test_failure_serialization() {
        let failure = ModuleFailure {
            name: "mod_a".to_string(),
            error: "not found".to_string(),
        };
        let json = serde_json::to_string(&failure).unwrap();
        assert_eq!(json, r#"{"name":"mod_a","error":"not found"}"#);
    }
}
