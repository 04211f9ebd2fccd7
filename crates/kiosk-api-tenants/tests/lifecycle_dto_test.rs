//! Integration tests for tenant lifecycle request/response models.

use kiosk_api_tenants::models::{
    CreateTenantRequest, CreateTenantResponse, DisableTenantResponse, SyncModulesRequest,
    TenantListResponse, TenantLoginRequest, TenantStatusResponse,
};

/// Test that create validation rejects an empty database name.
#[test]
fn test_create_request_validation_empty_db_name() {
    let request = CreateTenantRequest {
        db_name: String::new(),
        login: "admin@acme.example".to_string(),
        password: "s3cret".to_string(),
    };
    assert_eq!(request.validate().unwrap_err(), "db_name is required");
}

/// Test that create validation rejects names unsafe as Postgres identifiers.
#[test]
fn test_create_request_validation_unsafe_db_name() {
    for bad in ["acme;drop", "Acme", "9lives", "acme pos", "acme\"x"] {
        let request = CreateTenantRequest {
            db_name: bad.to_string(),
            login: "admin".to_string(),
            password: "pw".to_string(),
        };
        let err = request.validate().unwrap_err();
        assert!(err.contains("db_name is invalid"), "accepted {bad:?}");
    }
}

/// Test that create validation accepts a well-formed request.
#[test]
fn test_create_request_validation_valid() {
    let request = CreateTenantRequest {
        db_name: "acme_pos".to_string(),
        login: "admin@acme.example".to_string(),
        password: "s3cret".to_string(),
    };
    assert_eq!(request.validate().unwrap().as_str(), "acme_pos");
}

/// Test create request deserialization from the wire shape.
#[test]
fn test_create_request_deserialization() {
    let json = r#"{"db_name":"acme_pos","login":"admin@acme.example","password":"pw"}"#;
    let request: CreateTenantRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.db_name, "acme_pos");
    assert_eq!(request.login, "admin@acme.example");
}

/// Test create response serialization.
#[test]
fn test_create_response_serialization() {
    let name = "acme_pos".parse().unwrap();
    let response = CreateTenantResponse::created(&name);

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"success\":true"));
    assert!(json.contains("Database 'acme_pos' created successfully"));
}

/// Test that login validation reports the first missing field.
#[test]
fn test_login_request_validation_order() {
    let request = TenantLoginRequest {
        db_name: String::new(),
        login: String::new(),
        password: String::new(),
    };
    assert_eq!(request.validate(), Some("db_name is required".to_string()));
}

/// Test that sync validation rejects an empty module list.
#[test]
fn test_sync_request_validation_empty_modules() {
    let request = SyncModulesRequest {
        db_name: "acme".to_string(),
        modules: vec![],
    };
    assert_eq!(
        request.validate().unwrap_err(),
        "modules must not be empty"
    );
}

/// Test sync request deserialization preserves module order.
#[test]
fn test_sync_request_deserialization_preserves_order() {
    let json = r#"{"db_name":"acme","modules":["point_of_sale","stock","barcodes"]}"#;
    let request: SyncModulesRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.modules, ["point_of_sale", "stock", "barcodes"]);
}

/// Test status response serialization for a missing tenant.
#[test]
fn test_status_response_not_found_serialization() {
    let response = TenantStatusResponse::not_found("ghost");

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"database\":\"ghost\""));
    assert!(json.contains("\"exists\":false"));
    assert!(json.contains("\"status\":\"not_found\""));
}

/// Test status response serialization for an operational tenant.
#[test]
fn test_status_response_operational_serialization() {
    let response = TenantStatusResponse::operational(
        "acme",
        vec!["base".to_string(), "web".to_string()],
        Some("0.3.0".to_string()),
    );

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"status\":\"operational\""));
    assert!(json.contains("\"modules\":[\"base\",\"web\"]"));
    assert!(json.contains("\"version\":\"0.3.0\""));
}

/// Test listing response serialization.
#[test]
fn test_list_response_serialization() {
    let response = TenantListResponse::new(vec!["acme".to_string(), "globex".to_string()]);

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"status\":\"success\""));
    assert!(json.contains("\"count\":2"));
    assert!(json.contains("\"tenants\":[\"acme\",\"globex\"]"));
}

/// Test disable response carries the one-time credential.
#[test]
fn test_disable_response_serialization() {
    let response = DisableTenantResponse::disabled("acme", "kiosk_adm_0f3a".to_string());

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"status\":\"success\""));
    assert!(json.contains("Tenant 'acme' has been disabled"));
    assert!(json.contains("\"admin_password\":\"kiosk_adm_0f3a\""));
}
