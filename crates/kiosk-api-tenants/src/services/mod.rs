//! Services for the tenant lifecycle API.

pub mod auth_service;
pub mod credential_service;
pub mod lifecycle_service;
pub mod module_service;

pub use auth_service::AuthService;
pub use credential_service::CredentialService;
pub use lifecycle_service::LifecycleService;
pub use module_service::ModuleService;
