//! Request and response DTOs for the tenant lifecycle API.

pub mod create;
pub mod disable;
pub mod list;
pub mod login;
pub mod status;
pub mod sync;

pub use create::{CreateTenantRequest, CreateTenantResponse};
pub use disable::DisableTenantResponse;
pub use list::TenantListResponse;
pub use login::{TenantLoginRequest, TenantLoginResponse, UserCompany};
pub use status::{TenantStatus, TenantStatusResponse};
pub use sync::{ModuleFailure, SyncModulesRequest, SyncModulesResponse, SyncReport};
