//! Tenant lifecycle API for the kiosk platform.
//!
//! Exposes the control-plane HTTP surface over a database-per-tenant
//! Postgres cluster: provisioning, login, module sync, status inspection,
//! listing and disablement.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod router;
pub mod services;

pub use error::{ErrorBody, StatusErrorBody, StatusFamily, TenantError};
pub use middleware::ApiKeys;
pub use router::{tenant_router, TenantAppState};
