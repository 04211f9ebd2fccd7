//! HTTP handlers for the tenant lifecycle API.

pub mod create;
pub mod disable;
pub mod list;
pub mod login;
pub mod modules;
pub mod status;

pub use create::create_tenant_handler;
pub use disable::disable_tenant_handler;
pub use list::list_tenants_handler;
pub use login::tenant_login_handler;
pub use modules::sync_modules_handler;
pub use status::tenant_status_handler;
