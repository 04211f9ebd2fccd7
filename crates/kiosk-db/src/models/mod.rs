//! Row types for the per-tenant schema, with their query methods.

pub mod company;
pub mod config_setting;
pub mod disablement;
pub mod module;
pub mod session;
pub mod user;

pub use company::Company;
pub use config_setting::ConfigSetting;
pub use disablement::DisablementMarker;
pub use module::{TenantModule, MODULE_STATE_INSTALLED, MODULE_STATE_UNINSTALLED};
pub use session::TenantSession;
pub use user::TenantUser;
