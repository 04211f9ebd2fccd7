//! Storage access for the kiosk tenant control plane.
//!
//! One Postgres cluster holds a maintenance database (the control plane's
//! own storage) plus one database per tenant. This crate provides:
//!
//! - [`catalog`] - enumeration and existence checks over the cluster's
//!   database catalog, with no per-tenant connection
//! - [`connect`] - a per-tenant connection factory ([`TenantConnector`])
//! - [`provision`] - database creation and per-tenant schema bootstrap
//! - [`directory`] - the control-plane visibility registry consulted by
//!   the tenant selector
//! - [`models`] - per-tenant row types with their query methods
//!
//! All queries use runtime-checked sqlx so the crate builds without a live
//! database.

pub mod catalog;
pub mod connect;
pub mod directory;
pub mod error;
pub mod models;
pub mod provision;

pub use catalog::Catalog;
pub use connect::TenantConnector;
pub use directory::TenantDirectory;
pub use error::DbError;
pub use provision::Provisioner;
