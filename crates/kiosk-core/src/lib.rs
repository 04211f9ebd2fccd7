//! kiosk Core Library
//!
//! Shared types for the kiosk tenant control plane.
//!
//! # Modules
//!
//! - [`name`] - Validated tenant database name ([`TenantName`])
//!
//! # Example
//!
//! ```
//! use kiosk_core::TenantName;
//!
//! let name: TenantName = "acme_pos".parse().unwrap();
//! assert_eq!(name.as_str(), "acme_pos");
//!
//! // Names that are not safe database identifiers are rejected
//! assert!("Robert'); DROP".parse::<TenantName>().is_err());
//! ```

pub mod name;

pub use name::{InvalidTenantName, TenantName};
