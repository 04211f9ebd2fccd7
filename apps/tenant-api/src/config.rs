//! Application configuration loaded from environment variables.
//!
//! Fail-fast loading with validation: required variables must be present
//! and valid or the application exits with a clear error message.

use std::env;

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maintenance database connection URL. Per-tenant URLs are derived
    /// from it by swapping the database name.
    pub database_url: String,

    /// Host to bind to.
    pub host: String,

    /// Port to bind to.
    pub port: u16,

    /// Log filter directive.
    pub rust_log: String,

    /// API key for the admin tier (create, disable).
    pub admin_api_key: String,

    /// API key for the service tier; the tier is open when unset.
    pub service_api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a required variable is missing or a
    /// value cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require_var("DATABASE_URL")?;
        let admin_api_key = require_var("ADMIN_API_KEY")?;

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port_str = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
        let port: u16 = port_str.parse().map_err(|_| ConfigError::InvalidValue {
            var: "PORT".to_string(),
            message: format!("'{port_str}' is not a valid port number"),
        })?;

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let service_api_key = env::var("SERVICE_API_KEY").ok().filter(|v| !v.is_empty());

        Ok(Self {
            database_url,
            host,
            port,
            rust_log,
            admin_api_key,
            service_api_key,
        })
    }

    /// Bind address string for the HTTP listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ConfigError::MissingVar(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr() {
        let config = Config {
            database_url: "postgres://localhost/kiosk".to_string(),
            host: "127.0.0.1".to_string(),
            port: 9000,
            rust_log: "info".to_string(),
            admin_api_key: "key".to_string(),
            service_api_key: None,
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_missing_var_error_names_variable() {
        let err = ConfigError::MissingVar("DATABASE_URL".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: DATABASE_URL"
        );
    }

    #[test]
    fn test_invalid_value_error_message() {
        let err = ConfigError::InvalidValue {
            var: "PORT".to_string(),
            message: "'abc' is not a valid port number".to_string(),
        };
        assert!(err.to_string().contains("PORT"));
        assert!(err.to_string().contains("abc"));
    }
}
