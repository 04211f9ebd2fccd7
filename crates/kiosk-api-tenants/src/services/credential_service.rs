//! Random credential and session token generation.

use rand::rngs::OsRng;
use rand::RngCore;

/// Prefix for generated administrator credentials.
pub const ADMIN_PASSWORD_PREFIX: &str = "kiosk_adm_";

/// Prefix for session tokens.
pub const SESSION_TOKEN_PREFIX: &str = "sess_";

/// Random bytes behind each generated secret.
const SECRET_BYTES: usize = 16;

/// Generates credentials from the operating system's CSPRNG.
#[derive(Debug, Clone, Default)]
pub struct CredentialService;

impl CredentialService {
    /// Create a new credential service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh administrator password.
    ///
    /// Shown to the caller once at disable time; only its argon2 hash is
    /// stored on the superuser account.
    #[must_use]
    pub fn generate_admin_password(&self) -> String {
        format!("{ADMIN_PASSWORD_PREFIX}{}", self.random_hex())
    }

    /// Generate a session token for a successful login.
    #[must_use]
    pub fn generate_session_token(&self) -> String {
        format!("{SESSION_TOKEN_PREFIX}{}", self.random_hex())
    }

    fn random_hex(&self) -> String {
        let mut bytes = [0u8; SECRET_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_password_format() {
        let service = CredentialService::new();
        let password = service.generate_admin_password();

        assert!(password.starts_with(ADMIN_PASSWORD_PREFIX));
        assert_eq!(password.len(), ADMIN_PASSWORD_PREFIX.len() + SECRET_BYTES * 2);
    }

    #[test]
    fn test_session_token_format() {
        let service = CredentialService::new();
        let token = service.generate_session_token();

        assert!(token.starts_with(SESSION_TOKEN_PREFIX));
        assert_eq!(token.len(), SESSION_TOKEN_PREFIX.len() + SECRET_BYTES * 2);
    }

    #[test]
    fn test_secrets_are_unique() {
        let service = CredentialService::new();
        assert_ne!(
            service.generate_admin_password(),
            service.generate_admin_password()
        );
        assert_ne!(
            service.generate_session_token(),
            service.generate_session_token()
        );
    }
}
