//! Authentication service for the operator endpoints.

use hmac::digest::CtOutput;
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Domain-separation key for credential digests. Not a secret; equality of
/// the MACs is what matters, and `CtOutput` compares them in constant time.
const MAC_KEY: &[u8] = b"phishsim-credential-check";

/// Service for authenticating operator requests against injected
/// configuration credentials.
///
/// Both sides of the comparison are run through HMAC-SHA256 first, so no
/// byte of the configured credential is compared directly against
/// caller-controlled input.
pub struct AuthService {
    admin_user: String,
    admin_pass: String,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `admin_user` / `admin_pass` - expected credentials, injected from
    ///   [`crate::config::Config`]
    pub fn new(admin_user: String, admin_pass: String) -> Self {
        Self {
            admin_user,
            admin_pass,
        }
    }

    fn digest(value: &str) -> CtOutput<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(MAC_KEY).expect("HMAC accepts any key length");
        mac.update(value.as_bytes());
        mac.finalize()
    }

    /// Verifies a username/password pair against the configured credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when either part does not match.
    pub fn verify(&self, username: &str, password: &str) -> Result<(), AppError> {
        let user_ok = Self::digest(username) == Self::digest(&self.admin_user);
        let pass_ok = Self::digest(password) == Self::digest(&self.admin_pass);

        if user_ok && pass_ok {
            Ok(())
        } else {
            Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid credentials" }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> AuthService {
        AuthService::new("admin".to_string(), "test-password".to_string())
    }

    #[test]
    fn test_verify_success() {
        let service = test_service();
        assert!(service.verify("admin", "test-password").is_ok());
    }

    #[test]
    fn test_verify_wrong_password() {
        let service = test_service();
        let result = service.verify("admin", "wrong");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_verify_wrong_username() {
        let service = test_service();
        let result = service.verify("root", "test-password");
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_empty_credentials() {
        let service = test_service();
        assert!(service.verify("", "").is_err());
    }
}
