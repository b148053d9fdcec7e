use argon2::Argon2;
use password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use crate::model::Principal;
use crate::service::{AuthError, AuthService};

impl AuthService {
    /// Verify a username/password pair and return the authenticated
    /// principal.
    ///
    /// Unknown usernames and wrong passwords produce the same
    /// [`AuthError::InvalidCredentials`]; the password comparison is the
    /// hashing library's constant-time verify. The raw password is never
    /// logged and never appears in an error.
    pub fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Principal, AuthError> {
        let user = self
            .find_user_by_username(username)?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(&user.password_hash, password) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(Principal::from_user(&user))
    }
}

/// Verify a password against an argon2id PHC-format hash.
pub fn verify_password(phc: &str, password: &str) -> bool {
    match PasswordHash::new(phc) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Hash a password with argon2id, producing a PHC string.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let mut salt_bytes = [0u8; 16];
    getrandom::getrandom(&mut salt_bytes)
        .map_err(|e| AuthError::Internal(format!("salt generation failed: {}", e)))?;
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| AuthError::Internal(format!("salt encoding failed: {}", e)))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::Internal(format!("password hashing failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testutil::{seed_user, test_service};

    #[test]
    fn hash_then_verify_roundtrip() {
        let phc = hash_password("P@assword123.0").unwrap();
        assert!(phc.starts_with("$argon2id$"));
        assert!(verify_password(&phc, "P@assword123.0"));
        assert!(!verify_password(&phc, "P@assword123.1"));
    }

    #[test]
    fn verify_password_rejects_garbage_hash() {
        assert!(!verify_password("not-a-hash", "anything"));
    }

    #[test]
    fn valid_credentials_produce_principal() {
        let svc = test_service();
        let user = seed_user(&svc);

        let principal = svc
            .verify_credentials("user@data.io", "P@assword123.0")
            .unwrap();
        assert_eq!(principal.id, user.id);
        assert_eq!(principal.username, "user@data.io");
        assert!(principal.roles.contains("admin"));
    }

    #[test]
    fn wrong_password_and_unknown_user_are_indistinguishable() {
        let svc = test_service();
        seed_user(&svc);

        let wrong_password = svc
            .verify_credentials("user@data.io", "nope")
            .unwrap_err();
        let unknown_user = svc
            .verify_credentials("nobody@data.io", "P@assword123.0")
            .unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_user, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }
}
