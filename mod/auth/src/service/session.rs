use chrono::Utc;

use crate::model::{Principal, SessionTokens};
use crate::service::{AuthError, AuthService};

impl AuthService {
    /// Authenticate a username/password pair and issue a token pair.
    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SessionTokens, AuthError> {
        // One clock read per operation; every timestamp derives from it.
        let now = Utc::now();
        let principal = self.verify_credentials(username, password)?;
        self.issue_tokens(&principal, now)
    }

    /// Exchange a refresh token for a new token pair.
    ///
    /// The owning user is re-resolved from the store, so role and
    /// attribute changes since the last issuance land in the new access
    /// token. The presented record is left untouched: each refresh mints
    /// an additional token, bounded only by its own expiry or an
    /// explicit revoke, which allows concurrent sessions per user.
    pub fn refresh(&self, refresh_token_id: &str) -> Result<SessionTokens, AuthError> {
        let now = Utc::now();
        let record = self.find_valid_refresh_token(refresh_token_id, now)?;

        let user = match self.get_user(&record.user_id) {
            Ok(user) => user,
            // Owner deleted since issuance: the token is dead, and the
            // caller cannot tell this apart from expiry.
            Err(AuthError::NotFound(_)) => return Err(AuthError::InvalidRefreshToken),
            Err(e) => return Err(e),
        };

        self.issue_tokens(&Principal::from_user(&user), now)
    }

    /// Revoke a refresh token, ending that session.
    ///
    /// Always succeeds, whether or not the id ever existed.
    pub fn revoke(&self, refresh_token_id: &str) -> Result<(), AuthError> {
        self.delete_refresh_token(refresh_token_id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{decode, DecodingKey, Validation};

    use crate::model::Claims;
    use crate::service::testutil::{seed_user, test_service};
    use crate::service::AuthError;

    fn decode_claims(token: &str) -> Claims {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret("catalog-dev-secret-change-me".as_bytes()),
            &Validation::default(),
        )
        .unwrap()
        .claims
    }

    fn is_uuid_shaped(id: &str) -> bool {
        id.len() == 36 && id.chars().filter(|c| *c == '-').count() == 4
    }

    #[test]
    fn authenticate_returns_bearer_pair() {
        let svc = test_service();
        seed_user(&svc);

        let tokens = svc.authenticate("user@data.io", "P@assword123.0").unwrap();
        assert!(!tokens.access_token.is_empty());
        assert_eq!(tokens.token_type, "Bearer");
        assert_eq!(tokens.expires_in, 43_200);
        assert!(is_uuid_shaped(&tokens.refresh_token));

        let claims = decode_claims(&tokens.access_token);
        assert_eq!(claims.sub, "user@data.io");
    }

    #[test]
    fn bad_credentials_fail_with_one_error_kind() {
        let svc = test_service();
        seed_user(&svc);

        let wrong = svc.authenticate("user@data.io", "wrong").unwrap_err();
        let unknown = svc.authenticate("ghost@data.io", "P@assword123.0").unwrap_err();
        assert!(matches!(wrong, AuthError::InvalidCredentials));
        assert!(matches!(unknown, AuthError::InvalidCredentials));
    }

    #[test]
    fn refresh_mints_new_token_and_leaves_original_valid() {
        let svc = test_service();
        seed_user(&svc);

        let first = svc.authenticate("user@data.io", "P@assword123.0").unwrap();
        let second = svc.refresh(&first.refresh_token).unwrap();

        assert_ne!(second.refresh_token, first.refresh_token);
        assert!(is_uuid_shaped(&second.refresh_token));

        // The presented token was not rotated out: it still refreshes.
        let third = svc.refresh(&first.refresh_token).unwrap();
        assert_ne!(third.refresh_token, first.refresh_token);
        assert_ne!(third.refresh_token, second.refresh_token);
    }

    #[test]
    fn refresh_with_unknown_or_expired_id_fails_identically() {
        let svc = test_service();
        let user = seed_user(&svc);

        let stale = svc
            .create_refresh_token(&user.id, Utc::now() - Duration::days(8))
            .unwrap();

        let expired = svc.refresh(&stale.id).unwrap_err();
        let unknown = svc
            .refresh("11111111-2222-4333-8444-555555555555")
            .unwrap_err();

        assert!(matches!(expired, AuthError::InvalidRefreshToken));
        assert!(matches!(unknown, AuthError::InvalidRefreshToken));
        assert_eq!(expired.to_string(), unknown.to_string());
    }

    #[test]
    fn revoke_ends_the_session_and_is_idempotent() {
        let svc = test_service();
        seed_user(&svc);

        let tokens = svc.authenticate("user@data.io", "P@assword123.0").unwrap();

        svc.revoke(&tokens.refresh_token).unwrap();
        let err = svc.refresh(&tokens.refresh_token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidRefreshToken));

        // Revoking again, or revoking an id that never existed, is a no-op.
        svc.revoke(&tokens.refresh_token).unwrap();
        svc.revoke("never-issued").unwrap();
    }

    #[test]
    fn refreshed_token_reflects_current_roles() {
        let svc = test_service();
        let user = seed_user(&svc);

        let tokens = svc.authenticate("user@data.io", "P@assword123.0").unwrap();
        let before = decode_claims(&tokens.access_token);
        assert!(before.user_data.roles.contains("admin"));

        svc.set_user_roles(&user.id, vec!["viewer".to_string()]).unwrap();

        let refreshed = svc.refresh(&tokens.refresh_token).unwrap();
        let after = decode_claims(&refreshed.access_token);
        assert!(!after.user_data.roles.contains("admin"));
        assert!(after.user_data.roles.contains("viewer"));
    }

    #[test]
    fn refresh_after_owner_deletion_looks_expired() {
        let svc = test_service();
        let user = seed_user(&svc);

        let tokens = svc.authenticate("user@data.io", "P@assword123.0").unwrap();

        // Deleting the user cascades to refresh_tokens; either way the
        // caller sees the single invalid-token error.
        svc.sql
            .exec(
                "DELETE FROM users WHERE id = ?1",
                &[catalog_sql::Value::Text(user.id.clone())],
            )
            .unwrap();

        let err = svc.refresh(&tokens.refresh_token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidRefreshToken));
    }
}
