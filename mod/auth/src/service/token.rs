use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::model::{Claims, Principal, SessionTokens};
use crate::service::{AuthError, AuthService};

impl AuthService {
    /// Issue an access/refresh token pair for a principal.
    ///
    /// Builds and signs the access-token claims, then persists a new
    /// refresh record. All-or-nothing: a signer failure or a store
    /// failure aborts the whole issuance and the caller receives no
    /// partial result. The single `now` stamps every timestamp so the
    /// signed expiry and the persisted record cannot skew.
    pub fn issue_tokens(
        &self,
        principal: &Principal,
        now: DateTime<Utc>,
    ) -> Result<SessionTokens, AuthError> {
        let access_exp = now + Duration::seconds(self.config.access_token_ttl);

        let claims = Claims {
            iss: self.config.issuer.clone(),
            sub: principal.username.clone(),
            iat: now.timestamp(),
            exp: access_exp.timestamp(),
            user_data: principal.clone(),
        };

        let access_token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
        .map_err(|e| AuthError::Signing(e.to_string()))?;

        let refresh = self.create_refresh_token(&principal.id, now)?;

        Ok(SessionTokens {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: access_exp.timestamp() - now.timestamp(),
            refresh_token: refresh.id,
        })
    }
}
