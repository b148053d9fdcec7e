use serde::{Deserialize, Serialize};

use super::principal::Principal;

/// JWT claims payload for access tokens.
///
/// Every claim is a named, typed field; the claim set is fixed at
/// compile time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer: the configured service name.
    pub iss: String,

    /// Subject: the username.
    pub sub: String,

    /// Issued at (unix timestamp).
    pub iat: i64,

    /// Expiration (unix timestamp, iat + access-token TTL).
    pub exp: i64,

    /// Snapshot of the authenticated principal at issuance time.
    pub user_data: Principal,
}

/// A persisted refresh token.
///
/// The `id` is the opaque token handed to the client. Records are never
/// mutated after creation; revocation deletes the row, and expiry is
/// enforced by the lookup predicate rather than eager deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshTokenRecord {
    /// Opaque identifier (dashed UUIDv4). Globally unique, never reused.
    pub id: String,

    /// User that owns this token. The owner is re-resolved on refresh,
    /// never embedded.
    pub user_id: String,

    /// Unix timestamp when the record was created.
    pub created_at: i64,

    /// Unix timestamp when the record expires (created_at + refresh TTL).
    pub expires_at: i64,
}

/// Request body for login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for token refresh and logout.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Token pair returned after login or refresh.
#[derive(Debug, Clone, Serialize)]
pub struct SessionTokens {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub refresh_token: String,
}
