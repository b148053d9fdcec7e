use serde::{Deserialize, Serialize};

/// A user identity with local credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier (UUIDv4, no dashes).
    pub id: String,

    /// Login name (unique).
    pub username: String,

    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,

    /// Argon2id hash in PHC string format. Persisted with the record but
    /// never exposed: API responses and token claims carry [`Principal`],
    /// which has no password field.
    ///
    /// [`Principal`]: crate::model::Principal
    pub password_hash: String,

    /// Role names assigned to the user.
    #[serde(default)]
    pub roles: Vec<String>,

    /// RFC 3339 creation timestamp.
    pub created_at: String,

    /// RFC 3339 last update timestamp.
    pub updated_at: String,
}

/// Input for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}
